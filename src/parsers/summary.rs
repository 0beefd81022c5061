//! # KSHELL summary 文件解析器
//!
//! 读取 KSHELL 壳模型计算产生的 summary 文件中的激发态列表。
//!
//! ## summary 格式说明
//! ```text
//! Energy levels                                   <- 前 5 行为表头，直接跳过
//!
//! N    J prty N_Jp    T     E(MeV)  Ex(MeV)  log-file
//!
//!
//!    1     0 +     1     3   -95.123    0.000  log_Cr54_jj44b_m0p.txt
//!    2     4 +     1     3   -94.276    0.847  log_Cr54_jj44b_m0p.txt
//! ...
//! ```
//! 每行 8 列：N, 2J, 宇称, N_Jp, T, E, Ex, log 文件。
//!
//! ## 依赖关系
//! - 被 `scheme/pipeline.rs` 使用
//! - 使用 `models/state.rs`

use crate::error::{LevelSchemeError, Result};
use crate::models::{StateCollection, StateRecord};

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// 表头行数
pub const HEADER_LINES: usize = 5;

/// 每行记录的列数
const FIELDS_PER_RECORD: usize = 8;

/// 解析 summary 文件
pub fn parse_summary_file(
    path: &Path,
    states: usize,
    ignore: &BTreeSet<usize>,
) -> Result<StateCollection> {
    if !path.exists() {
        return Err(LevelSchemeError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let file = File::open(path).map_err(|e| LevelSchemeError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    load_summary(
        BufReader::new(file),
        &path.display().to_string(),
        states,
        ignore,
    )
}

/// 从任意 reader 读取 summary 内容
///
/// 跳过表头后恰好读取 `states` 行；在读取顺序中的位置（1 起）属于 `ignore`
/// 的行仍然会被解析，但不会保留。
pub fn load_summary<R: BufRead>(
    reader: R,
    source: &str,
    states: usize,
    ignore: &BTreeSet<usize>,
) -> Result<StateCollection> {
    let mut lines = reader.lines();

    for _ in 0..HEADER_LINES {
        match lines.next() {
            Some(line) => {
                line.map_err(|e| LevelSchemeError::FileReadError {
                    path: source.to_string(),
                    source: e,
                })?;
            }
            None => {
                return Err(LevelSchemeError::TruncatedFile {
                    path: source.to_string(),
                    expected: states,
                    found: 0,
                })
            }
        }
    }

    let mut records = Vec::with_capacity(states);

    for position in 1..=states {
        let line = match lines.next() {
            Some(line) => line.map_err(|e| LevelSchemeError::FileReadError {
                path: source.to_string(),
                source: e,
            })?,
            None => {
                return Err(LevelSchemeError::TruncatedFile {
                    path: source.to_string(),
                    expected: states,
                    found: position - 1,
                })
            }
        };

        let line_no = HEADER_LINES + position;
        let record = parse_state_line(&line).map_err(|reason| {
            LevelSchemeError::MalformedRecord {
                path: source.to_string(),
                line: line_no,
                reason,
            }
        })?;

        if !ignore.contains(&position) {
            records.push(record);
        }
    }

    Ok(StateCollection::from_states(records))
}

/// 解析单行激发态记录
fn parse_state_line(line: &str) -> std::result::Result<StateRecord, String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < FIELDS_PER_RECORD {
        return Err(format!(
            "expected {} fields, found {}: '{}'",
            FIELDS_PER_RECORD,
            parts.len(),
            line.trim()
        ));
    }

    Ok(StateRecord {
        ordinal: parse_field(parts[0], "N")?,
        spin_doubled: parse_field(parts[1], "2J")?,
        parity: parts[2].to_string(),
        intrinsic_band_id: parse_field(parts[3], "N_Jp")?,
        isospin: parse_field(parts[4], "T")?,
        energy_abs: parse_field(parts[5], "E")?,
        energy_excitation: parse_field(parts[6], "Ex")?,
        provenance_tag: parts[7].to_string(),
    })
}

fn parse_field<T: std::str::FromStr>(token: &str, name: &str) -> std::result::Result<T, String> {
    token
        .parse::<T>()
        .map_err(|_| format!("cannot parse {} from '{}'", name, token))
}
