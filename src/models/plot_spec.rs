//! # 绘图配置模型
//!
//! 每个核素一份 `NucleusSpec`，整次运行一份不可变的 `RunConfig`。
//! 单核素即只有一个元素的列表。
//!
//! ## 依赖关系
//! - 被 `config.rs` 构建
//! - 被 `scheme/pipeline.rs` 读取

use crate::error::{LevelSchemeError, Result};

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::str::FromStr;

/// 分带方式
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BandSplit {
    /// 不分带，所有能级放在同一列
    Uniform,
    /// 使用 N_Jp 作为带坐标
    #[default]
    Derived,
    /// 为每个保留的能级显式给出带坐标
    Explicit(Vec<f64>),
}

impl FromStr for BandSplit {
    type Err = LevelSchemeError;

    /// 解析分带描述：`njp`/`derived`/`0`、`none`/`uniform`，或逗号分隔的坐标列表
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "njp" | "n_jp" | "derived" | "0" => return Ok(BandSplit::Derived),
            "none" | "uniform" => return Ok(BandSplit::Uniform),
            _ => {}
        }

        let coords = s
            .split(',')
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<f64>().map_err(|_| {
                    LevelSchemeError::InvalidBandSpec(format!(
                        "'{}' (expected 'njp', 'none' or a comma-separated list of numbers)",
                        s
                    ))
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        if coords.is_empty() {
            return Err(LevelSchemeError::InvalidBandSpec(format!(
                "'{}' (empty band list)",
                s
            )));
        }

        Ok(BandSplit::Explicit(coords))
    }
}

impl std::fmt::Display for BandSplit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BandSplit::Uniform => write!(f, "none"),
            BandSplit::Derived => write!(f, "N_Jp"),
            BandSplit::Explicit(coords) => write!(f, "explicit ({} entries)", coords.len()),
        }
    }
}

/// 单个核素的绘图配置
#[derive(Debug, Clone)]
pub struct NucleusSpec {
    /// summary 文件路径
    pub file: PathBuf,
    /// 面板下方显示的核素名
    pub label: String,
    /// 读取的激发态数目
    pub states: usize,
    /// 忽略的能级（在读取顺序中的 1 起位置）
    pub ignore: BTreeSet<usize>,
    /// 是否自动去除能量相同的重复能级
    pub remove_doubles: bool,
    /// 分带方式
    pub bands: BandSplit,
    /// 是否标注能量和自旋宇称
    pub annotate: bool,
}

impl NucleusSpec {
    /// 使用默认选项创建，标签取文件名主干
    pub fn new(file: impl Into<PathBuf>, states: usize) -> Self {
        let file = file.into();
        let label = default_label(&file);
        NucleusSpec {
            file,
            label,
            states,
            ignore: BTreeSet::new(),
            remove_doubles: false,
            bands: BandSplit::Derived,
            annotate: true,
        }
    }
}

/// 由文件名推出默认标签（`summary_Cr54.txt` -> `Cr54`）
pub fn default_label(file: &std::path::Path) -> String {
    let stem = file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("nucleus");
    stem.strip_prefix("summary_").unwrap_or(stem).to_string()
}

/// 整次运行的配置
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub nuclei: Vec<NucleusSpec>,
    /// 多个面板共享纵轴范围
    pub share_y_axis: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_parse_band_modes() {
        assert_eq!("njp".parse::<BandSplit>().unwrap(), BandSplit::Derived);
        assert_eq!("0".parse::<BandSplit>().unwrap(), BandSplit::Derived);
        assert_eq!("None".parse::<BandSplit>().unwrap(), BandSplit::Uniform);
        assert_eq!(
            "2, 4,4,5,3".parse::<BandSplit>().unwrap(),
            BandSplit::Explicit(vec![2.0, 4.0, 4.0, 5.0, 3.0])
        );
    }

    #[test]
    fn test_parse_band_invalid() {
        assert!(matches!(
            "sideways".parse::<BandSplit>(),
            Err(LevelSchemeError::InvalidBandSpec(_))
        ));
        assert!(matches!(
            ",,".parse::<BandSplit>(),
            Err(LevelSchemeError::InvalidBandSpec(_))
        ));
    }

    #[test]
    fn test_default_label() {
        assert_eq!(default_label(Path::new("data/summary_Cr54.txt")), "Cr54");
        assert_eq!(default_label(Path::new("Ca43.dat")), "Ca43");
    }
}
