//! # 能级数据导出
//!
//! 将处理后的能级（含带坐标）导出为 CSV，每行一个能级，`nucleus` 列区分核素。
//!
//! ## 依赖关系
//! - 被 `commands/export.rs` 调用
//! - 使用 `scheme/pipeline.rs` 的 Panel
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{LevelSchemeError, Result};
use crate::scheme::pipeline::Panel;

use std::io::Write;
use std::path::Path;

const HEADER: [&str; 11] = [
    "nucleus", "N", "2J", "J_pi", "N_Jp", "T", "E_MeV", "Ex_MeV", "band", "log_file", "source",
];

/// 导出为 CSV 文件
pub fn to_csv(panels: &[Panel], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    write_levels(&mut wtr, panels)?;

    wtr.flush().map_err(|e| LevelSchemeError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 写入表头和所有能级
pub fn write_levels<W: Write>(wtr: &mut csv::Writer<W>, panels: &[Panel]) -> Result<()> {
    wtr.write_record(HEADER)?;

    for panel in panels {
        for level in panel.collection.levels() {
            let s = &level.state;
            wtr.write_record(&[
                panel.label.clone(),
                format!("{}", s.ordinal),
                s.spin_doubled.to_string(),
                s.spin_parity(),
                format!("{}", s.intrinsic_band_id),
                s.isospin.to_string(),
                format!("{:.3}", s.energy_abs),
                format!("{:.3}", s.energy_excitation),
                format!("{}", level.band),
                s.provenance_tag.clone(),
                panel.file.clone(),
            ])?;
        }
    }

    Ok(())
}
