//! # list 命令实现
//!
//! 以表格列出每个核素处理后的能级及其带坐标。
//!
//! ## 依赖关系
//! - 使用 `cli/list.rs` 定义的参数
//! - 使用 `commands/prepare.rs`
//! - 使用 `tabled` 输出表格

use crate::cli::list::ListArgs;
use crate::commands::prepare::prepare;
use crate::error::Result;
use crate::scheme::Panel;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 能级表格行
#[derive(Debug, Clone, Tabled)]
struct LevelRow {
    #[tabled(rename = "N")]
    ordinal: String,
    #[tabled(rename = "2J")]
    spin_doubled: i32,
    #[tabled(rename = "J^π")]
    spin_parity: String,
    #[tabled(rename = "N_Jp")]
    n_jp: String,
    #[tabled(rename = "T")]
    isospin: i32,
    #[tabled(rename = "E (MeV)")]
    energy: String,
    #[tabled(rename = "Ex (MeV)")]
    excitation: String,
    #[tabled(rename = "Band")]
    band: String,
    #[tabled(rename = "Log file")]
    log_file: String,
}

/// 执行 list 命令
pub fn execute(args: ListArgs) -> Result<()> {
    output::print_header("Energy Levels");

    let (config, panels) = prepare(&args.nuclei)?;

    for panel in &panels {
        output::print_header(&format!(
            "#{} {} ({} levels, axis {:.2} .. {:.2} MeV{})",
            panel.index,
            panel.label,
            panel.collection.len(),
            panel.axis.min,
            panel.axis.max,
            if config.share_y_axis { ", shared" } else { "" }
        ));

        let rows = level_rows(panel);
        if rows.is_empty() {
            output::print_warning("No levels");
        } else {
            println!("{}", Table::new(&rows));
        }
    }

    Ok(())
}

fn level_rows(panel: &Panel) -> Vec<LevelRow> {
    panel
        .collection
        .levels()
        .iter()
        .map(|level| {
            let s = &level.state;
            LevelRow {
                ordinal: format!("{}", s.ordinal),
                spin_doubled: s.spin_doubled,
                spin_parity: s.spin_parity(),
                n_jp: format!("{}", s.intrinsic_band_id),
                isospin: s.isospin,
                energy: format!("{:.3}", s.energy_abs),
                excitation: format!("{:.3}", s.energy_excitation),
                band: format!("{}", level.band),
                log_file: s.provenance_tag.clone(),
            }
        })
        .collect()
}
