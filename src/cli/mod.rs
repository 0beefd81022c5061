//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `plot`: 绘制能级图
//! - `list`: 终端表格列出能级
//! - `export`: 导出能级为 CSV
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: nucleus, plot, list, export

pub mod export;
pub mod list;
pub mod nucleus;
pub mod plot;

use clap::{Parser, Subcommand};

/// levelscheme - KSHELL 能级图绘制工具
#[derive(Parser)]
#[command(name = "levelscheme")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Plot energy-level schemes from KSHELL shell-model summary files", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Plot the level scheme of one or more nuclei side by side
    Plot(plot::PlotArgs),

    /// Print the processed levels of each nucleus as a table
    List(list::ListArgs),

    /// Export the processed levels and band coordinates to CSV
    Export(export::ExportArgs),
}
