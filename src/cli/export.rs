//! # export 子命令 CLI 定义
//!
//! 将处理后的能级及带坐标导出为 CSV。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/export.rs`

use super::nucleus::NucleusArgs;
use clap::Args;
use std::path::PathBuf;

/// export 子命令参数
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub nuclei: NucleusArgs,

    /// Output CSV path
    #[arg(short, long, default_value = "levels.csv")]
    pub output: PathBuf,
}
