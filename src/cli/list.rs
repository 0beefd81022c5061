//! # list 子命令 CLI 定义
//!
//! 在终端以表格列出处理后的能级。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/list.rs`

use super::nucleus::NucleusArgs;
use clap::Args;

/// list 子命令参数
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub nuclei: NucleusArgs,
}
