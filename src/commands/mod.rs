//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `config.rs`, `scheme/`, `utils/`
//! - 子模块: prepare, plot, list, export

pub mod export;
pub mod list;
pub mod plot;
pub mod prepare;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Plot(args) => plot::execute(args),
        Commands::List(args) => list::execute(args),
        Commands::Export(args) => export::execute(args),
    }
}
