//! # export 命令实现
//!
//! 将处理后的能级导出为 CSV。
//!
//! ## 依赖关系
//! - 使用 `cli/export.rs` 定义的参数
//! - 使用 `commands/prepare.rs`, `scheme/export.rs`

use crate::cli::export::ExportArgs;
use crate::commands::prepare::prepare;
use crate::error::Result;
use crate::scheme::export;
use crate::utils::output;

/// 执行 export 命令
pub fn execute(args: ExportArgs) -> Result<()> {
    output::print_header("Exporting Levels");

    let (_, panels) = prepare(&args.nuclei)?;
    export::to_csv(&panels, &args.output)?;

    let total: usize = panels.iter().map(|p| p.collection.len()).sum();
    output::print_separator();
    output::print_done(&format!(
        "{} levels from {} nuclei saved to '{}'",
        total,
        panels.len(),
        args.output.display()
    ));

    Ok(())
}
