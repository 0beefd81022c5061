//! # plot 命令实现
//!
//! 绘制一个或多个核素的能级图，每个核素一个面板。
//!
//! ## 依赖关系
//! - 使用 `cli/plot.rs` 定义的参数
//! - 使用 `commands/prepare.rs`
//! - 使用 `scheme/plot.rs` 渲染

use crate::cli::plot::{PlotArgs, PlotFormat};
use crate::commands::prepare::prepare;
use crate::error::Result;
use crate::scheme::plot::{generate_level_scheme_plot, is_svg_path};
use crate::utils::output;

/// 执行 plot 命令
pub fn execute(args: PlotArgs) -> Result<()> {
    output::print_header("Energy Level Scheme");

    let (config, panels) = prepare(&args.nuclei)?;

    let format = args.format.unwrap_or(if is_svg_path(&args.output) {
        PlotFormat::Svg
    } else {
        PlotFormat::Png
    });
    let width = args.panel_width.saturating_mul(panels.len() as u32);

    output::print_info(&format!(
        "Rendering {} panel(s), {}x{} {}",
        panels.len(),
        width,
        args.height,
        format
    ));

    generate_level_scheme_plot(
        &panels,
        &args.output,
        width,
        args.height,
        config.share_y_axis,
        format == PlotFormat::Svg,
    )?;

    output::print_separator();
    output::print_done(&format!(
        "Level scheme saved to '{}'",
        args.output.display()
    ));

    Ok(())
}
