//! # 能级图生成
//!
//! 使用 `plotters` 库绘制能级图，每个核素一个面板，横向排列。
//!
//! ## 功能
//! - 每个能级画一条水平短线，横坐标为带坐标，纵坐标为激发能
//! - 可选标注激发能（右侧）和自旋宇称（左侧）
//! - 共享纵轴时只有第一个面板显示纵轴刻度
//! - 支持 PNG 和 SVG 输出
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 调用
//! - 使用 `scheme/pipeline.rs` 的 Panel, PanelData
//! - 使用 `plotters` 渲染图表

use crate::error::{LevelSchemeError, Result};
use crate::scheme::label::to_display_label;
use crate::scheme::pipeline::{Panel, PanelData};

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

/// 横轴起点
const X_MIN: f64 = 0.2;

/// 能级短线半宽（带坐标单位）
const LEVEL_HALF_WIDTH: f64 = 0.3;

/// 激发能文字相对能级的偏移
const ENERGY_TEXT_OFFSET: (f64, f64) = (0.22, 0.03);

/// 自旋宇称文字相对能级的偏移
const SPIN_TEXT_OFFSET: (f64, f64) = (-0.4, 0.03);

/// 生成能级图
pub fn generate_level_scheme_plot(
    panels: &[Panel],
    output_path: &Path,
    width: u32,
    height: u32,
    share_y_axis: bool,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_level_scheme(&root, panels, share_y_axis)?;
        root.present()
            .map_err(|e| LevelSchemeError::RenderError(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_level_scheme(&root, panels, share_y_axis)?;
        root.present()
            .map_err(|e| LevelSchemeError::RenderError(e.to_string()))?;
    }
    Ok(())
}

/// 在整张图上依次绘制各面板
fn draw_level_scheme<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    panels: &[Panel],
    share_y_axis: bool,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| LevelSchemeError::RenderError(format!("{:?}", e)))?;

    let areas = root.split_evenly((1, panels.len().max(1)));

    for (i, (area, panel)) in areas.iter().zip(panels).enumerate() {
        let show_y_axis = i == 0 || !share_y_axis;
        render_panel(area, &panel.render_data(), i == 0, show_y_axis)?;
    }

    Ok(())
}

fn no_tick_label(_: &f64) -> String {
    String::new()
}

/// 绘制单个面板
fn render_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    data: &PanelData,
    first: bool,
    show_y_axis: bool,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let band_max = data
        .band_coordinates
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let x_max = if band_max.is_finite() {
        band_max + 1.0
    } else {
        2.0
    };
    let (y_min, y_max) = data.axis_range;

    let mut chart = ChartBuilder::on(area)
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(if show_y_axis { 70 } else { 0 })
        .build_cartesian_2d(X_MIN..x_max, y_min..y_max)
        .map_err(|e| LevelSchemeError::RenderError(format!("{:?}", e)))?;

    {
        let mut mesh = chart.configure_mesh();
        mesh.disable_mesh()
            .x_label_formatter(&no_tick_label)
            .x_desc(to_display_label(&data.label))
            .y_label_style(("sans-serif", 16))
            .axis_desc_style(("sans-serif", 20));
        if first {
            mesh.y_desc("Excitation energy [MeV]");
        }
        mesh.draw()
            .map_err(|e| LevelSchemeError::RenderError(format!("{:?}", e)))?;
    }

    chart
        .draw_series(
            data.band_coordinates
                .iter()
                .zip(&data.excitation_energies)
                .map(|(&x, &y)| {
                    PathElement::new(
                        vec![(x - LEVEL_HALF_WIDTH, y), (x + LEVEL_HALF_WIDTH, y)],
                        BLACK.stroke_width(2),
                    )
                }),
        )
        .map_err(|e| LevelSchemeError::RenderError(format!("{:?}", e)))?;

    if data.annotate {
        let text_style = ("sans-serif", 13)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Left, VPos::Bottom));

        for ((&x, &y), spin_parity) in data
            .band_coordinates
            .iter()
            .zip(&data.excitation_energies)
            .zip(&data.spin_parities)
        {
            chart
                .draw_series(std::iter::once(Text::new(
                    format!("{:.3}", y),
                    (x + ENERGY_TEXT_OFFSET.0, y + ENERGY_TEXT_OFFSET.1),
                    text_style.clone(),
                )))
                .map_err(|e| LevelSchemeError::RenderError(format!("{:?}", e)))?;

            chart
                .draw_series(std::iter::once(Text::new(
                    spin_parity.clone(),
                    (x + SPIN_TEXT_OFFSET.0, y + SPIN_TEXT_OFFSET.1),
                    text_style.clone(),
                )))
                .map_err(|e| LevelSchemeError::RenderError(format!("{:?}", e)))?;
        }
    }

    Ok(())
}

/// 根据扩展名判断是否输出 SVG
pub fn is_svg_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("svg"))
        .unwrap_or(false)
}
