//! # 多核素处理流程
//!
//! 对每个核素依次执行：读取 -> 分带 -> （可选）去重，并维护纵轴范围。
//! 所有核素处理完成后才返回，任何一个核素出错都会终止整个运行，
//! 因此不会产生残缺的多面板图。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `parsers/summary.rs`, `scheme/bands.rs`, `scheme/dedup.rs`, `scheme/axis.rs`

use crate::error::Result;
use crate::models::{NucleusSpec, RunConfig, StateCollection};
use crate::parsers;
use crate::scheme::axis::AxisRange;
use crate::scheme::bands::assign_bands;
use crate::scheme::dedup::{remove_double_states, DOUBLE_STATE_TOLERANCE};

/// 一个核素处理完成后的面板数据
#[derive(Debug, Clone)]
pub struct Panel {
    /// 核素序号（1 起）
    pub index: usize,
    pub label: String,
    pub file: String,
    pub annotate: bool,
    pub collection: StateCollection,
    pub axis: AxisRange,
    /// 被忽略列表排除的能级数
    pub ignored: usize,
    /// 去重删除的能级数
    pub doubles_removed: usize,
}

/// 交给渲染器的单面板参数
#[derive(Debug, Clone, PartialEq)]
pub struct PanelData {
    pub band_coordinates: Vec<f64>,
    pub excitation_energies: Vec<f64>,
    pub label: String,
    pub axis_range: (f64, f64),
    pub annotate: bool,
    pub spin_parities: Vec<String>,
}

impl Panel {
    pub fn render_data(&self) -> PanelData {
        PanelData {
            band_coordinates: self.collection.band_coordinates(),
            excitation_energies: self.collection.excitation_energies(),
            label: self.label.clone(),
            axis_range: (self.axis.min, self.axis.max),
            annotate: self.annotate,
            spin_parities: self.collection.spin_parities(),
        }
    }
}

/// 处理所有核素，每完成一个面板回调一次
pub fn prepare_panels<F>(config: &RunConfig, mut on_panel: F) -> Result<Vec<Panel>>
where
    F: FnMut(&Panel),
{
    let mut panels = Vec::with_capacity(config.nuclei.len());
    let mut shared: Option<AxisRange> = None;

    for (i, spec) in config.nuclei.iter().enumerate() {
        let index = i + 1;
        let file = spec.file.display().to_string();

        let (collection, ignored, doubles_removed) =
            process_nucleus(spec).map_err(|e| e.in_nucleus(index, file.clone()))?;

        let tight = AxisRange::tight(&collection.excitation_energies());
        let axis = if config.share_y_axis {
            shared = next_shared_range(shared, tight);
            shared.unwrap_or_else(AxisRange::fallback)
        } else {
            tight.unwrap_or_else(AxisRange::fallback)
        };

        let panel = Panel {
            index,
            label: spec.label.clone(),
            file,
            annotate: spec.annotate,
            collection,
            axis,
            ignored,
            doubles_removed,
        };

        on_panel(&panel);
        panels.push(panel);
    }

    Ok(panels)
}

/// 共享纵轴：在之前的最大范围基础上扩大
fn next_shared_range(shared: Option<AxisRange>, tight: Option<AxisRange>) -> Option<AxisRange> {
    match (shared, tight) {
        (Some(s), Some(t)) => Some(s.widen(t)),
        (s, t) => s.or(t),
    }
}

/// 读取 -> 分带 -> 去重
fn process_nucleus(spec: &NucleusSpec) -> Result<(StateCollection, usize, usize)> {
    let mut collection = parsers::parse_summary_file(&spec.file, spec.states, &spec.ignore)?;
    let ignored = spec.states - collection.len();

    assign_bands(&mut collection, &spec.bands)?;

    let doubles_removed = if spec.remove_doubles {
        remove_double_states(&mut collection, DOUBLE_STATE_TOLERANCE)
    } else {
        0
    };

    Ok((collection, ignored, doubles_removed))
}
