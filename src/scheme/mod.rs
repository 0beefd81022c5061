//! # 能级图模块
//!
//! 从 summary 文件到能级图的数据处理与输出。
//!
//! ## 子模块
//! - `dedup`: 去除激发能相同的重复能级
//! - `bands`: 分带（带坐标）
//! - `axis`: 纵轴范围
//! - `pipeline`: 多核素处理流程
//! - `label`: 核素标签格式化
//! - `plot`: 图表生成
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `parsers/summary.rs` 和 `models/`

pub mod axis;
pub mod bands;
pub mod dedup;
pub mod export;
pub mod label;
pub mod pipeline;
pub mod plot;

pub use pipeline::{prepare_panels, Panel};
