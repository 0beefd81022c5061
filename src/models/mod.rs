//! # 数据模型模块
//!
//! 定义能级记录、能级集合和绘图配置。
//!
//! ## 依赖关系
//! - 被 `parsers/`、`scheme/` 和 `commands/` 使用
//! - 子模块: state, plot_spec

pub mod plot_spec;
pub mod state;

pub use plot_spec::{BandSplit, NucleusSpec, RunConfig};
pub use state::{StateCollection, StateRecord};
