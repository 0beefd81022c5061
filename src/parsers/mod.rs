//! # 解析器模块
//!
//! 提供壳模型计算输出的解析器。
//!
//! ## 依赖关系
//! - 被 `scheme/pipeline.rs` 使用
//! - 使用 `models/` 数据模型
//! - 子模块: summary

pub mod summary;

pub use summary::parse_summary_file;
