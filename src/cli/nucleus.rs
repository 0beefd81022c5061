//! # 核素选项 CLI 定义
//!
//! plot / list / export 共用的核素参数。每个按核素给出的选项可以重复，
//! 要么省略（全部使用默认值），要么与 `--input` 的个数相同。
//!
//! ## 依赖关系
//! - 被 `cli/plot.rs`, `cli/list.rs`, `cli/export.rs` 展开使用
//! - 由 `config.rs` 转换为 RunConfig

use clap::{ArgAction, Args};
use std::path::PathBuf;

/// 核素参数
#[derive(Args, Debug, Clone, Default)]
pub struct NucleusArgs {
    /// TOML file describing the nuclei to plot (replaces the per-nucleus options)
    #[arg(short, long, conflicts_with = "input")]
    pub config: Option<PathBuf>,

    /// KSHELL summary file; repeat for several nuclei (one panel each)
    #[arg(short, long = "input", action = ArgAction::Append)]
    pub input: Vec<PathBuf>,

    /// Label shown under each panel, e.g. '$^{54}$Cr' (default: file stem)
    #[arg(short, long = "label", action = ArgAction::Append)]
    pub label: Vec<String>,

    /// Number of states to read from each file
    #[arg(short = 'n', long = "states", action = ArgAction::Append)]
    pub states: Vec<usize>,

    /// Comma-separated 1-based positions of states to ignore ('0' or 'none' = none)
    #[arg(long = "ignore", action = ArgAction::Append)]
    pub ignore: Vec<String>,

    /// Remove consecutive states with the same excitation energy (true/false)
    #[arg(long = "remove-doubles", action = ArgAction::Append, value_parser = clap::value_parser!(bool))]
    pub remove_doubles: Vec<bool>,

    /// Band split: 'njp' (N_Jp), 'none' (single column) or a comma-separated list, one entry per retained state
    #[arg(long = "bands", action = ArgAction::Append)]
    pub bands: Vec<String>,

    /// Write excitation energies and spin/parity next to each level (true/false)
    #[arg(long = "annotate", action = ArgAction::Append, value_parser = clap::value_parser!(bool))]
    pub annotate: Vec<bool>,

    /// Share the y-axis range across panels
    #[arg(long, default_value_t = false)]
    pub share_y: bool,
}
