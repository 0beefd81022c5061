//! # 公共准备步骤
//!
//! 三个子命令共用：构建运行配置，逐个核素读取、分带、去重，
//! 并在终端报告每个核素的处理结果。
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs`, `commands/list.rs`, `commands/export.rs` 调用
//! - 使用 `config.rs`, `scheme/pipeline.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::cli::nucleus::NucleusArgs;
use crate::config;
use crate::error::Result;
use crate::models::RunConfig;
use crate::scheme::{self, Panel};
use crate::utils::{output, progress};

/// 构建配置并处理所有核素
pub fn prepare(args: &NucleusArgs) -> Result<(RunConfig, Vec<Panel>)> {
    let config = config::load_run_config(args)?;

    match &args.config {
        Some(path) => output::print_info(&format!("Using config file '{}'", path.display())),
        None => output::print_info("Using command-line options"),
    }
    output::print_info(&format!(
        "{} nuclei, {} y-axis",
        config.nuclei.len(),
        if config.share_y_axis {
            "shared"
        } else {
            "independent"
        }
    ));

    let pb = progress::create_progress_bar(config.nuclei.len() as u64, "Loading");

    let result = scheme::prepare_panels(&config, |panel| {
        let spec = &config.nuclei[panel.index - 1];
        pb.suspend(|| {
            output::print_success(&format!(
                "#{} {}: {} states from '{}' (bands: {})",
                panel.index,
                panel.label,
                panel.collection.len(),
                panel.file,
                spec.bands
            ));
            if panel.ignored > 0 {
                output::print_info(&format!("    ignored {} state(s)", panel.ignored));
            }
            if panel.doubles_removed > 0 {
                output::print_info(&format!(
                    "    removed {} double state(s)",
                    panel.doubles_removed
                ));
            }
            if panel.collection.is_empty() {
                output::print_warning(&format!("    no states left to plot for {}", panel.label));
            }
        });
        pb.inc(1);
    });

    pb.finish_and_clear();

    let panels = result?;
    Ok((config, panels))
}
