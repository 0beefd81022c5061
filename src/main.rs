//! # levelscheme - KSHELL 能级图绘制工具
//!
//! 读取 KSHELL 壳模型计算的 summary 文件，筛选、去重、分带后绘制能级图。
//!
//! ## 子命令
//! - `plot`   - 绘制一个或多个核素的能级图（PNG/SVG）
//! - `list`   - 终端表格列出处理后的能级
//! - `export` - 导出处理后的能级为 CSV
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── config.rs   (命令行 / TOML -> RunConfig)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (summary 解析器)
//!   │     ├── scheme/    (去重、分带、纵轴、流程、绘图、导出)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod config;
mod error;
mod models;
mod parsers;
mod scheme;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
