//! # vibrokit - 中性分子/阴离子振动电子工具箱
//!
//! 将单点能扫描、PES 切面绘图和振动电子激发能计算脚本统一成单一可执行文件。
//!
//! ## 子命令
//! - `excite`   - 振动电子激发能（简谐/非谐）
//! - `displace` - 沿简正模式生成位移几何
//! - `pes`      - PES 切面图与振动能级
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (日志与几何解析器)
//!   │     ├── vibronic/  (能级模型、激发能表、报告)
//!   │     ├── pes/       (PES 能级与绘图)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod pes;
mod utils;
mod vibronic;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    // RUST_LOG 优先于 -v
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .init();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
