//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `excite`: 振动电子激发能（简谐/非谐）
//! - `displace`: 沿简正模式生成位移几何
//! - `pes`: PES 切面图与振动能级
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: excite, displace, pes

pub mod displace;
pub mod excite;
pub mod pes;

use clap::{ArgAction, Parser, Subcommand};

/// vibrokit - 中性分子/阴离子振动电子工具箱
#[derive(Parser)]
#[command(name = "vibrokit")]
#[command(author = "Ely Miranda")]
#[command(version)]
#[command(about = "Vibronic excitation energies, normal-mode scans and PES cuts", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, default_value_t = false, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// 由 `-v` 次数得到日志级别
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Compute vibronic excitation energies between neutral and anion
    Excite(excite::ExciteArgs),

    /// Generate displaced XYZ geometries along a normal mode
    Displace(displace::DisplaceArgs),

    /// Plot a PES cut with harmonic vibrational levels
    Pes(pes::PesArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_levels() {
        let cli = Cli::parse_from(["vibrokit", "-vv", "excite", "none", "n.log", "a.log"]);
        assert_eq!(cli.log_level(), log::LevelFilter::Debug);

        let cli = Cli::parse_from(["vibrokit", "excite", "none", "n.log", "a.log"]);
        assert_eq!(cli.log_level(), log::LevelFilter::Warn);
    }
}
