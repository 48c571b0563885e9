//! # displace 子命令 CLI 定义
//!
//! 沿简正模式位移向量生成 step_{-N..N}.xyz 几何，用于单点能扫描。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/displace.rs`

use clap::Args;
use std::path::PathBuf;

/// displace 子命令参数
#[derive(Args, Debug)]
pub struct DisplaceArgs {
    /// Equilibrium geometry in XYZ format
    pub geometry: PathBuf,

    /// Normal-mode displacement vector (4 header lines, then 'label dx dy dz')
    pub displacement: PathBuf,

    /// Factor multiplying the displacement vector per step
    #[arg(allow_negative_numbers = true)]
    pub factor: f64,

    /// Number of steps in each direction
    pub steps: u32,

    /// Output directory for the displaced geometries
    #[arg(short, long, env = "VIBROKIT_GEOM_DIR", default_value = "geom")]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_parse_displace() {
        let cli = Cli::parse_from(["vibrokit", "displace", "eq.xyz", "mode7.log", "0.05", "10"]);
        let Commands::Displace(args) = cli.command else {
            panic!("expected displace");
        };
        assert_eq!(args.factor, 0.05);
        assert_eq!(args.steps, 10);
    }
}
