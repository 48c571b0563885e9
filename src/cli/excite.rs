//! # excite 子命令 CLI 定义
//!
//! ```text
//! vibrokit excite FREQ_LOG NEUTRAL_LOG ANION_LOG [NEUTRAL_ANHARM ANION_ANHARM]
//! ```
//!
//! `FREQ_LOG` 为 `none` 时跳过简谐分析。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/excite.rs`

use clap::{Args, ValueEnum};
use std::path::{Path, PathBuf};

/// 跳过简谐分析的占位参数
pub const SKIP_SENTINEL: &str = "none";

/// 报告输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Full per-level text report
    #[default]
    Text,
    /// Compact summary table
    Table,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Table => write!(f, "table"),
        }
    }
}

/// excite 子命令参数
#[derive(Args, Debug)]
pub struct ExciteArgs {
    /// Harmonic frequency comparison log ('none' to skip the harmonic analysis)
    pub freq_log: PathBuf,

    /// Neutral single point log (SCF energy)
    pub neutral_log: PathBuf,

    /// Anion single point log (SCF energy)
    pub anion_log: PathBuf,

    /// Neutral anharmonic frequency log (fundamental/overtone blocks)
    #[arg(requires = "anion_anharm")]
    pub neutral_anharm: Option<PathBuf>,

    /// Anion anharmonic frequency log (fundamental/overtone blocks)
    #[arg(requires = "neutral_anharm")]
    pub anion_anharm: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Also write all excitation energies to a CSV file
    #[arg(long)]
    pub output_csv: Option<PathBuf>,
}

impl ExciteArgs {
    /// 简谐频率日志，占位参数时为 `None`
    pub fn harmonic_log(&self) -> Option<&Path> {
        let is_sentinel = self
            .freq_log
            .to_str()
            .map(|s| s.eq_ignore_ascii_case(SKIP_SENTINEL))
            .unwrap_or(false);
        if is_sentinel {
            None
        } else {
            Some(self.freq_log.as_path())
        }
    }

    /// 中性分子与阴离子的非谐日志
    pub fn anharmonic_logs(&self) -> Option<(&Path, &Path)> {
        match (&self.neutral_anharm, &self.anion_anharm) {
            (Some(n), Some(a)) => Some((n.as_path(), a.as_path())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("vibrokit").chain(args.iter().copied()))
    }

    #[test]
    fn test_harmonic_only() {
        let cli = parse(&["excite", "freq.log", "n.log", "a.log"]).unwrap();
        let Commands::Excite(args) = cli.command else {
            panic!("expected excite");
        };
        assert_eq!(args.harmonic_log().unwrap().to_str(), Some("freq.log"));
        assert!(args.anharmonic_logs().is_none());
    }

    #[test]
    fn test_none_sentinel_with_anharmonic() {
        let cli = parse(&["excite", "NONE", "n.log", "a.log", "nf.log", "af.log"]).unwrap();
        let Commands::Excite(args) = cli.command else {
            panic!("expected excite");
        };
        assert!(args.harmonic_log().is_none());
        let (n, a) = args.anharmonic_logs().unwrap();
        assert_eq!(n.to_str(), Some("nf.log"));
        assert_eq!(a.to_str(), Some("af.log"));
    }

    #[test]
    fn test_wrong_arity_rejected() {
        assert!(parse(&["excite", "freq.log", "n.log"]).is_err());
        assert!(parse(&["excite", "freq.log", "n.log", "a.log", "nf.log"]).is_err());
        assert!(parse(&["excite", "f", "n", "a", "nf", "af", "extra"]).is_err());
    }
}
