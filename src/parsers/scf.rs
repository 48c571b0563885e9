//! # SCF 单点能解析器
//!
//! 从 Gaussian 风格的单点计算日志中提取第一个 SCF 能量。
//!
//! ```text
//!  SCF Done:  E(RB3LYP) =  -1234.56789012     A.U. after   12 cycles
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/excite.rs` 使用

use super::capture_f64;
use crate::error::{Result, VibroError};

use regex::Regex;
use std::sync::OnceLock;

const SCF_MARKER: &str = "SCF Done:";

fn scf_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"SCF Done:\s+E\(\w+\)\s+=\s+([-0-9.]+)").expect("valid SCF regex")
    })
}

/// 提取 SCF 能量 (Hartree)
///
/// `source` 只用于错误信息。找不到能量时返回 [`VibroError::MissingData`]。
pub fn extract_scf_energy(text: &str, source: &str) -> Result<f64> {
    text.lines()
        .filter(|line| line.contains(SCF_MARKER))
        .find_map(|line| capture_f64(scf_re(), line))
        .ok_or_else(|| VibroError::MissingData {
            what: "SCF energy".to_string(),
            path: source.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_first_scf_energy() {
        let log = r#" Entering Link 1
 SCF Done:  E(UB3LYP) =  -567.123456789     A.U. after   15 cycles
 SCF Done:  E(UB3LYP) =  -567.999999999     A.U. after    3 cycles
"#;
        let e = extract_scf_energy(log, "neutral.log").unwrap();
        assert!((e - (-567.123456789)).abs() < 1e-12);
    }

    #[test]
    fn test_skips_unmatched_marker_line() {
        let log = r#" SCF Done: convergence failure
 SCF Done:  E(RHF) =  -76.0107465     A.U. after    9 cycles
"#;
        let e = extract_scf_energy(log, "water.log").unwrap();
        assert!((e - (-76.0107465)).abs() < 1e-12);
    }

    #[test]
    fn test_missing_scf_energy() {
        let err = extract_scf_energy(" Normal termination\n", "anion.log").unwrap_err();
        match err {
            VibroError::MissingData { what, path } => {
                assert_eq!(what, "SCF energy");
                assert_eq!(path, "anion.log");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
