//! # PES 扫描数据解析器
//!
//! ```text
//! step  S0        pi*       sigma*
//! -2    0.1520    1.0312    2.4410
//! -1    0.0381    0.9120    2.3012
//!  0    0.0000    0.8801    2.2004
//! ```
//!
//! 第一行为表头，之后每行一个步长和至少两个电子态能量 (eV)。
//!
//! ## 依赖关系
//! - 被 `commands/pes.rs` 使用
//! - 使用 `models/scan.rs`

use crate::error::{Result, VibroError};
use crate::models::PesScan;

/// 从字符串内容解析 PES 扫描数据
pub fn parse_scan_content(content: &str, name: &str) -> Result<PesScan> {
    let parse_err = |reason: String| VibroError::ParseError {
        format: "scan".to_string(),
        path: name.to_string(),
        reason,
    };

    let mut lines = content.lines();
    let header: Vec<&str> = lines
        .next()
        .map(|h| h.split_whitespace().collect())
        .unwrap_or_default();

    let mut steps = Vec::new();
    let mut energies: Vec<Vec<f64>> = Vec::new();

    for (i, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let values: Vec<f64> = line
            .split_whitespace()
            .map(|s| s.parse::<f64>())
            .collect::<std::result::Result<_, _>>()
            .map_err(|_| parse_err(format!("Invalid data line {}: '{}'", i + 2, line.trim())))?;

        if values.len() < 3 {
            return Err(parse_err(format!(
                "Line {} needs a step and at least two energies",
                i + 2
            )));
        }

        if energies.is_empty() {
            energies = vec![Vec::new(); values.len() - 1];
        } else if values.len() - 1 != energies.len() {
            return Err(parse_err(format!(
                "Line {} has {} energy columns, expected {}",
                i + 2,
                values.len() - 1,
                energies.len()
            )));
        }

        steps.push(values[0]);
        for (state, &e) in values[1..].iter().enumerate() {
            energies[state].push(e);
        }
    }

    if steps.is_empty() {
        return Err(parse_err("No data points".to_string()));
    }

    // 表头列数匹配时沿用列名
    let labels = if header.len() == energies.len() + 1 {
        header[1..].iter().map(|s| s.to_string()).collect()
    } else {
        (1..=energies.len()).map(|i| format!("State {}", i)).collect()
    };

    Ok(PesScan {
        labels,
        steps,
        energies,
    })
}
