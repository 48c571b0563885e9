//! # 简谐频率日志解析器
//!
//! 从频率比较日志中提取每个简正模式在中性分子和阴离子中的频率。
//!
//! ## 日志格式说明
//! ```text
//! Neutral's normal mode 1 ...      # 模式标记行
//! ...
//! ...
//! Neutral:    123.4567             # 标记行 +3
//! Anion:      110.2000             # 标记行 +4
//! ```
//!
//! 单个模式读取失败时记录诊断信息并继续，不会中断整个解析。
//!
//! ## 依赖关系
//! - 被 `commands/excite.rs` 使用
//! - 使用 `models/frequency.rs`

use super::capture_f64;
use crate::models::{FrequencyRecord, ModeFrequencies, NegativeMode, ParseDiagnostic};

use regex::Regex;
use std::sync::OnceLock;

/// 模式标记行必须同时包含的两个关键字
const MARKER_STATE: &str = "Neutral's";
const MARKER_MODE: &str = "normal mode";

/// 频率行相对标记行的偏移
const NEUTRAL_LINE_OFFSET: usize = 3;
const ANION_LINE_OFFSET: usize = 4;

fn neutral_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Neutral:\s+([\d.-]+)").expect("valid neutral regex"))
}

fn anion_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Anion:\s+([\d.-]+)").expect("valid anion regex"))
}

/// 提取简谐频率
pub fn extract_harmonic_frequencies(text: &str) -> FrequencyRecord {
    let lines: Vec<&str> = text.lines().collect();
    let mut record = FrequencyRecord::default();

    for (i, line) in lines.iter().enumerate() {
        if !(line.contains(MARKER_STATE) && line.contains(MARKER_MODE)) {
            continue;
        }

        let mode = record.modes.len() + 1;
        let neutral_line = lines.get(i + NEUTRAL_LINE_OFFSET).map(|l| l.trim());
        let anion_line = lines.get(i + ANION_LINE_OFFSET).map(|l| l.trim());

        let neutral = neutral_line.and_then(|l| capture_f64(neutral_re(), l));
        let anion = anion_line.and_then(|l| capture_f64(anion_re(), l));

        match (neutral, anion) {
            (Some(neutral), Some(anion)) if neutral < 0.0 || anion < 0.0 => {
                log::debug!("mode {}: negative frequency ({}, {})", mode, neutral, anion);
                record.negative.push(NegativeMode {
                    mode,
                    neutral,
                    anion,
                });
                record.modes.push(None);
            }
            (Some(neutral), Some(anion)) => {
                record.modes.push(Some(ModeFrequencies { neutral, anion }));
            }
            _ => {
                let reason = match (neutral_line, anion_line) {
                    (None, _) | (_, None) => "frequency lines missing after marker",
                    _ => "could not read neutral/anion frequency",
                };
                record.diagnostics.push(ParseDiagnostic {
                    block: mode,
                    line: i,
                    lines: vec![
                        neutral_line.unwrap_or("<missing>").to_string(),
                        anion_line.unwrap_or("<missing>").to_string(),
                    ],
                    reason: reason.to_string(),
                });
                record.modes.push(None);
            }
        }
    }

    log::info!(
        "harmonic log: {} modes, {} negative, {} unreadable",
        record.len(),
        record.negative.len(),
        record.diagnostics.len()
    );

    record
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOG: &str = r#"Frequency comparison
 Neutral's normal mode 1 vs Anion
 ------------------------------
 Frequencies (cm^-1)
 Neutral:    1000.00
 Anion:      1200.00
 Neutral's normal mode 2 vs Anion
 ------------------------------
 Frequencies (cm^-1)
 Neutral:    -35.10
 Anion:      80.50
 Neutral's normal mode 3 vs Anion
 ------------------------------
 Frequencies (cm^-1)
 Neutral:    1650.25
 Anion:      1598.75
"#;

    #[test]
    fn test_extract_harmonic_frequencies() {
        let record = extract_harmonic_frequencies(LOG);

        assert_eq!(record.len(), 3);
        assert_eq!(
            record.modes[0],
            Some(ModeFrequencies {
                neutral: 1000.0,
                anion: 1200.0
            })
        );
        assert_eq!(record.modes[1], None);
        assert_eq!(
            record.modes[2],
            Some(ModeFrequencies {
                neutral: 1650.25,
                anion: 1598.75
            })
        );
        assert!(record.diagnostics.is_empty());
    }

    #[test]
    fn test_negative_frequency_recorded() {
        let record = extract_harmonic_frequencies(LOG);

        assert_eq!(record.negative.len(), 1);
        let neg = &record.negative[0];
        assert_eq!(neg.mode, 2);
        assert!((neg.neutral - (-35.1)).abs() < 1e-12);
        assert!((neg.anion - 80.5).abs() < 1e-12);
    }

    #[test]
    fn test_malformed_mode_keeps_index() {
        let log = r#" Neutral's normal mode 1
 x
 x
 Neutral:    abc
 Anion:      100.0
 Neutral's normal mode 2
 x
 x
 Neutral:    500.0
 Anion:      450.0
"#;
        let record = extract_harmonic_frequencies(log);

        assert_eq!(record.len(), 2);
        assert_eq!(record.modes[0], None);
        assert!(record.modes[1].is_some());
        assert!(record.negative.is_empty());

        assert_eq!(record.diagnostics.len(), 1);
        let diag = &record.diagnostics[0];
        assert_eq!(diag.block, 1);
        assert_eq!(diag.line, 0);
        assert_eq!(diag.lines[0], "Neutral:    abc");
    }

    #[test]
    fn test_truncated_block_at_eof() {
        let log = " Neutral's normal mode 1\n x\n x\n Neutral:    500.0\n";
        let record = extract_harmonic_frequencies(log);

        assert_eq!(record.modes, vec![None]);
        assert_eq!(record.diagnostics.len(), 1);
        assert_eq!(record.diagnostics[0].lines[1], "<missing>");
    }

    #[test]
    fn test_no_markers() {
        let record = extract_harmonic_frequencies("nothing to see\nhere\n");
        assert!(record.is_empty());
    }
}
