//! # 非谐频率日志解析器
//!
//! 日志按 4 行一块组织，每块对应一个振动模式：
//! ```text
//! Mode 12                          # +0
//! Fundamental:   1000.00           # +1
//! Overtone:      1950.00           # +2
//!                                  # +3
//! ```
//!
//! 由基频 ν₁ 和一级倍频 ν₂ 推出：
//! - ω_e = 3ν₁ − ν₂
//! - x_e = (2ν₁ − ν₂) / (2ω_e)
//!
//! 块的顺序与模式编号相反（最后一块是模式 1），见 `AnharmonicRecord::mode_number`。
//!
//! ## 依赖关系
//! - 被 `commands/excite.rs` 使用
//! - 使用 `models/frequency.rs`

use crate::models::{AnharmonicMode, AnharmonicRecord, ModeRejection, ParseDiagnostic};

const BLOCK_SIZE: usize = 4;
const FUNDAMENTAL_OFFSET: usize = 1;
const OVERTONE_OFFSET: usize = 2;

/// 提取非谐频率和非谐常数
pub fn extract_anharmonic_blocks(text: &str) -> AnharmonicRecord {
    let lines: Vec<&str> = text.lines().collect();
    let mut record = AnharmonicRecord::default();

    for start in (0..lines.len()).step_by(BLOCK_SIZE) {
        if start + OVERTONE_OFFSET >= lines.len() {
            break;
        }

        let fundamental_line = lines[start + FUNDAMENTAL_OFFSET].trim();
        let overtone_line = lines[start + OVERTONE_OFFSET].trim();

        let (fundamental, overtone) =
            match (colon_value(fundamental_line), colon_value(overtone_line)) {
                (Some(f), Some(o)) => (f, o),
                _ => {
                    log::debug!("skipping malformed anharmonic block at line {}", start);
                    record.diagnostics.push(ParseDiagnostic {
                        block: start / BLOCK_SIZE + 1,
                        line: start,
                        lines: lines[start..=start + OVERTONE_OFFSET]
                            .iter()
                            .map(|l| l.to_string())
                            .collect(),
                        reason: "expected 'label: value' on fundamental and overtone lines"
                            .to_string(),
                    });
                    record.modes.push(None);
                    continue;
                }
            };

        match anharmonic_mode(fundamental, overtone) {
            Ok(mode) => record.modes.push(Some(mode)),
            Err(rejection) => {
                if rejection == ModeRejection::DegenerateFrequency {
                    log::warn!(
                        "anharmonic block {} (line {}): 3 * {} - {} <= 0, mode skipped",
                        start / BLOCK_SIZE + 1,
                        start,
                        fundamental,
                        overtone
                    );
                }
                record.rejected.push((record.modes.len(), rejection));
                record.modes.push(None);
            }
        }
    }

    log::info!(
        "anharmonic log: {} blocks, {} usable, {} rejected, {} unreadable",
        record.len(),
        record.modes.iter().filter(|m| m.is_some()).count(),
        record.rejected.len(),
        record.diagnostics.len()
    );

    record
}

/// 由基频和倍频计算 ω_e 与 x_e
///
/// 输入为负或 ω_e ≤ 0（x_e 无定义）时返回拒绝原因。
pub fn anharmonic_mode(
    fundamental: f64,
    overtone: f64,
) -> std::result::Result<AnharmonicMode, ModeRejection> {
    if fundamental < 0.0 || overtone < 0.0 {
        return Err(ModeRejection::NegativeFrequency);
    }

    let frequency = 3.0 * fundamental - overtone;
    if frequency <= 0.0 {
        return Err(ModeRejection::DegenerateFrequency);
    }

    let anharmonicity = (2.0 * fundamental - overtone) / (2.0 * frequency);
    Ok(AnharmonicMode {
        frequency,
        anharmonicity,
    })
}

/// 取第一个冒号之后（到下一个冒号为止）的数值
fn colon_value(line: &str) -> Option<f64> {
    line.split(':').nth(1)?.trim().parse().ok()
}
