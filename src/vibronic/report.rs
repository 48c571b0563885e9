//! # 激发能报告
//!
//! 将分析结果渲染为文本报告或 `tabled` 汇总表。
//! 计算保持完整精度，只在输出时保留两位小数。
//!
//! ## 依赖关系
//! - 被 `commands/excite.rs` 使用
//! - 使用 `vibronic/mod.rs` 的分析结构

use super::{AnharmonicAnalysis, ExcitationRow, HarmonicAnalysis, VibronicReport};
use crate::models::{AnharmonicMode, ElectronicEnergies};

use tabled::{Table, Tabled};

/// 汇总表行
#[derive(Debug, Clone, Tabled)]
pub struct SummaryRow {
    #[tabled(rename = "Mode")]
    mode: usize,
    #[tabled(rename = "Neutral")]
    neutral: String,
    #[tabled(rename = "Anion")]
    anion: String,
    #[tabled(rename = "ZPE→ZPE (meV)")]
    zpe: String,
    #[tabled(rename = "0→1 (meV)")]
    level1: String,
    #[tabled(rename = "0→2 (meV)")]
    level2: String,
    #[tabled(rename = "0→10 (meV)")]
    level10: String,
}

impl SummaryRow {
    fn new(mode: usize, neutral: String, anion: String, row: Option<&ExcitationRow>) -> Self {
        let cell = |n: usize| {
            row.map(|r| format!("{:.2}", r[n]))
                .unwrap_or_else(|| "-".to_string())
        };
        SummaryRow {
            mode,
            neutral,
            anion,
            zpe: cell(0),
            level1: cell(1),
            level2: cell(2),
            level10: cell(10),
        }
    }
}

/// 渲染完整文本报告
pub fn render_report(report: &VibronicReport) -> String {
    let mut result = render_energies(&report.energies);

    if let Some(ref harmonic) = report.harmonic {
        result.push_str(&render_negative_modes(harmonic));
        result.push('\n');
        result.push_str(&render_harmonic(harmonic));
    }

    if let Some(ref anharmonic) = report.anharmonic {
        result.push('\n');
        result.push_str(&render_anharmonic(anharmonic));
    }

    result
}

/// 单点能与垂直电子能
pub fn render_energies(energies: &ElectronicEnergies) -> String {
    format!(
        "Neutral single point energy: {:.8} a.u.\n\
         Anion single point energy: {:.8} a.u.\n\
         Vertical electron energy difference: {:.2} meV\n",
        energies.neutral,
        energies.anion,
        energies.vertical_electron_energy_mev()
    )
}

/// 负频率警告段，没有负频率时为空
pub fn render_negative_modes(harmonic: &HarmonicAnalysis) -> String {
    let negative = &harmonic.record.negative;
    if negative.is_empty() {
        return String::new();
    }

    let mut result = String::from("Negative frequencies found in the following modes:\n");
    for m in negative {
        result.push_str(&format!(
            "  Mode {}: Neutral: {:.2} cm^-1, Anion: {:.2} cm^-1\n",
            m.mode, m.neutral, m.anion
        ));
    }
    result
}

/// 简谐分析段
pub fn render_harmonic(harmonic: &HarmonicAnalysis) -> String {
    let mut result = String::from("Harmonic analysis:\n\n");

    for (i, (freqs, row)) in harmonic
        .record
        .modes
        .iter()
        .zip(harmonic.table.iter())
        .enumerate()
    {
        let mode = i + 1;
        match (freqs, row) {
            (Some(f), Some(row)) => {
                result.push_str(&format!(
                    "Normal mode {} (Neutral: {:.2} cm^-1, Anion: {:.2} cm^-1):\n",
                    mode, f.neutral, f.anion
                ));
                result.push_str(&render_levels(row));
            }
            _ => {
                let reason = if harmonic.record.negative_mode(mode).is_some() {
                    "negative frequency"
                } else {
                    "unreadable frequency block"
                };
                result.push_str(&format!(
                    "Normal mode {}: Skipping due to {}.\n",
                    mode, reason
                ));
            }
        }
    }

    result.push_str("\nEnd of harmonic analysis\n");
    result
}

/// 非谐分析段（模式编号倒序）
pub fn render_anharmonic(anharmonic: &AnharmonicAnalysis) -> String {
    let mut result = String::from("Anharmonic analysis:\n\n");

    for (i, row) in anharmonic.table.iter().enumerate() {
        let mode = anharmonic.mode_number(i);
        let neutral = anharmonic.neutral.modes[i];
        let anion = anharmonic.anion.modes[i];

        match (neutral, anion, row) {
            (Some(n), Some(a), Some(row)) => {
                result.push_str(&format!(
                    "Normal mode {} (Neutral: {:.0} cm^-1; x_e = {:.3} and Anion: {:.0} cm^-1; x_e = {:.3})\n",
                    mode, n.frequency, n.anharmonicity, a.frequency, a.anharmonicity
                ));
                result.push_str(&render_levels(row));
            }
            _ => {
                result.push_str(&format!(
                    "Normal mode {}: Skipping due to {}.\n",
                    mode,
                    anharmonic.skip_reason(i)
                ));
            }
        }
    }

    result.push_str("\nEnd of anharmonic analysis\n");
    result
}

fn render_levels(row: &ExcitationRow) -> String {
    let mut result = format!("  ZPE to ZPE: {:.2} meV\n", row[0]);
    for (n, energy) in row.iter().enumerate().skip(1) {
        result.push_str(&format!("  Excitation to level {}: {:.2} meV\n", n, energy));
    }
    result
}

/// 简谐汇总表
pub fn harmonic_summary(harmonic: &HarmonicAnalysis) -> Table {
    let rows: Vec<SummaryRow> = harmonic
        .record
        .modes
        .iter()
        .zip(harmonic.table.iter())
        .enumerate()
        .map(|(i, (freqs, row))| {
            let (neutral, anion) = match (freqs, harmonic.record.negative_mode(i + 1)) {
                (Some(f), _) => (format!("{:.2}", f.neutral), format!("{:.2}", f.anion)),
                (None, Some(neg)) => (format!("{:.2}", neg.neutral), format!("{:.2}", neg.anion)),
                (None, None) => ("?".to_string(), "?".to_string()),
            };
            SummaryRow::new(i + 1, neutral, anion, row.as_ref())
        })
        .collect();

    Table::new(rows)
}

/// 非谐汇总表，按报告模式编号升序
pub fn anharmonic_summary(anharmonic: &AnharmonicAnalysis) -> Table {
    let mut rows: Vec<SummaryRow> = anharmonic
        .table
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let describe = |m: Option<AnharmonicMode>| {
                m.map(|m| format!("{:.0} (x_e {:.3})", m.frequency, m.anharmonicity))
                    .unwrap_or_else(|| "-".to_string())
            };
            SummaryRow::new(
                anharmonic.mode_number(i),
                describe(anharmonic.neutral.modes[i]),
                describe(anharmonic.anion.modes[i]),
                row.as_ref(),
            )
        })
        .collect();
    rows.sort_by_key(|r| r.mode);

    Table::new(rows)
}
