//! # 振动电子激发能模块
//!
//! 由频率记录和 SCF 能量计算中性分子 -> 阴离子的振动电子激发能。
//!
//! ## 子模块
//! - `energy`: 振动能级与垂直电子能
//! - `excitation`: 激发能表
//! - `report`: 文本报告与汇总表
//! - `export`: CSV 导出
//!
//! ## 依赖关系
//! - 被 `commands/excite.rs` 使用
//! - 使用 `models/`

pub mod energy;
pub mod excitation;
pub mod export;
pub mod report;

pub use excitation::{ExcitationRow, ExcitationTable};

use crate::models::{AnharmonicRecord, ElectronicEnergies, FrequencyRecord};

/// 简谐分析结果
#[derive(Debug, Clone)]
pub struct HarmonicAnalysis {
    pub record: FrequencyRecord,
    pub table: ExcitationTable,
}

impl HarmonicAnalysis {
    /// `vee` 为垂直电子能 (eV)
    pub fn new(record: FrequencyRecord, vee: f64) -> Self {
        let table = excitation::harmonic_excitation_table(&record.neutral(), &record.anion(), vee);
        HarmonicAnalysis { record, table }
    }
}

/// 非谐分析结果
#[derive(Debug, Clone)]
pub struct AnharmonicAnalysis {
    pub neutral: AnharmonicRecord,
    pub anion: AnharmonicRecord,
    pub table: ExcitationTable,
}

impl AnharmonicAnalysis {
    pub fn new(neutral: AnharmonicRecord, anion: AnharmonicRecord, vee: f64) -> Self {
        let table = excitation::anharmonic_excitation_table(
            &neutral.frequencies(),
            &anion.frequencies(),
            &neutral.constants(),
            &anion.constants(),
            vee,
        );
        AnharmonicAnalysis {
            neutral,
            anion,
            table,
        }
    }

    // NOTE: 简谐部分按日志顺序编号，这里沿用上游日志的倒序约定，两者不统一。
    /// 第 `index` 行的报告模式编号（按中性分子日志的块数倒序）
    pub fn mode_number(&self, index: usize) -> usize {
        self.neutral.mode_number(index)
    }

    /// 第 `block` 块（从 1 开始）的报告模式编号，超出中性分子日志时为 `None`
    pub fn reported_mode(&self, block: usize) -> Option<usize> {
        block
            .checked_sub(1)
            .filter(|&index| index < self.neutral.len())
            .map(|index| self.mode_number(index))
    }

    /// 该块是否在任一日志中无法读取
    pub fn is_unreadable(&self, index: usize) -> bool {
        let block = index + 1;
        self.neutral.diagnostics.iter().any(|d| d.block == block)
            || self.anion.diagnostics.iter().any(|d| d.block == block)
    }

    /// 第 `index` 行被跳过的原因
    pub fn skip_reason(&self, index: usize) -> &'static str {
        if self.is_unreadable(index) {
            return "unreadable anharmonic block";
        }
        self.neutral
            .rejection(index)
            .or_else(|| self.anion.rejection(index))
            .map(|r| r.reason())
            .unwrap_or("missing anharmonic data")
    }
}

/// 完整的激发能分析
#[derive(Debug, Clone)]
pub struct VibronicReport {
    pub energies: ElectronicEnergies,
    pub harmonic: Option<HarmonicAnalysis>,
    pub anharmonic: Option<AnharmonicAnalysis>,
}

impl VibronicReport {
    pub fn new(
        energies: ElectronicEnergies,
        harmonic: Option<FrequencyRecord>,
        anharmonic: Option<(AnharmonicRecord, AnharmonicRecord)>,
    ) -> Self {
        let vee = energies.vertical_electron_energy();
        VibronicReport {
            energies,
            harmonic: harmonic.map(|record| HarmonicAnalysis::new(record, vee)),
            anharmonic: anharmonic
                .map(|(neutral, anion)| AnharmonicAnalysis::new(neutral, anion, vee)),
        }
    }

    /// 是否有可报告的内容
    pub fn has_analysis(&self) -> bool {
        self.harmonic.is_some() || self.anharmonic.is_some()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::parsers::anharmonic::extract_anharmonic_blocks;
    use crate::parsers::frequencies::extract_harmonic_frequencies;

    pub(crate) const HARMONIC_LOG: &str = r#" Neutral's normal mode 1
 --
 --
 Neutral:    1000.0
 Anion:      1200.0
 Neutral's normal mode 2
 --
 --
 Neutral:    -15.0
 Anion:      300.0
"#;

    pub(crate) const NEUTRAL_ANHARM: &str = r#"Mode A
Fundamental: 1000.0
Overtone: 1950.0

Mode B
Fundamental: 500.0
Overtone: 990.0

Mode C
Fundamental: 300.0
Overtone: 598.0
"#;

    pub(crate) const ANION_ANHARM: &str = r#"Mode A
Fundamental: 980.0
Overtone: 1920.0

Mode B
Fundamental: 480.0
Overtone: 950.0

Mode C
Fundamental: 290.0
Overtone: bad
"#;

    pub(crate) fn sample_report() -> VibronicReport {
        VibronicReport::new(
            ElectronicEnergies::new(-100.0, -100.02),
            Some(extract_harmonic_frequencies(HARMONIC_LOG)),
            Some((
                extract_anharmonic_blocks(NEUTRAL_ANHARM),
                extract_anharmonic_blocks(ANION_ANHARM),
            )),
        )
    }

    #[test]
    fn test_report_pipeline() {
        let report = sample_report();
        assert!(report.has_analysis());

        let harmonic = report.harmonic.as_ref().unwrap();
        assert_eq!(harmonic.table.len(), 2);
        assert!(harmonic.table[0].is_some());
        assert!(harmonic.table[1].is_none());

        let anharmonic = report.anharmonic.as_ref().unwrap();
        assert_eq!(anharmonic.table.len(), 3);
        assert!(anharmonic.table[0].is_some());
        assert!(anharmonic.table[2].is_none());
        assert!(anharmonic.is_unreadable(2));
        assert!(!anharmonic.is_unreadable(0));
        assert_eq!(anharmonic.skip_reason(2), "unreadable anharmonic block");
    }

    #[test]
    fn test_skip_reason_degenerate() {
        let neutral = extract_anharmonic_blocks(
            "Mode 2\nFundamental: 650.0\nOvertone: 1950.0\n\nMode 1\nFundamental: 500.0\nOvertone: 990.0\n",
        );
        let anion = extract_anharmonic_blocks(
            "Mode 2\nFundamental: 600.0\nOvertone: 1150.0\n\nMode 1\nFundamental: -1.0\nOvertone: 990.0\n",
        );
        let analysis = AnharmonicAnalysis::new(neutral, anion, 0.0);

        assert_eq!(analysis.skip_reason(0), "degenerate anharmonic frequency");
        assert_eq!(analysis.skip_reason(1), "negative frequency");
    }

    #[test]
    fn test_reported_mode_for_block() {
        let report = sample_report();
        let anharmonic = report.anharmonic.as_ref().unwrap();

        // 阴离子日志第 3 块 (C) 无法读取，报告中是模式 1
        let diag = &anharmonic.anion.diagnostics[0];
        assert_eq!(diag.block, 3);
        assert_eq!(anharmonic.reported_mode(diag.block), Some(1));
        assert_eq!(anharmonic.reported_mode(1), Some(3));
        assert_eq!(anharmonic.reported_mode(4), None);
        assert_eq!(anharmonic.reported_mode(0), None);
    }

    #[test]
    fn test_anharmonic_mode_numbers_reversed() {
        let report = sample_report();
        let anharmonic = report.anharmonic.as_ref().unwrap();

        // 日志顺序 A, B, C -> 模式 3, 2, 1
        assert_eq!(anharmonic.mode_number(0), 3);
        assert_eq!(anharmonic.mode_number(1), 2);
        assert_eq!(anharmonic.mode_number(2), 1);
    }

    #[test]
    fn test_empty_report() {
        let report = VibronicReport::new(ElectronicEnergies::new(-1.0, -1.0), None, None);
        assert!(!report.has_analysis());
    }
}
