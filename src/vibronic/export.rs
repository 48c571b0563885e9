//! # 激发能数据导出
//!
//! 以长表格式导出 CSV，每行一个 (模型, 模式, 能级)，保留完整精度。
//!
//! ## 依赖关系
//! - 被 `commands/excite.rs` 调用
//! - 使用 `csv` + `serde` 写入

use super::{AnharmonicAnalysis, HarmonicAnalysis, VibronicReport};
use crate::error::{Result, VibroError};

use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// CSV 行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExcitationRecord {
    pub model: &'static str,
    pub mode: usize,
    pub neutral_freq_cm: f64,
    pub anion_freq_cm: f64,
    pub neutral_xe: Option<f64>,
    pub anion_xe: Option<f64>,
    pub level: usize,
    pub energy_mev: f64,
}

/// 收集所有可用模式的激发能
pub fn collect_records(report: &VibronicReport) -> Vec<ExcitationRecord> {
    let mut records = Vec::new();
    if let Some(ref harmonic) = report.harmonic {
        records.extend(harmonic_records(harmonic));
    }
    if let Some(ref anharmonic) = report.anharmonic {
        records.extend(anharmonic_records(anharmonic));
    }
    records
}

fn harmonic_records(harmonic: &HarmonicAnalysis) -> Vec<ExcitationRecord> {
    let mut records = Vec::new();
    for (i, (freqs, row)) in harmonic
        .record
        .modes
        .iter()
        .zip(harmonic.table.iter())
        .enumerate()
    {
        if let (Some(f), Some(row)) = (freqs, row) {
            records.extend(row.iter().enumerate().map(|(level, &energy)| ExcitationRecord {
                model: "harmonic",
                mode: i + 1,
                neutral_freq_cm: f.neutral,
                anion_freq_cm: f.anion,
                neutral_xe: None,
                anion_xe: None,
                level,
                energy_mev: energy,
            }));
        }
    }
    records
}

fn anharmonic_records(anharmonic: &AnharmonicAnalysis) -> Vec<ExcitationRecord> {
    let mut records = Vec::new();
    for (i, row) in anharmonic.table.iter().enumerate() {
        let (n, a, row) = match (anharmonic.neutral.modes[i], anharmonic.anion.modes[i], row) {
            (Some(n), Some(a), Some(row)) => (n, a, row),
            _ => continue,
        };
        let mode = anharmonic.mode_number(i);
        records.extend(row.iter().enumerate().map(|(level, &energy)| ExcitationRecord {
            model: "anharmonic",
            mode,
            neutral_freq_cm: n.frequency,
            anion_freq_cm: a.frequency,
            neutral_xe: Some(n.anharmonicity),
            anion_xe: Some(a.anharmonicity),
            level,
            energy_mev: energy,
        }));
    }
    records
}

/// 写入任意 writer，`path` 用于错误信息
pub fn write_csv<W: Write>(records: &[ExcitationRecord], writer: W, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush().map_err(|e| VibroError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(())
}

/// 导出为 CSV 文件
pub fn to_csv(report: &VibronicReport, output_path: &Path) -> Result<usize> {
    let records = collect_records(report);
    let file = std::fs::File::create(output_path).map_err(|e| VibroError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;
    write_csv(&records, file, output_path)?;
    Ok(records.len())
}
