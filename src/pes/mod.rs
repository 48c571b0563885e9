//! # PES 切面模块
//!
//! 在 PES 扫描曲线上叠加简谐振动能级，并计算中性分子零点能到
//! 阴离子各能级的能差。
//!
//! ## 子模块
//! - `plot`: 图表生成
//!
//! ## 依赖关系
//! - 被 `commands/pes.rs` 使用
//! - 使用 `vibronic/energy.rs`, `models/scan.rs`

pub mod plot;

use crate::vibronic::energy::{harmonic_level_energy, wavenumber_to_ev};

/// 以 `minimum` (eV) 为参考的简谐能级 (eV)
pub fn level_ladder(freq_cm: f64, minimum: f64, count: u32) -> Vec<f64> {
    let quantum = wavenumber_to_ev(freq_cm);
    (0..count)
        .map(|n| harmonic_level_energy(quantum, n, minimum))
        .collect()
}

/// 中性分子 n=0 能级到阴离子第 n 个能级的能差 (meV)
pub fn level_gaps(
    neutral_freq: f64,
    anion_freq: f64,
    neutral_min: f64,
    anion_min: f64,
    count: u32,
) -> Vec<f64> {
    let zpe_neutral = harmonic_level_energy(wavenumber_to_ev(neutral_freq), 0, neutral_min);
    level_ladder(anion_freq, anion_min, count)
        .into_iter()
        .map(|e| (e - zpe_neutral) * 1000.0)
        .collect()
}
