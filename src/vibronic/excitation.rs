//! # 振动电子激发能表
//!
//! 对每个简正模式计算从中性分子零点能到阴离子第 n 个振动能级
//! (n = 0..=10) 的激发能 (meV)，并叠加垂直电子能。
//!
//! ## 依赖关系
//! - 被 `vibronic/mod.rs` 使用
//! - 使用 `vibronic/energy.rs`

use super::energy::{
    anharmonic_level_energy, harmonic_level_energy, CM_TO_MEV, LEVEL_COUNT,
};

/// 单个模式的激发能 (meV)，下标为阴离子振动量子数
pub type ExcitationRow = [f64; LEVEL_COUNT];

/// 激发能表，`None` 表示该模式被跳过
pub type ExcitationTable = Vec<Option<ExcitationRow>>;

/// 简谐近似下的激发能表
///
/// `vee` 为垂直电子能 (eV)。
pub fn harmonic_excitation_table(
    neutral_freqs: &[Option<f64>],
    anion_freqs: &[Option<f64>],
    vee: f64,
) -> ExcitationTable {
    if neutral_freqs.len() != anion_freqs.len() {
        log::debug!(
            "neutral/anion mode count mismatch ({} vs {}), extra modes ignored",
            neutral_freqs.len(),
            anion_freqs.len()
        );
    }

    neutral_freqs
        .iter()
        .zip(anion_freqs)
        .map(|(neutral, anion)| {
            let (neutral, anion) = ((*neutral)?, (*anion)?);
            let zpe_neutral = harmonic_level_energy(neutral, 0, 0.0);
            Some(build_row(vee, |n| {
                harmonic_level_energy(anion, n, 0.0) - zpe_neutral
            }))
        })
        .collect()
}

/// 非谐近似下的激发能表
///
/// 四个量中任一缺失时该模式为 `None`。
pub fn anharmonic_excitation_table(
    neutral_freqs: &[Option<f64>],
    anion_freqs: &[Option<f64>],
    neutral_xe: &[Option<f64>],
    anion_xe: &[Option<f64>],
    vee: f64,
) -> ExcitationTable {
    if neutral_freqs.len() != anion_freqs.len() {
        log::debug!(
            "neutral/anion anharmonic block count mismatch ({} vs {}), extra blocks ignored",
            neutral_freqs.len(),
            anion_freqs.len()
        );
    }

    neutral_freqs
        .iter()
        .zip(anion_freqs)
        .zip(neutral_xe.iter().zip(anion_xe))
        .map(|((nf, af), (nx, ax))| {
            let (nf, af, nx, ax) = ((*nf)?, (*af)?, (*nx)?, (*ax)?);
            let zpe_neutral = anharmonic_level_energy(nf, nx, 0, 0.0);
            Some(build_row(vee, |n| {
                anharmonic_level_energy(af, ax, n, 0.0) - zpe_neutral
            }))
        })
        .collect()
}

/// `gap(n)` 为 cm^-1 单位的振动能差
fn build_row(vee: f64, gap: impl Fn(u32) -> f64) -> ExcitationRow {
    let mut row = [0.0; LEVEL_COUNT];
    for (n, value) in row.iter_mut().enumerate() {
        *value = gap(n as u32) * CM_TO_MEV + vee * 1000.0;
    }
    row
}
