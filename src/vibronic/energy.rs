//! # 振动能级模型
//!
//! 简谐振子与一阶非谐（Morse 型）能级，以及垂直电子能。
//!
//! 能级函数内部不做单位换算：频率以 cm^-1 传入，结果以 cm^-1 返回。
//!
//! ## 依赖关系
//! - 被 `vibronic/excitation.rs`, `pes/` 和 `models/calculation.rs` 使用
//! - 无外部模块依赖

/// Hartree -> eV
pub const HARTREE_TO_EV: f64 = 27.2114;

/// cm^-1 -> meV
pub const CM_TO_MEV: f64 = 0.123981;

/// 光速 (cm/s)，cm^-1 -> Hz
pub const SPEED_OF_LIGHT_CM_S: f64 = 29979245800.0;

/// Planck 常数 (eV·s)
pub const PLANCK_EV_S: f64 = 4.1356692e-15;

/// 振动能级数 (n = 0..=10)
pub const LEVEL_COUNT: usize = 11;

/// 简谐振子能级：`reference + freq * (n + 1/2)`
pub fn harmonic_level_energy(freq: f64, n: u32, reference: f64) -> f64 {
    reference + freq * (n as f64 + 0.5)
}

/// 非谐能级：`reference + freq * (n + 1/2) - x_e * freq * (n + 1/2)^2`
pub fn anharmonic_level_energy(freq: f64, x_e: f64, n: u32, reference: f64) -> f64 {
    let v = n as f64 + 0.5;
    reference + freq * v - x_e * freq * v * v
}

/// 垂直电子能 (eV)：`-(E_neutral - E_anion) * 27.2114`
pub fn vertical_electron_energy(neutral_scf: f64, anion_scf: f64) -> f64 {
    -(neutral_scf - anion_scf) * HARTREE_TO_EV
}

/// 波数 (cm^-1) 转换为能量 (eV)
pub fn wavenumber_to_ev(freq: f64) -> f64 {
    freq * PLANCK_EV_S * SPEED_OF_LIGHT_CM_S
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harmonic_level_energy_exact() {
        for &(freq, n, reference) in &[(1000.0, 0, 0.0), (1234.5, 7, -3.25), (0.0, 10, 1.0)] {
            assert_eq!(
                harmonic_level_energy(freq, n, reference),
                reference + freq * (n as f64 + 0.5)
            );
        }
        assert_eq!(harmonic_level_energy(1000.0, 0, 0.0), 500.0);
        assert_eq!(harmonic_level_energy(1000.0, 2, 10.0), 2510.0);
    }

    #[test]
    fn test_anharmonic_reduces_to_harmonic() {
        assert_eq!(
            anharmonic_level_energy(1500.0, 0.0, 4, 2.0),
            harmonic_level_energy(1500.0, 4, 2.0)
        );
    }

    #[test]
    fn test_anharmonic_level_energy() {
        // 1000 * 1.5 - 0.01 * 1000 * 2.25
        let e = anharmonic_level_energy(1000.0, 0.01, 1, 0.0);
        assert!((e - 1477.5).abs() < 1e-9);
    }

    #[test]
    fn test_vertical_electron_energy_antisymmetric() {
        let pairs = [(-567.1234, -567.1567), (-76.01, -75.99), (0.0, 1.0)];
        for &(a, b) in &pairs {
            assert_eq!(
                vertical_electron_energy(a, b),
                -vertical_electron_energy(b, a)
            );
        }
        assert!((vertical_electron_energy(-1.0, -1.5) - (-13.6057)).abs() < 1e-9);
    }

    #[test]
    fn test_wavenumber_to_ev_matches_mev_factor() {
        // 1 cm^-1 ≈ 0.123981 meV
        assert!((wavenumber_to_ev(1.0) * 1000.0 - CM_TO_MEV).abs() < 1e-5);
    }
}
