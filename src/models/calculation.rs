//! # 单点计算结果数据模型
//!
//! 存储中性分子与阴离子单点计算的 SCF 能量。
//!
//! ## 依赖关系
//! - 被 `parsers/scf.rs` 的调用方构造
//! - 被 `vibronic/` 使用

use crate::vibronic::energy;

/// 中性分子 / 阴离子的 SCF 单点能 (Hartree)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectronicEnergies {
    pub neutral: f64,
    pub anion: f64,
}

impl ElectronicEnergies {
    pub fn new(neutral: f64, anion: f64) -> Self {
        ElectronicEnergies { neutral, anion }
    }

    /// 垂直电子能 (eV)
    pub fn vertical_electron_energy(&self) -> f64 {
        energy::vertical_electron_energy(self.neutral, self.anion)
    }

    /// 垂直电子能 (meV)
    pub fn vertical_electron_energy_mev(&self) -> f64 {
        self.vertical_electron_energy() * 1000.0
    }
}
