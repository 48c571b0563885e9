//! # 数据模型模块
//!
//! 定义频率、单点能、分子几何和 PES 扫描的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`、`vibronic/`、`pes/` 和 `commands/` 使用
//! - 子模块: frequency, calculation, molecule, scan

pub mod calculation;
pub mod frequency;
pub mod molecule;
pub mod scan;

pub use calculation::ElectronicEnergies;
pub use frequency::{
    AnharmonicMode, AnharmonicRecord, FrequencyRecord, ModeFrequencies, ModeRejection,
    NegativeMode, ParseDiagnostic,
};
pub use molecule::{Atom, Molecule};
pub use scan::PesScan;
