//! # PES 扫描数据模型
//!
//! 沿单一简正模式位移的各电子态能量。
//!
//! ## 依赖关系
//! - 被 `parsers/scan.rs` 构造
//! - 被 `pes/` 使用

/// PES 切面扫描：每个步长对应若干电子态的能量
///
/// 第一个态为中性分子，第二个态为阴离子，之后为其他态。
#[derive(Debug, Clone, PartialEq)]
pub struct PesScan {
    /// 各电子态名称
    pub labels: Vec<String>,
    /// 步长
    pub steps: Vec<f64>,
    /// `energies[state][point]`
    pub energies: Vec<Vec<f64>>,
}

impl PesScan {
    pub fn num_points(&self) -> usize {
        self.steps.len()
    }

    pub fn num_states(&self) -> usize {
        self.energies.len()
    }

    /// 第 `state` 个态的 (step, energy) 序列
    pub fn series(&self, state: usize) -> Vec<(f64, f64)> {
        self.steps
            .iter()
            .copied()
            .zip(self.energies[state].iter().copied())
            .collect()
    }

    /// 中性分子与阴离子的最低能量
    pub fn minima(&self) -> (f64, f64) {
        let min_of = |values: &[f64]| values.iter().copied().fold(f64::INFINITY, f64::min);
        (min_of(&self.energies[0]), min_of(&self.energies[1]))
    }

    /// 所有态能量的范围
    pub fn energy_range(&self) -> (f64, f64) {
        self.energies
            .iter()
            .flatten()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &e| {
                (lo.min(e), hi.max(e))
            })
    }

    pub fn step_range(&self) -> (f64, f64) {
        self.steps
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &s| {
                (lo.min(s), hi.max(s))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PesScan {
        PesScan {
            labels: vec!["S0".into(), "pi*".into()],
            steps: vec![-1.0, 0.0, 1.0],
            energies: vec![vec![0.3, 0.0, 0.25], vec![1.2, 0.9, 0.8]],
        }
    }

    #[test]
    fn test_minima() {
        let (n, a) = sample().minima();
        assert!((n - 0.0).abs() < 1e-12);
        assert!((a - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_ranges() {
        let scan = sample();
        assert_eq!(scan.energy_range(), (0.0, 1.2));
        assert_eq!(scan.step_range(), (-1.0, 1.0));
        assert_eq!(scan.series(1)[2], (1.0, 0.8));
    }
}
