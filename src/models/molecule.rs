//! # 分子几何数据模型
//!
//! 笛卡尔坐标下的分子结构与简正模式位移向量。
//!
//! ## 依赖关系
//! - 被 `parsers/xyz.rs` 使用
//! - 被 `commands/displace.rs` 使用

/// 原子（元素符号 + 笛卡尔坐标，Å）
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub symbol: String,
    pub position: [f64; 3],
}

impl Atom {
    pub fn new(symbol: impl Into<String>, position: [f64; 3]) -> Self {
        Atom {
            symbol: symbol.into(),
            position,
        }
    }
}

/// 分子结构
#[derive(Debug, Clone, PartialEq)]
pub struct Molecule {
    pub atoms: Vec<Atom>,
}

impl Molecule {
    pub fn new(atoms: Vec<Atom>) -> Self {
        Molecule { atoms }
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// 沿位移向量平移：`position + scale * displacement`
    ///
    /// 调用方保证 `displacement.len() == self.len()`。
    pub fn displaced(&self, displacement: &[[f64; 3]], scale: f64) -> Molecule {
        let atoms = self
            .atoms
            .iter()
            .zip(displacement.iter())
            .map(|(atom, d)| {
                Atom::new(
                    atom.symbol.clone(),
                    [
                        atom.position[0] + scale * d[0],
                        atom.position[1] + scale * d[1],
                        atom.position[2] + scale * d[2],
                    ],
                )
            })
            .collect();
        Molecule { atoms }
    }
}
