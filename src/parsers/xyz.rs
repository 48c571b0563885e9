//! # XYZ 几何与位移向量解析器
//!
//! ## XYZ 格式说明
//! ```text
//! 3                      # 原子数
//! comment                # 注释行
//! O  0.000  0.000  0.117
//! H  0.000  0.757 -0.467
//! H  0.000 -0.757 -0.467
//! ```
//!
//! 位移向量文件前 4 行为表头，之后每行 `label dx dy dz`。
//!
//! ## 依赖关系
//! - 被 `commands/displace.rs` 使用
//! - 使用 `models/molecule.rs`

use crate::error::{Result, VibroError};
use crate::models::{Atom, Molecule};

const XYZ_HEADER_LINES: usize = 2;
const DISPLACEMENT_HEADER_LINES: usize = 4;

/// 从字符串内容解析 XYZ 格式
pub fn parse_xyz_content(content: &str, name: &str) -> Result<Molecule> {
    let mut atoms = Vec::new();

    for (i, line) in content.lines().enumerate().skip(XYZ_HEADER_LINES) {
        if line.trim().is_empty() {
            continue;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        let position = parse_vector(&parts).ok_or_else(|| VibroError::ParseError {
            format: "xyz".to_string(),
            path: name.to_string(),
            reason: format!("Invalid atom line {}: '{}'", i + 1, line.trim()),
        })?;
        atoms.push(Atom::new(parts[0], position));
    }

    let molecule = Molecule::new(atoms);
    if molecule.is_empty() {
        return Err(VibroError::ParseError {
            format: "xyz".to_string(),
            path: name.to_string(),
            reason: "No atoms found".to_string(),
        });
    }

    Ok(molecule)
}

/// 解析简正模式位移向量
pub fn parse_displacement_content(content: &str, name: &str) -> Result<Vec<[f64; 3]>> {
    let mut vectors = Vec::new();

    for (i, line) in content.lines().enumerate().skip(DISPLACEMENT_HEADER_LINES) {
        if line.trim().is_empty() {
            continue;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        let d = parse_vector(&parts).ok_or_else(|| VibroError::ParseError {
            format: "displacement".to_string(),
            path: name.to_string(),
            reason: format!("Invalid displacement line {}: '{}'", i + 1, line.trim()),
        })?;
        vectors.push(d);
    }

    Ok(vectors)
}

/// 将分子写成 XYZ 格式字符串
pub fn to_xyz_string(molecule: &Molecule, comment: &str) -> String {
    let mut result = String::new();

    result.push_str(&format!("{}\n", molecule.len()));
    result.push_str(&format!("{}\n", comment));

    for atom in &molecule.atoms {
        result.push_str(&format!(
            "{} {:.6} {:.6} {:.6}\n",
            atom.symbol, atom.position[0], atom.position[1], atom.position[2]
        ));
    }

    result
}

/// 读取第 2-4 列为坐标
fn parse_vector(parts: &[&str]) -> Option<[f64; 3]> {
    if parts.len() < 4 {
        return None;
    }
    Some([
        parts[1].parse().ok()?,
        parts[2].parse().ok()?,
        parts[3].parse().ok()?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    const WATER: &str = r#"3
water
O  0.000000  0.000000  0.117300
H  0.000000  0.757200 -0.469200
H  0.000000 -0.757200 -0.469200
"#;

    #[test]
    fn test_parse_xyz() {
        let mol = parse_xyz_content(WATER, "water").unwrap();
        assert_eq!(mol.len(), 3);
        assert_eq!(mol.atoms[0].symbol, "O");
        assert!((mol.atoms[1].position[1] - 0.7572).abs() < 1e-12);
    }

    #[test]
    fn test_parse_xyz_bad_line() {
        let content = "1\nbad\nC 0.0 zero 0.0\n";
        assert!(parse_xyz_content(content, "bad").is_err());
    }

    #[test]
    fn test_parse_displacement() {
        let content = r#"Normal mode 7
 Frequency 1650.2
 Reduced mass 1.08
 Atom  X  Y  Z
 8  0.00  0.00 -0.07
 1  0.00  0.43  0.56
 1  0.00 -0.43  0.56
"#;
        let d = parse_displacement_content(content, "mode7").unwrap();
        assert_eq!(d.len(), 3);
        assert_eq!(d[0], [0.0, 0.0, -0.07]);
        assert_eq!(d[2], [0.0, -0.43, 0.56]);
    }

    #[test]
    fn test_to_xyz_string() {
        let mol = parse_xyz_content(WATER, "water").unwrap();
        let text = to_xyz_string(&mol, "Updated Geometry");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "3");
        assert_eq!(lines[1], "Updated Geometry");
        assert_eq!(lines[2], "O 0.000000 0.000000 0.117300");

        let reparsed = parse_xyz_content(&text, "again").unwrap();
        assert_eq!(reparsed, mol);
    }
}
