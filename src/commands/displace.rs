//! # displace 命令实现
//!
//! 沿简正模式位移向量生成一系列几何结构，用于单点能扫描。
//!
//! ## 功能
//! - 读取平衡几何 (.xyz) 和位移向量
//! - 生成 step_0, step_±1 .. step_±N 几何
//! - 写入输出目录（不存在时创建）
//!
//! ## 依赖关系
//! - 使用 `cli/displace.rs` 定义的参数
//! - 使用 `parsers/xyz.rs`, `models/molecule.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::cli::displace::DisplaceArgs;
use crate::error::{Result, VibroError};
use crate::models::Molecule;
use crate::parsers::{self, xyz};
use crate::utils::{output, progress};

use std::fs;
use std::path::Path;

const STEP_COMMENT: &str = "Updated Geometry";

/// 执行 displace 命令
pub fn execute(args: DisplaceArgs) -> Result<()> {
    output::print_header("Generating Displaced Geometries");

    let molecule = xyz::parse_xyz_content(
        &parsers::read_log(&args.geometry)?,
        &args.geometry.display().to_string(),
    )?;
    let displacement = xyz::parse_displacement_content(
        &parsers::read_log(&args.displacement)?,
        &args.displacement.display().to_string(),
    )?;

    let geometries =
        displaced_geometries(&molecule, &displacement, args.factor, args.steps).map_err(
            |reason| VibroError::ParseError {
                format: "displacement".to_string(),
                path: args.displacement.display().to_string(),
                reason,
            },
        )?;

    output::print_info(&format!(
        "{} atoms, factor {}, {} steps per direction",
        molecule.len(),
        args.factor,
        args.steps
    ));

    fs::create_dir_all(&args.output).map_err(|e| VibroError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    let pb = progress::create_progress_bar(geometries.len() as u64, "Writing");
    for (step, geometry) in &geometries {
        let path = args.output.join(step_file_name(*step));
        write_geometry(&path, geometry)?;
        log::debug!("wrote {}", path.display());
        pb.inc(1);
    }
    pb.finish_and_clear();

    output::print_done(&format!(
        "Wrote {} geometries to '{}'",
        geometries.len(),
        args.output.display()
    ));

    Ok(())
}

/// 生成 (step, 几何) 列表：0, 1, -1, 2, -2, ...
///
/// 原子数与位移向量行数不一致时返回错误原因。
pub fn displaced_geometries(
    molecule: &Molecule,
    displacement: &[[f64; 3]],
    factor: f64,
    steps: u32,
) -> std::result::Result<Vec<(i64, Molecule)>, String> {
    if displacement.len() != molecule.len() {
        return Err(format!(
            "Displacement has {} rows but geometry has {} atoms",
            displacement.len(),
            molecule.len()
        ));
    }

    let mut geometries = vec![(0, molecule.clone())];
    for i in 1..=steps as i64 {
        let scale = factor * i as f64;
        geometries.push((i, molecule.displaced(displacement, scale)));
        geometries.push((-i, molecule.displaced(displacement, -scale)));
    }
    Ok(geometries)
}

/// step_{k}.xyz
pub fn step_file_name(step: i64) -> String {
    format!("step_{}.xyz", step)
}

fn write_geometry(path: &Path, molecule: &Molecule) -> Result<()> {
    fs::write(path, xyz::to_xyz_string(molecule, STEP_COMMENT)).map_err(|e| {
        VibroError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        }
    })
}
