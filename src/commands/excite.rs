//! # excite 命令实现
//!
//! 计算中性分子 -> 阴离子的振动电子激发能。
//!
//! ## 功能
//! - 读取两个单点日志的 SCF 能量，得到垂直电子能
//! - 可选简谐分析（频率比较日志）
//! - 可选非谐分析（两个基频/倍频日志）
//! - 文本报告或汇总表，可选 CSV 导出
//!
//! 所有日志读取和能量提取完成后才输出报告，缺少 SCF 能量时不输出任何结果。
//!
//! ## 依赖关系
//! - 使用 `cli/excite.rs` 定义的参数
//! - 使用 `parsers/`, `vibronic/`
//! - 使用 `utils/output.rs`

use crate::cli::excite::{ExciteArgs, ReportFormat};
use crate::error::Result;
use crate::models::ElectronicEnergies;
use crate::parsers::{self, anharmonic, frequencies, scf};
use crate::utils::output;
use crate::vibronic::{export, report, VibronicReport};

use std::path::Path;

/// 执行 excite 命令
pub fn execute(args: ExciteArgs) -> Result<()> {
    let report = build_report(&args)?;

    print_diagnostics(&report, &args);

    output::print_header("Vibronic Excitation Energies");

    match args.format {
        ReportFormat::Text => print!("{}", report::render_report(&report)),
        ReportFormat::Table => print_tables(&report),
    }

    if !report.has_analysis() {
        output::print_warning("No frequency logs given, nothing beyond the electronic gap to report.");
    }

    if let Some(ref csv_path) = args.output_csv {
        let count = export::to_csv(&report, csv_path)?;
        output::print_success(&format!(
            "{} excitation energies saved to '{}'",
            count,
            csv_path.display()
        ));
    }

    Ok(())
}

/// 读取全部日志并完成计算
///
/// 任一 SCF 能量缺失时返回错误，此时不产生任何报告。
pub fn build_report(args: &ExciteArgs) -> Result<VibronicReport> {
    let energies = ElectronicEnergies::new(
        read_scf_energy(&args.neutral_log)?,
        read_scf_energy(&args.anion_log)?,
    );

    let harmonic = match args.harmonic_log() {
        Some(path) => {
            let record = frequencies::extract_harmonic_frequencies(&parsers::read_log(path)?);
            if record.is_empty() {
                output::print_warning(&format!(
                    "{}: no \"Neutral's ... normal mode\" blocks found",
                    path.display()
                ));
            }
            Some(record)
        }
        None => None,
    };

    let anharmonic = match args.anharmonic_logs() {
        Some((neutral_path, anion_path)) => {
            let neutral = anharmonic::extract_anharmonic_blocks(&parsers::read_log(neutral_path)?);
            let anion = anharmonic::extract_anharmonic_blocks(&parsers::read_log(anion_path)?);
            if neutral.len() != anion.len() {
                output::print_warning(&format!(
                    "Anharmonic logs differ in mode count ({} vs {}), extra modes ignored",
                    neutral.len(),
                    anion.len()
                ));
            }
            if neutral.is_empty() || anion.is_empty() {
                output::print_warning("An anharmonic log contains no complete block");
            }
            Some((neutral, anion))
        }
        None => None,
    };

    Ok(VibronicReport::new(energies, harmonic, anharmonic))
}

fn read_scf_energy(path: &Path) -> Result<f64> {
    let text = parsers::read_log(path)?;
    let energy = scf::extract_scf_energy(&text, &path.display().to_string())?;
    log::info!("{}: SCF energy {:.8} a.u.", path.display(), energy);
    Ok(energy)
}

/// 打印无法读取的块，附带报告中的模式编号
fn print_diagnostics(report: &VibronicReport, args: &ExciteArgs) {
    if let (Some(h), Some(path)) = (&report.harmonic, args.harmonic_log()) {
        for diag in &h.record.diagnostics {
            output::print_warning(&format!(
                "{}: {}",
                path.display(),
                diag.describe(Some(diag.block))
            ));
        }
    }

    if let (Some(a), Some((n_path, a_path))) = (&report.anharmonic, args.anharmonic_logs()) {
        let logs = [(n_path, &a.neutral.diagnostics), (a_path, &a.anion.diagnostics)];
        for (path, diagnostics) in logs {
            for diag in diagnostics {
                output::print_warning(&format!(
                    "{}: {}",
                    path.display(),
                    diag.describe(a.reported_mode(diag.block))
                ));
            }
        }
    }
}

fn print_tables(report: &VibronicReport) {
    print!("{}", report::render_energies(&report.energies));

    if let Some(ref harmonic) = report.harmonic {
        print!("{}", report::render_negative_modes(harmonic));
        output::print_header("Harmonic Analysis (cm^-1, meV)");
        println!("{}", report::harmonic_summary(harmonic));
    }

    if let Some(ref anharmonic) = report.anharmonic {
        output::print_header("Anharmonic Analysis (cm^-1, meV)");
        println!("{}", report::anharmonic_summary(anharmonic));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VibroError;
    use std::fs;
    use std::path::PathBuf;

    const FREQ_LOG: &str = " Neutral's normal mode 1\n --\n --\n Neutral:    1000.0\n Anion:      1200.0\n";
    const NEUTRAL_SP: &str = " SCF Done:  E(RB3LYP) =  -100.00000000     A.U. after   10 cycles\n";
    const ANION_SP: &str = " SCF Done:  E(UB3LYP) =  -100.02000000     A.U. after   12 cycles\n";

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("vibrokit_excite_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn args(freq_log: PathBuf, neutral_log: PathBuf, anion_log: PathBuf) -> ExciteArgs {
        ExciteArgs {
            freq_log,
            neutral_log,
            anion_log,
            neutral_anharm: None,
            anion_anharm: None,
            format: ReportFormat::Text,
            output_csv: None,
        }
    }

    #[test]
    fn test_build_report_missing_scf_energy() {
        let freq = write_temp("missing_freq.log", FREQ_LOG);
        let neutral = write_temp("missing_neutral.log", NEUTRAL_SP);
        let anion = write_temp("missing_anion.log", " Normal termination of Gaussian\n");

        let err = build_report(&args(freq, neutral, anion.clone())).unwrap_err();
        match err {
            VibroError::MissingData { what, path } => {
                assert_eq!(what, "SCF energy");
                assert_eq!(path, anion.display().to_string());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_build_report_harmonic() {
        let freq = write_temp("ok_freq.log", FREQ_LOG);
        let neutral = write_temp("ok_neutral.log", NEUTRAL_SP);
        let anion = write_temp("ok_anion.log", ANION_SP);

        let report = build_report(&args(freq, neutral, anion)).unwrap();
        assert!((report.energies.vertical_electron_energy_mev() - (-544.228)).abs() < 1e-6);

        let harmonic = report.harmonic.as_ref().unwrap();
        assert_eq!(harmonic.table.len(), 1);
        assert!(harmonic.table[0].is_some());
        assert!(report.anharmonic.is_none());
    }

    #[test]
    fn test_build_report_skip_sentinel() {
        let neutral = write_temp("skip_neutral.log", NEUTRAL_SP);
        let anion = write_temp("skip_anion.log", ANION_SP);

        let report = build_report(&args(PathBuf::from("none"), neutral, anion)).unwrap();
        assert!(!report.has_analysis());
    }
}
