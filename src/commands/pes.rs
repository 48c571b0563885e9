//! # pes 命令实现
//!
//! 读取 PES 扫描数据，输出中性分子零点能到阴离子各能级的能差，
//! 并绘制带振动能级的 PES 切面图。
//!
//! ## 依赖关系
//! - 使用 `cli/pes.rs` 定义的参数
//! - 使用 `parsers/scan.rs`, `pes/`
//! - 使用 `utils/output.rs`

use crate::cli::pes::{PesArgs, PlotFormat};
use crate::error::{Result, VibroError};
use crate::parsers::{self, scan};
use crate::pes::{self, plot};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 能差表行
#[derive(Debug, Clone, Tabled)]
struct GapRow {
    #[tabled(rename = "Anion level n")]
    level: u32,
    #[tabled(rename = "Level energy (eV)")]
    energy: String,
    #[tabled(rename = "Gap from neutral n=0 (meV)")]
    gap: String,
}

/// 执行 pes 命令
pub fn execute(args: PesArgs) -> Result<()> {
    if args.freq_neutral < 0.0 || args.freq_anion < 0.0 {
        return Err(VibroError::InvalidArgument(
            "frequencies must be non-negative".to_string(),
        ));
    }

    output::print_header("PES Cut");

    let data = scan::parse_scan_content(
        &parsers::read_log(&args.data)?,
        &args.data.display().to_string(),
    )?;
    let (neutral_min, anion_min) = data.minima();

    output::print_info(&format!(
        "{} points, {} states; minima: neutral {:.6} eV, anion {:.6} eV",
        data.num_points(),
        data.num_states(),
        neutral_min,
        anion_min
    ));

    let neutral_levels = pes::level_ladder(args.freq_neutral, neutral_min, args.levels);
    let anion_levels = pes::level_ladder(args.freq_anion, anion_min, args.levels);
    let gaps = pes::level_gaps(
        args.freq_neutral,
        args.freq_anion,
        neutral_min,
        anion_min,
        args.levels,
    );

    let rows: Vec<GapRow> = anion_levels
        .iter()
        .zip(gaps.iter())
        .enumerate()
        .map(|(n, (e, gap))| GapRow {
            level: n as u32,
            energy: format!("{:.6}", e),
            gap: format!("{:.2}", gap),
        })
        .collect();
    println!("{}", Table::new(&rows));

    if args.no_plot {
        return Ok(());
    }

    let title = args.title.clone().unwrap_or_else(|| {
        args.data
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("PES")
            .to_string()
    });

    let pes_plot = plot::PesPlot {
        scan: &data,
        neutral_levels: &neutral_levels,
        anion_levels: &anion_levels,
        title: &title,
        width: args.width,
        height: args.height,
    };
    plot::generate_pes_plot(
        &pes_plot,
        &args.output,
        args.plot_format() == PlotFormat::Svg,
    )?;

    output::print_success(&format!("PES plot saved to '{}'", args.output.display()));

    Ok(())
}
