//! # PES 切面图表生成
//!
//! 使用 `plotters` 绘制各电子态沿简正模式的能量曲线，并以虚线标出
//! 中性分子和阴离子的简谐振动能级。支持 PNG 和 SVG 输出。
//!
//! ## 依赖关系
//! - 被 `commands/pes.rs` 调用
//! - 使用 `models/scan.rs`

use crate::error::{Result, VibroError};
use crate::models::PesScan;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::path::Path;

/// 曲线颜色：中性分子蓝色，阴离子红色，其余依次取色
const STATE_COLORS: [RGBColor; 6] = [
    RGBColor(31, 119, 180),
    RGBColor(214, 39, 40),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
];

/// 绘图参数
pub struct PesPlot<'a> {
    pub scan: &'a PesScan,
    pub neutral_levels: &'a [f64],
    pub anion_levels: &'a [f64],
    pub title: &'a str,
    pub width: u32,
    pub height: u32,
}

/// 生成 PES 图表
pub fn generate_pes_plot(plot: &PesPlot, output_path: &Path, use_svg: bool) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (plot.width, plot.height)).into_drawing_area();
        draw_pes_chart(&root, plot)?;
        root.present()
            .map_err(|e| VibroError::Other(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (plot.width, plot.height)).into_drawing_area();
        draw_pes_chart(&root, plot)?;
        root.present()
            .map_err(|e| VibroError::Other(e.to_string()))?;
    }
    Ok(())
}

/// 绘制 PES 图表的核心逻辑
fn draw_pes_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    plot: &PesPlot,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| VibroError::Other(format!("{:?}", e)))?;

    let scan = plot.scan;
    let (x_min, x_max) = scan.step_range();
    let (mut y_min, mut y_max) = scan.energy_range();
    for &e in plot.neutral_levels.iter().chain(plot.anion_levels) {
        y_min = y_min.min(e);
        y_max = y_max.max(e);
    }
    let x_margin = ((x_max - x_min).abs() * 0.05).max(0.5);
    let y_margin = ((y_max - y_min).abs() * 0.05).max(1e-3);

    let mut chart = ChartBuilder::on(root)
        .caption(plot.title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(
            (x_min - x_margin)..(x_max + x_margin),
            (y_min - y_margin)..(y_max + y_margin),
        )
        .map_err(|e| VibroError::Other(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("Step")
        .y_desc("Energy (eV)")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| VibroError::Other(format!("{:?}", e)))?;

    // 振动能级虚线
    let x_range = (x_min - x_margin, x_max + x_margin);
    for (levels, color) in [
        (plot.neutral_levels, STATE_COLORS[0]),
        (plot.anion_levels, STATE_COLORS[1]),
    ] {
        for &level in levels {
            chart
                .draw_series(DashedLineSeries::new(
                    vec![(x_range.0, level), (x_range.1, level)],
                    6,
                    4,
                    color.mix(0.6).stroke_width(1),
                ))
                .map_err(|e| VibroError::Other(format!("{:?}", e)))?;
        }
    }

    // 各电子态曲线
    for state in 0..scan.num_states() {
        let color = STATE_COLORS[state % STATE_COLORS.len()];
        let series = scan.series(state);

        chart
            .draw_series(LineSeries::new(series.clone(), color.stroke_width(2)))
            .map_err(|e| VibroError::Other(format!("{:?}", e)))?
            .label(scan.labels[state].as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

        chart
            .draw_series(
                series
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 4, color.filled())),
            )
            .map_err(|e| VibroError::Other(format!("{:?}", e)))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| VibroError::Other(format!("{:?}", e)))?;

    Ok(())
}
