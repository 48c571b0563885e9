//! # pes 子命令 CLI 定义
//!
//! 绘制 PES 切面并叠加简谐振动能级。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/pes.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 图像输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PlotFormat {
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
}

/// pes 子命令参数
#[derive(Args, Debug)]
pub struct PesArgs {
    /// Scan data: header line, then 'step E_neutral E_anion [E_other...]' in eV
    pub data: PathBuf,

    /// Neutral harmonic frequency (cm^-1)
    pub freq_neutral: f64,

    /// Anion harmonic frequency (cm^-1)
    pub freq_anion: f64,

    /// Output image path
    #[arg(short, long, default_value = "pes.png")]
    pub output: PathBuf,

    /// Image format (auto-detected from extension if not specified)
    #[arg(long, value_enum)]
    pub format: Option<PlotFormat>,

    /// Number of vibrational levels drawn and reported per state
    #[arg(long, default_value_t = 10)]
    pub levels: u32,

    /// Plot title (default: data file stem)
    #[arg(long)]
    pub title: Option<String>,

    /// Figure width in pixels (PNG) or points (SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (PNG) or points (SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Skip the plot, only print level gaps
    #[arg(long, default_value_t = false)]
    pub no_plot: bool,
}

impl PesArgs {
    /// 输出格式：显式指定优先，否则按扩展名判断
    pub fn plot_format(&self) -> PlotFormat {
        self.format.unwrap_or_else(|| {
            let is_svg = self
                .output
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.eq_ignore_ascii_case("svg"))
                .unwrap_or(false);
            if is_svg {
                PlotFormat::Svg
            } else {
                PlotFormat::Png
            }
        })
    }
}
