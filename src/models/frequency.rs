//! # 振动频率数据模型
//!
//! 存储从频率日志中提取的简谐频率和非谐频率/非谐常数。
//!
//! ## 依赖关系
//! - 被 `parsers/frequencies.rs`, `parsers/anharmonic.rs` 使用
//! - 被 `vibronic/` 使用

/// 单个简正模式在中性分子与阴离子中的频率 (cm^-1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeFrequencies {
    pub neutral: f64,
    pub anion: f64,
}

/// 出现负频率的模式（物理上无效，但不是解析错误）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NegativeMode {
    /// 模式编号（从 1 开始）
    pub mode: usize,
    pub neutral: f64,
    pub anion: f64,
}

/// 日志中无法读取的块
#[derive(Debug, Clone, PartialEq)]
pub struct ParseDiagnostic {
    /// 块编号（从 1 开始，按日志顺序）
    pub block: usize,
    /// 块起始行号（从 0 开始）
    pub line: usize,
    /// 原始的出错行
    pub lines: Vec<String>,
    pub reason: String,
}

impl std::fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "block {} (line {}): {} | {}",
            self.block,
            self.line,
            self.reason,
            self.lines.join(" | ")
        )
    }
}

impl ParseDiagnostic {
    /// 带上报告中使用的模式编号，块顺序与模式编号不一致时使用
    pub fn describe(&self, reported_mode: Option<usize>) -> String {
        match reported_mode {
            Some(mode) => format!("normal mode {}, {}", mode, self),
            None => format!("not reported, {}", self),
        }
    }
}

/// 简谐频率记录，按日志中的模式顺序排列
#[derive(Debug, Clone, Default)]
pub struct FrequencyRecord {
    /// `None` 表示负频率或无法读取的模式
    pub modes: Vec<Option<ModeFrequencies>>,
    pub negative: Vec<NegativeMode>,
    pub diagnostics: Vec<ParseDiagnostic>,
}

impl FrequencyRecord {
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    /// 中性分子频率序列
    pub fn neutral(&self) -> Vec<Option<f64>> {
        self.modes.iter().map(|m| m.map(|m| m.neutral)).collect()
    }

    /// 阴离子频率序列
    pub fn anion(&self) -> Vec<Option<f64>> {
        self.modes.iter().map(|m| m.map(|m| m.anion)).collect()
    }

    /// 查找给定模式编号的负频率条目
    pub fn negative_mode(&self, mode: usize) -> Option<&NegativeMode> {
        self.negative.iter().find(|n| n.mode == mode)
    }
}

/// 由基频和倍频推出的非谐频率与非谐常数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnharmonicMode {
    /// 谐性频率 ω_e (cm^-1)
    pub frequency: f64,
    /// 非谐常数 x_e
    pub anharmonicity: f64,
}

/// 数值可读但物理上不可用的非谐模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeRejection {
    /// 基频或倍频为负
    NegativeFrequency,
    /// ω_e = 3ν₁ − ν₂ ≤ 0，x_e 无定义
    DegenerateFrequency,
}

impl ModeRejection {
    pub fn reason(&self) -> &'static str {
        match self {
            ModeRejection::NegativeFrequency => "negative frequency",
            ModeRejection::DegenerateFrequency => "degenerate anharmonic frequency",
        }
    }
}

/// 非谐频率记录，按日志中的块顺序排列
///
/// 报告时模式编号与块顺序相反：最后一个块是模式 1。
#[derive(Debug, Clone, Default)]
pub struct AnharmonicRecord {
    pub modes: Vec<Option<AnharmonicMode>>,
    /// (块下标, 原因)，块下标从 0 开始
    pub rejected: Vec<(usize, ModeRejection)>,
    pub diagnostics: Vec<ParseDiagnostic>,
}

impl AnharmonicRecord {
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    /// 第 `index` 个块（从 0 开始）对应的报告模式编号
    pub fn mode_number(&self, index: usize) -> usize {
        self.modes.len() - index
    }

    /// 第 `index` 个块被拒绝的原因
    pub fn rejection(&self, index: usize) -> Option<ModeRejection> {
        self.rejected
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, r)| *r)
    }

    pub fn frequencies(&self) -> Vec<Option<f64>> {
        self.modes.iter().map(|m| m.map(|m| m.frequency)).collect()
    }

    pub fn constants(&self) -> Vec<Option<f64>> {
        self.modes.iter().map(|m| m.map(|m| m.anharmonicity)).collect()
    }
}
