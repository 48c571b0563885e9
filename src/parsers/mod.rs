//! # 解析器模块
//!
//! 提供量子化学日志、XYZ 几何和 PES 扫描数据的解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: frequencies, scf, anharmonic, xyz, scan

pub mod anharmonic;
pub mod frequencies;
pub mod scan;
pub mod scf;
pub mod xyz;

use crate::error::{Result, VibroError};
use std::fs;
use std::path::Path;

/// 读取整个文本文件
pub fn read_log(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(VibroError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    fs::read_to_string(path).map_err(|e| VibroError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 用给定正则的第一个捕获组提取浮点数
pub(crate) fn capture_f64(re: &regex::Regex, line: &str) -> Option<f64> {
    re.captures(line)?.get(1)?.as_str().parse().ok()
}
