//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `models/`, `vibronic/`, `pes/`, `utils/`
//! - 子模块: excite, displace, pes

pub mod displace;
pub mod excite;
pub mod pes;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Excite(args) => excite::execute(args),
        Commands::Displace(args) => displace::execute(args),
        Commands::Pes(args) => pes::execute(args),
    }
}
