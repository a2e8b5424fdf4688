//! 工具模块
//!
//! 提供终端初始化、日志初始化等工具函数

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
