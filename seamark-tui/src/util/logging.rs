//! 日志初始化
//!
//! TUI 会占用终端屏幕，日志不能打印到 stderr，
//! 这里把 `env_logger` 的输出重定向到本地日志文件。
//! 过滤级别通过 `RUST_LOG` 环境变量控制，默认为 `info`；
//! 日志文件路径可用 `SEAMARK_LOG` 覆盖。

use std::fs::OpenOptions;
use std::path::PathBuf;

use env_logger::{Builder, Env, Target};

/// 默认日志路径：本地数据目录下的 seamark/seamark-tui.log
fn default_log_path() -> Option<PathBuf> {
    let dir = dirs::data_local_dir()?.join("seamark");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir.join("seamark-tui.log"))
}

/// 初始化文件日志，失败时静默跳过（不影响界面运行）
pub fn init_logging() {
    let Some(path) = std::env::var_os("SEAMARK_LOG")
        .map(PathBuf::from)
        .or_else(default_log_path)
    else {
        return;
    };
    if let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) {
        Builder::from_env(Env::default().default_filter_or("info"))
            .target(Target::Pipe(Box::new(file)))
            .init();
        log::debug!("logging to {}", path.display());
    }
}
