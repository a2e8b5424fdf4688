//! 后端服务模块
//!
//! 界面之外的持久化能力。目前只有配置文件的读写，
//! 通过 trait 抽象，方便测试时替换为临时目录实现。

mod config_service;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
