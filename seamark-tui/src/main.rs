//! Seamark 出海营销控制台 TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置服务 (`backend/`)
//!
//! 菜单与视图的切换状态机、吸顶高度的同步值在 seamark-core 中，
//! 本 crate 只做输入翻译与渲染。
//!
//! 启动顺序：
//!     init_logging()          // 日志进文件，终端留给界面
//!     ConfigService::load()   // 读取主题与语言
//!     init_terminal()         // raw mode + 备用屏幕 + 鼠标捕获
//!     App::new()              // 创建应用状态
//!     update::bootstrap()     // 初始导航：进入默认视图并量一次高度
//!     app::run()              // 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use backend::{AppConfig, ConfigService, LocalConfigService};
use model::App;
use util::{init_logging, init_terminal, restore_terminal, Term};

fn main() -> Result<()> {
    // 1. 初始化日志（TUI 占用终端，日志写入文件）
    init_logging();

    // 2. 读取配置，读不到就用默认值继续启动
    let config = match LocalConfigService::new().load() {
        Ok(config) => config,
        Err(err) => {
            log::warn!("config load failed: {err:#}");
            AppConfig::default()
        }
    };

    // 3. 初始化终端
    let mut terminal = init_terminal()?;

    // 4. 创建应用并运行主循环，失败也要先恢复终端
    let result = setup_and_run(&mut terminal, &config);

    restore_terminal(&mut terminal)?;
    result
}

/// 创建应用实例、完成初始导航并进入主循环
fn setup_and_run(terminal: &mut Term, config: &AppConfig) -> Result<()> {
    let size = terminal.size()?;
    let mut app = App::new(config, (size.width, size.height))?;
    update::bootstrap(&mut app);
    app::run(terminal, &mut app)
}
