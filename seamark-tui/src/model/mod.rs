//! 数据模型模块（Model）
//!
//! Elm 架构中的 Model 层，集中保存应用的全部状态：
//!
//! ```text
//! App（根模型）
//! ├─ nav:    NavigationState   菜单激活/展开与当前视图（seamark-core）
//! ├─ layout: LayoutSync        头部与吸顶高度的同步值（seamark-core）
//! ├─ focus / sidebar           面板焦点与侧边栏光标
//! ├─ content_scroll            逐行滚动页面共用的滚动位置
//! └─ state::*                  各交互页面的局部状态
//! ```
//!
//! Model 只描述状态，不做状态变更；变更统一发生在 `update` 层。

mod app;
mod focus;
mod sidebar;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use sidebar::{sidebar_rows, SidebarRow, SidebarState};
