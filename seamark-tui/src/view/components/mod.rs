//! 界面组件
//!
//! 头部、侧边栏、状态栏等跨页面复用的部件。

pub mod header;
pub mod navigation;
pub mod statusbar;
