//! 应用级消息

use super::{ContentMessage, NavigationMessage};

/// 顶层消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,
    /// 在侧边栏与内容区之间切换焦点
    ToggleFocus,
    /// 收起展开的子菜单（或取消直达项的激活），回到默认视图
    CollapseToDefault,
    /// 侧边栏消息
    Navigation(NavigationMessage),
    /// 内容区消息
    Content(ContentMessage),
    /// 终端尺寸变化（列，行）
    Resize(u16, u16),
    /// 定时消息（100ms 一次）
    Tick,
    /// 无操作
    Noop,
}
