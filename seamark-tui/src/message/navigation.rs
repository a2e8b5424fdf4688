//! 侧边栏消息

use seamark_core::MenuId;

/// 侧边栏菜单操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMessage {
    /// 光标上移
    SelectPrevious,
    /// 光标下移
    SelectNext,
    /// 光标移到第一行
    SelectFirst,
    /// 光标移到最后一行
    SelectLast,
    /// 激活光标所在行
    Confirm,
    /// 点击指定行（鼠标）
    ClickRow(usize),
    /// 点击指定一级菜单（快捷键直达）
    ClickEntry(MenuId),
}
