//! 焦点管理

/// 当前聚焦的面板
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 侧边栏菜单
    #[default]
    Navigation,
    /// 内容区
    Content,
}

impl FocusPanel {
    /// 在两个面板之间切换
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Navigation => Self::Content,
            Self::Content => Self::Navigation,
        };
    }

    /// 焦点是否在侧边栏
    pub fn is_navigation(self) -> bool {
        self == Self::Navigation
    }

    /// 焦点是否在内容区
    pub fn is_content(self) -> bool {
        self == Self::Content
    }
}
