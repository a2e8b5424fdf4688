//! 侧边栏行模型
//!
//! 把菜单树按当前展开状态压平成一维行列表，
//! 光标移动与鼠标命中都在这份行列表上进行。

use seamark_core::{MenuId, NavigationState, ViewId};

/// 侧边栏中的一行
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarRow {
    /// 一级菜单项
    Entry(MenuId),
    /// 展开的二级链接（父菜单、目标视图）
    Sub(MenuId, ViewId),
}

/// 按当前展开状态生成应显示的行
pub fn sidebar_rows(nav: &NavigationState) -> Vec<SidebarRow> {
    let mut rows = Vec::new();
    for entry in nav.menu() {
        rows.push(SidebarRow::Entry(entry.id));
        if nav.is_entry_open(entry.id) {
            if let Some(children) = entry.children() {
                for child in children {
                    rows.push(SidebarRow::Sub(entry.id, child.view));
                }
            }
        }
    }
    rows
}

/// 侧边栏光标
#[derive(Debug, Default)]
pub struct SidebarState {
    /// 光标所在行（行列表下标）
    pub cursor: usize,
}

impl SidebarState {
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.cursor = 0;
    }

    pub fn select_last(&mut self, len: usize) {
        self.cursor = len.saturating_sub(1);
    }

    /// 行数变化（菜单展开/收起）后把光标夹回范围内
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_follow_open_state() {
        let mut nav = NavigationState::standard().unwrap();
        assert_eq!(sidebar_rows(&nav).len(), 7);

        nav.bootstrap();
        let rows = sidebar_rows(&nav);
        assert_eq!(rows.len(), 11);
        assert_eq!(rows[0], SidebarRow::Entry(MenuId::DataBoard));
        assert_eq!(rows[2], SidebarRow::Sub(MenuId::DataBoard, ViewId::Comparison));
        assert_eq!(rows[5], SidebarRow::Entry(MenuId::MarketingPlan));
    }

    #[test]
    fn test_cursor_clamps_after_collapse() {
        let mut state = SidebarState::new();
        state.select_last(11);
        assert_eq!(state.cursor, 10);
        state.clamp(7);
        assert_eq!(state.cursor, 6);
        state.clamp(0);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        let mut state = SidebarState::new();
        state.select_previous();
        assert_eq!(state.cursor, 0);
        state.select_next(2);
        state.select_next(2);
        assert_eq!(state.cursor, 1);
    }
}
