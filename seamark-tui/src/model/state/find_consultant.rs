//! 「寻找顾问」页状态
//!
//! 页面分左右两栏：左栏是筛选卡加顾问列表，右栏是活动横幅加
//! 服务动态。两张卡片吸顶，列表各自独立滚动，滚动位置在
//! 视图切换后保留。

/// 左右栏标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsultantColumn {
    /// 左栏：筛选条件与顾问列表
    #[default]
    Left,
    /// 右栏：活动横幅与服务动态
    Right,
}

impl ConsultantColumn {
    /// 另一栏
    pub const fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// 顾问条目（演示数据）
#[derive(Debug, Clone, Copy)]
pub struct ConsultantProfile {
    pub name: &'static str,
    pub region: &'static str,
    pub field: &'static str,
    pub rating: &'static str,
}

/// 顾问演示名单
pub const CONSULTANTS: [ConsultantProfile; 6] = [
    ConsultantProfile { name: "张明远", region: "东南亚", field: "快消品出海", rating: "4.9" },
    ConsultantProfile { name: "林嘉怡", region: "北美", field: "品牌本地化", rating: "4.8" },
    ConsultantProfile { name: "陈建国", region: "中东", field: "渠道拓展", rating: "4.7" },
    ConsultantProfile { name: "Sarah Chen", region: "欧洲", field: "数字广告投放", rating: "4.8" },
    ConsultantProfile { name: "王思琪", region: "日韩", field: "社媒运营", rating: "4.6" },
    ConsultantProfile { name: "李文博", region: "拉美", field: "跨境电商", rating: "4.7" },
];

/// 服务动态演示数据
pub const SERVICE_FEED: [&str; 8] = [
    "王思琪 刚刚完成一次品牌诊断",
    "印尼市场月报已更新",
    "陈建国 新增 2 个渠道合作资源",
    "越南电商大促日历已发布",
    "林嘉怡 的本地化案例入选精选",
    "中东社媒合规指引已更新",
    "新加坡直播带货白皮书上线",
    "张明远 开放下周咨询时段",
];

/// 页面状态
#[derive(Debug, Default)]
pub struct FindConsultantState {
    /// 当前聚焦的栏
    pub focused: ConsultantColumn,
    /// 左栏列表滚动行
    pub left_scroll: u16,
    /// 右栏列表滚动行
    pub right_scroll: u16,
}

impl FindConsultantState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 焦点换到另一栏
    pub fn switch_column(&mut self) {
        self.focused = self.focused.other();
    }

    /// 焦点放到指定栏（鼠标点击）
    pub fn focus_column(&mut self, column: ConsultantColumn) {
        self.focused = column;
    }

    /// 聚焦栏向上滚一行
    pub fn scroll_up(&mut self) {
        let scroll = self.focused_scroll_mut();
        *scroll = scroll.saturating_sub(1);
    }

    /// 聚焦栏向下滚一行，不超过 `max`
    pub fn scroll_down(&mut self, max: u16) {
        let scroll = self.focused_scroll_mut();
        if *scroll < max {
            *scroll += 1;
        }
    }

    fn focused_scroll_mut(&mut self) -> &mut u16 {
        match self.focused {
            ConsultantColumn::Left => &mut self.left_scroll,
            ConsultantColumn::Right => &mut self.right_scroll,
        }
    }

    /// 左栏列表总行数（每位顾问三行）
    pub fn left_line_count() -> u16 {
        u16::try_from(CONSULTANTS.len() * 3).unwrap_or(u16::MAX)
    }

    /// 右栏列表总行数（每条动态两行）
    pub fn right_line_count() -> u16 {
        u16::try_from(SERVICE_FEED.len() * 2).unwrap_or(u16::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_scroll_independently() {
        let mut state = FindConsultantState::new();
        state.scroll_down(10);
        state.scroll_down(10);
        state.switch_column();
        state.scroll_down(10);
        assert_eq!(state.left_scroll, 2);
        assert_eq!(state.right_scroll, 1);
    }

    #[test]
    fn test_scroll_clamps_at_both_ends() {
        let mut state = FindConsultantState::new();
        state.scroll_up();
        assert_eq!(state.left_scroll, 0);
        for _ in 0..20 {
            state.scroll_down(3);
        }
        assert_eq!(state.left_scroll, 3);
    }
}
