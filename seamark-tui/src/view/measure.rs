//! 布局测量
//!
//! 渲染、鼠标命中与高度同步共用这一组纯函数：同一终端尺寸下
//! 三处算出的区域划分完全一致，点击命中的就是画出来的位置，
//! 高度探针量到的就是实际要画的卡片高度。

use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use seamark_core::{StickyProbe, ViewId};

use crate::model::state::CULTURAL_SUGGESTIONS;

/// 状态栏高度
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// 头部高度：窄终端下标题行放不下，多留一行
pub fn header_height(width: u16) -> u16 {
    if width < 70 {
        5
    } else {
        4
    }
}

/// 整屏划分结果
pub struct MainAreas {
    pub header: Rect,
    pub sidebar: Rect,
    pub page: Rect,
    pub status: Rect,
}

/// 整屏划分：头部 + (侧边栏 | 内容区) + 状态栏
pub fn main_areas(viewport: Rect) -> MainAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height(viewport.width)), // 头部
            Constraint::Min(1),                                // 中间区域
            Constraint::Length(STATUS_BAR_HEIGHT),             // 状态栏
        ])
        .split(viewport);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(22), // 左侧导航
            Constraint::Percentage(78), // 右侧内容
        ])
        .split(rows[1]);

    MainAreas {
        header: rows[0],
        sidebar: columns[0],
        page: columns[1],
        status: rows[2],
    }
}

/// 内容区去掉边框后的内部区域
pub fn page_inner(viewport: Rect) -> Rect {
    main_areas(viewport).page.inner(Margin::new(1, 1))
}

/// 侧边栏去掉边框后的列表区域，菜单行号从这里起算
pub fn sidebar_inner(viewport: Rect) -> Rect {
    main_areas(viewport).sidebar.inner(Margin::new(1, 1))
}

/// 「寻找顾问」页的左右两栏
pub fn consultant_columns(page: Rect) -> (Rect, Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(42), // 左栏：筛选卡 + 顾问列表
            Constraint::Percentage(58), // 右栏：横幅 + 服务动态
        ])
        .split(page);
    (columns[0], columns[1])
}

/// 筛选卡高度：窄栏下表单行折行，需要更多行
pub fn search_card_height(column_width: u16) -> u16 {
    if column_width < 34 {
        11
    } else {
        9
    }
}

/// 活动横幅高度
pub fn banner_height(column_width: u16) -> u16 {
    if column_width < 46 {
        6
    } else {
        5
    }
}

/// 吸顶区之下的列表区域
///
/// 两栏的列表都从统一的 `sticky_max` 行之后开始，
/// 吸顶卡片较矮的一栏用空白垫到同一高度。
pub fn consultant_list_area(column: Rect, sticky_max: u16) -> Rect {
    let top = sticky_max.min(column.height);
    Rect {
        x: column.x,
        y: column.y + top,
        width: column.width,
        height: column.height - top,
    }
}

/// 「我的顾问」页的联系人栏与聊天栏
pub fn chat_columns(page: Rect) -> (Rect, Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(38), // 联系人
            Constraint::Percentage(62), // 会话
        ])
        .split(page);
    (columns[0], columns[1])
}

/// 联系人面板的内部区域，点击区域缩放以此为基准
pub fn contact_panel_inner(viewport: Rect) -> Rect {
    let (contacts, _) = chat_columns(page_inner(viewport));
    contacts.inner(Margin::new(1, 1))
}

/// 「哈希值」页的区域划分
pub struct HashAreas {
    pub upload: Rect,
    pub verify: Rect,
    pub result: Rect,
    pub generate: Rect,
}

pub fn hash_areas(page: Rect) -> HashAreas {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // 左列：两个上传槽
            Constraint::Percentage(50), // 右列：校验结果 + 生成按钮
        ])
        .split(page);

    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // 素材文件槽
            Constraint::Length(7), // 校验文件槽
            Constraint::Min(0),
        ])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // 校验结果
            Constraint::Length(3), // 生成按钮
        ])
        .split(columns[1]);

    HashAreas {
        upload: slots[0],
        verify: slots[1],
        result: right[0],
        generate: right[1],
    }
}

/// 优化建议列表的高度（边框两行 + 每条一行）
pub fn suggestions_height() -> u16 {
    u16::try_from(CULTURAL_SUGGESTIONS.len()).unwrap_or(0) + 2
}

/// 「文化适配」页的区域划分
pub struct CulturalAreas {
    pub upload: Rect,
    pub detect: Rect,
    pub cards: Rect,
    pub suggestions: Rect,
    pub regions: Rect,
}

pub fn cultural_areas(page: Rect) -> CulturalAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // 上传区与检测按钮
            Constraint::Min(1),    // 结果区
        ])
        .split(page);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // 素材上传
            Constraint::Percentage(45), // 检测按钮列
        ])
        .split(rows[0]);

    let button = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 按钮本体
            Constraint::Min(0),
        ])
        .split(top[1]);

    let results = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(58), // 结果卡片
            Constraint::Percentage(42), // 建议与地区提示
        ])
        .split(rows[1]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(suggestions_height()), // 优化建议
            Constraint::Min(1),                       // 地区风险提示
        ])
        .split(results[1]);

    CulturalAreas {
        upload: top[0],
        detect: button[0],
        cards: results[0],
        suggestions: side[0],
        regions: side[1],
    }
}

/// 基于终端尺寸的高度探针
///
/// 只有当前视图里真的画着吸顶卡片时才报告吸顶高度，
/// 其他视图一律报告缺失。
pub struct ViewportProbe {
    viewport: Rect,
    current: Option<ViewId>,
}

impl ViewportProbe {
    pub fn new(viewport: Rect, current: Option<ViewId>) -> Self {
        Self { viewport, current }
    }
}

impl StickyProbe for ViewportProbe {
    fn header_h(&self) -> Option<u16> {
        Some(header_height(self.viewport.width))
    }

    fn left_sticky_h(&self) -> Option<u16> {
        if self.current != Some(ViewId::FindConsultant) {
            return None;
        }
        let (left, _) = consultant_columns(page_inner(self.viewport));
        Some(search_card_height(left.width))
    }

    fn right_sticky_h(&self) -> Option<u16> {
        if self.current != Some(ViewId::FindConsultant) {
            return None;
        }
        let (_, right) = consultant_columns(page_inner(self.viewport));
        Some(banner_height(right.width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_areas_tile_the_viewport() {
        let viewport = Rect::new(0, 0, 120, 40);
        let areas = main_areas(viewport);
        assert_eq!(areas.header.height, header_height(120));
        assert_eq!(
            areas.header.height + areas.sidebar.height + areas.status.height,
            40
        );
        assert_eq!(areas.sidebar.width + areas.page.width, 120);
        assert_eq!(areas.status.y, 39);
    }

    #[test]
    fn test_header_grows_on_narrow_terminal() {
        assert_eq!(header_height(60), 5);
        assert_eq!(header_height(70), 4);
    }

    #[test]
    fn test_probe_reports_sticky_only_on_find_consultant() {
        let viewport = Rect::new(0, 0, 120, 40);

        let locked = ViewportProbe::new(viewport, Some(ViewId::FindConsultant));
        assert!(locked.left_sticky_h().is_some());
        assert!(locked.right_sticky_h().is_some());
        assert!(locked.header_h().is_some());

        let elsewhere = ViewportProbe::new(viewport, Some(ViewId::Comparison));
        assert_eq!(elsewhere.left_sticky_h(), None);
        assert_eq!(elsewhere.right_sticky_h(), None);
        assert!(elsewhere.header_h().is_some());

        let blank = ViewportProbe::new(viewport, None);
        assert_eq!(blank.left_sticky_h(), None);
    }

    #[test]
    fn test_hash_areas_do_not_overlap() {
        let page = page_inner(Rect::new(0, 0, 120, 40));
        let areas = hash_areas(page);
        assert_eq!(areas.upload.intersection(areas.verify).height, 0);
        assert_eq!(areas.upload.intersection(areas.generate).width, 0);
        assert!(areas.generate.y >= areas.result.y + areas.result.height);
    }

    #[test]
    fn test_consultant_list_sits_below_sticky_block() {
        let page = page_inner(Rect::new(0, 0, 120, 40));
        let (left, _) = consultant_columns(page);
        let list = consultant_list_area(left, 9);
        assert_eq!(list.y, left.y + 9);
        assert_eq!(list.height, left.height - 9);

        // 吸顶高度超过栏高时列表空间收缩到零，不会下溢
        let cramped = consultant_list_area(left, left.height + 5);
        assert_eq!(cramped.height, 0);
    }
}
