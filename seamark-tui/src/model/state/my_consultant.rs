//! 「我的顾问」页状态
//!
//! 联系人的点击区域按设计稿坐标定义。面板宽度变化时横向按
//! 「实际宽 / 设计宽」等比缩放，纵向保持设计稿行号不变，
//! 因此点击区域始终与渲染位置一致。

use ratatui::layout::{Position, Rect};

/// 联系人标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactId {
    /// 贾剑锋（默认会话）
    #[default]
    Jiajian,
    /// Julia
    Julia,
}

#[derive(Debug, Clone, Copy)]
struct DesignRect {
    x: u16,
    y: u16,
    width: u16,
    height: u16,
}

/// 联系人（演示数据）
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    pub id: ContactId,
    pub name: &'static str,
    pub title: &'static str,
    design: DesignRect,
}

/// 设计稿宽度（列数），横向缩放以此为基准
const DESIGN_WIDTH: u16 = 40;

/// 联系人名单
pub const CONTACTS: [Contact; 2] = [
    Contact {
        id: ContactId::Jiajian,
        name: "贾剑锋",
        title: "资深出海顾问",
        design: DesignRect { x: 1, y: 1, width: 38, height: 3 },
    },
    Contact {
        id: ContactId::Julia,
        name: "Julia",
        title: "Localization Specialist",
        design: DesignRect { x: 1, y: 5, width: 38, height: 3 },
    },
];

/// 聊天记录（演示数据）：(是否本人发送, 内容)
const JIAJIAN_CHAT: [(bool, &str); 6] = [
    (false, "您好，我是贾剑锋，负责您的出海整体方案。"),
    (true, "您好，想了解下东南亚市场的投放节奏。"),
    (false, "建议先以印尼、泰国做试点，首月预算三七开。"),
    (false, "我整理了一份渠道清单，稍后发您。"),
    (true, "好的，麻烦重点标注下直播渠道。"),
    (false, "没问题，今天下班前给到您。"),
];

const JULIA_CHAT: [(bool, &str); 5] = [
    (false, "Hi! I'm Julia, your localization specialist."),
    (true, "Hi Julia, we need a Bahasa version of the landing page."),
    (false, "Sure. Could you share the source copy and the glossary?"),
    (true, "Just sent them to your inbox."),
    (false, "Got them. First draft will be ready by Thursday."),
];

/// 页面状态
#[derive(Debug)]
pub struct MyConsultantState {
    /// 当前会话的联系人
    pub selected: ContactId,
    /// 各联系人的点击区域（屏幕坐标）
    hit_areas: Vec<(ContactId, Rect)>,
}

impl MyConsultantState {
    pub fn new() -> Self {
        Self {
            selected: ContactId::default(),
            hit_areas: Vec::new(),
        }
    }

    /// 按面板实际区域重算点击区域：横向缩放、纵向不动
    pub fn rescale(&mut self, panel: Rect) {
        self.hit_areas.clear();
        if panel.width == 0 || panel.height == 0 {
            return;
        }
        for contact in &CONTACTS {
            let d = contact.design;
            let left = scale_x(d.x, panel.width);
            let right = scale_x(d.x + d.width, panel.width);
            let area = Rect {
                x: panel.x + left,
                y: panel.y + d.y,
                width: right.saturating_sub(left).max(1),
                height: d.height,
            };
            let clipped = area.intersection(panel);
            if clipped.width > 0 && clipped.height > 0 {
                self.hit_areas.push((contact.id, clipped));
            }
        }
    }

    /// 命中测试：返回坐标落在哪位联系人的区域里
    pub fn contact_at(&self, position: Position) -> Option<ContactId> {
        self.hit_areas
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(id, _)| *id)
    }

    /// 联系人当前的点击区域，渲染时复用以保证所见即所点
    pub fn area_of(&self, id: ContactId) -> Option<Rect> {
        self.hit_areas
            .iter()
            .find(|(contact, _)| *contact == id)
            .map(|(_, area)| *area)
    }

    /// 切换会话对象
    pub fn select(&mut self, id: ContactId) {
        if self.selected != id {
            self.selected = id;
            log::debug!("chat switched to {}", self.selected_contact().name);
        }
    }

    /// 选中名单中的上一位（循环）
    pub fn select_previous(&mut self) {
        let index = self.selected_index();
        let previous = index.checked_sub(1).unwrap_or(CONTACTS.len() - 1);
        self.select(CONTACTS[previous].id);
    }

    /// 选中名单中的下一位（循环）
    pub fn select_next(&mut self) {
        let next = (self.selected_index() + 1) % CONTACTS.len();
        self.select(CONTACTS[next].id);
    }

    /// 当前会话联系人的资料
    pub fn selected_contact(&self) -> &'static Contact {
        let index = self.selected_index();
        &CONTACTS[index]
    }

    /// 当前会话的聊天记录
    pub fn chat_log(&self) -> &'static [(bool, &'static str)] {
        match self.selected {
            ContactId::Jiajian => &JIAJIAN_CHAT,
            ContactId::Julia => &JULIA_CHAT,
        }
    }

    fn selected_index(&self) -> usize {
        CONTACTS
            .iter()
            .position(|c| c.id == self.selected)
            .unwrap_or(0)
    }
}

impl Default for MyConsultantState {
    fn default() -> Self {
        Self::new()
    }
}

/// 设计稿横坐标换算到实际面板宽度（四舍五入）
fn scale_x(x: u16, panel_width: u16) -> u16 {
    let scaled = (u32::from(x) * u32::from(panel_width) + u32::from(DESIGN_WIDTH) / 2)
        / u32::from(DESIGN_WIDTH);
    u16::try_from(scaled).unwrap_or(u16::MAX)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_rescale_scales_x_and_keeps_y() {
        let mut state = MyConsultantState::new();
        state.rescale(Rect::new(0, 10, 40, 20));
        let narrow = state.area_of(ContactId::Julia).unwrap();
        state.rescale(Rect::new(0, 10, 80, 20));
        let wide = state.area_of(ContactId::Julia).unwrap();

        assert_eq!(wide.x, narrow.x * 2);
        assert_eq!(wide.width, narrow.width * 2);
        assert_eq!(wide.y, narrow.y);
        assert_eq!(wide.height, narrow.height);
    }

    #[test]
    fn test_hit_testing_matches_areas() {
        let mut state = MyConsultantState::new();
        state.rescale(Rect::new(5, 3, 40, 20));
        let area = state.area_of(ContactId::Jiajian).unwrap();
        let inside = Position::new(area.x + 1, area.y + 1);
        assert_eq!(state.contact_at(inside), Some(ContactId::Jiajian));
        assert_eq!(state.contact_at(Position::new(0, 0)), None);
    }

    #[test]
    fn test_selection_cycles_and_switches_chat() {
        let mut state = MyConsultantState::new();
        assert_eq!(state.selected, ContactId::Jiajian);
        state.select_next();
        assert_eq!(state.selected, ContactId::Julia);
        assert!(state.chat_log()[0].1.starts_with("Hi!"));
        state.select_next();
        assert_eq!(state.selected, ContactId::Jiajian);
        state.select_previous();
        assert_eq!(state.selected, ContactId::Julia);
    }

    #[test]
    fn test_zero_width_panel_clears_areas() {
        let mut state = MyConsultantState::new();
        state.rescale(Rect::new(0, 0, 40, 20));
        assert!(state.area_of(ContactId::Jiajian).is_some());
        state.rescale(Rect::new(0, 0, 0, 20));
        assert!(state.area_of(ContactId::Jiajian).is_none());
    }
}
