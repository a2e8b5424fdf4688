//! Menu entry definitions
//!
//! A top-level entry either navigates straight to a view or discloses a
//! submenu of views. The two behaviours are mutually exclusive and fixed
//! when the menu is built, which is what lets the click transitions stay
//! free of "both at once" special cases.

use super::view::ViewId;

/// Identifier of one top-level menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuId {
    /// 数据看板
    DataBoard,
    /// 营销方案
    MarketingPlan,
    /// 顾问服务
    Consultants,
    /// 案例中心
    Cases,
    /// 合规检测
    Compliance,
    /// 帮助中心
    HelpCenter,
    /// 设置
    Settings,
}

impl MenuId {
    /// Stable string id.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            MenuId::DataBoard => "data-board",
            MenuId::MarketingPlan => "marketing-plan",
            MenuId::Consultants => "consultants",
            MenuId::Cases => "cases",
            MenuId::Compliance => "compliance",
            MenuId::HelpCenter => "help-center",
            MenuId::Settings => "settings",
        }
    }
}

/// One child link inside a submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubMenuEntry {
    pub view: ViewId,
}

/// What activating an entry does: navigate directly, or disclose children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuTarget {
    /// Clicking the entry shows this view.
    View(ViewId),
    /// Clicking the entry toggles this submenu open and closed.
    Submenu(Vec<SubMenuEntry>),
}

/// A top-level menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub id: MenuId,
    pub target: MenuTarget,
}

impl MenuEntry {
    /// Entry that navigates straight to `view`.
    #[must_use]
    pub const fn direct(id: MenuId, view: ViewId) -> Self {
        Self {
            id,
            target: MenuTarget::View(view),
        }
    }

    /// Entry that discloses a submenu over `children`.
    #[must_use]
    pub fn submenu(id: MenuId, children: Vec<ViewId>) -> Self {
        Self {
            id,
            target: MenuTarget::Submenu(
                children.into_iter().map(|view| SubMenuEntry { view }).collect(),
            ),
        }
    }

    /// Children, if this entry discloses a submenu.
    #[must_use]
    pub fn children(&self) -> Option<&[SubMenuEntry]> {
        match &self.target {
            MenuTarget::Submenu(children) => Some(children),
            MenuTarget::View(_) => None,
        }
    }

    /// Target view, if this entry navigates directly.
    #[must_use]
    pub const fn direct_view(&self) -> Option<ViewId> {
        match self.target {
            MenuTarget::View(view) => Some(view),
            MenuTarget::Submenu(_) => None,
        }
    }

    /// Whether this entry discloses a submenu.
    #[must_use]
    pub const fn is_submenu(&self) -> bool {
        matches!(self.target, MenuTarget::Submenu(_))
    }

    /// Every view reachable from this entry.
    pub fn target_views(&self) -> impl Iterator<Item = ViewId> + '_ {
        let (direct, children) = match &self.target {
            MenuTarget::View(view) => (Some(*view), [].as_slice()),
            MenuTarget::Submenu(children) => (None, children.as_slice()),
        };
        direct.into_iter().chain(children.iter().map(|c| c.view))
    }
}

/// The production menu: dashboards first and open at startup, then the
/// direct and grouped service entries.
#[must_use]
pub fn standard_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry::submenu(
            MenuId::DataBoard,
            vec![
                ViewId::RealTime,
                ViewId::Comparison,
                ViewId::MarketReport,
                ViewId::MarketSizeChart,
            ],
        ),
        MenuEntry::direct(MenuId::MarketingPlan, ViewId::MarketingPlan),
        MenuEntry::submenu(
            MenuId::Consultants,
            vec![ViewId::FindConsultant, ViewId::MyConsultant],
        ),
        MenuEntry::submenu(MenuId::Cases, vec![ViewId::CaseReport, ViewId::OverseasCases]),
        MenuEntry::submenu(
            MenuId::Compliance,
            vec![ViewId::HashValue, ViewId::CulturalAdaptation],
        ),
        MenuEntry::direct(MenuId::HelpCenter, ViewId::HelpCenter),
        MenuEntry::direct(MenuId::Settings, ViewId::Settings),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_entry_has_no_children() {
        let entry = MenuEntry::direct(MenuId::HelpCenter, ViewId::HelpCenter);
        assert!(!entry.is_submenu());
        assert_eq!(entry.direct_view(), Some(ViewId::HelpCenter));
        assert!(entry.children().is_none());
    }

    #[test]
    fn submenu_entry_has_no_direct_view() {
        let entry = MenuEntry::submenu(MenuId::Cases, vec![ViewId::CaseReport]);
        assert!(entry.is_submenu());
        assert_eq!(entry.direct_view(), None);
        assert_eq!(entry.children().map(<[SubMenuEntry]>::len), Some(1));
    }

    #[test]
    fn standard_menu_covers_every_view_but_none_twice() {
        let menu = standard_menu();
        let mut targeted: Vec<ViewId> = menu.iter().flat_map(MenuEntry::target_views).collect();
        let before = targeted.len();
        targeted.sort_by_key(|v| v.name());
        targeted.dedup();
        assert_eq!(before, targeted.len(), "a view is reachable twice");
        assert_eq!(before, ViewId::all().len());
    }
}
