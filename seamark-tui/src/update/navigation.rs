//! 侧边栏更新逻辑
//!
//! 光标移动只改光标；激活某行才走 seamark-core 的切换状态机，
//! 返回的效果在 [`after_transition`] 里统一执行。

use seamark_core::{NavEffect, ViewId};

use crate::message::NavigationMessage;
use crate::model::{sidebar_rows, App, SidebarRow};
use crate::view::measure::ViewportProbe;

/// 处理侧边栏消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.sidebar.select_previous();
        }

        NavigationMessage::SelectNext => {
            let len = sidebar_rows(&app.nav).len();
            app.sidebar.select_next(len);
        }

        NavigationMessage::SelectFirst => {
            app.sidebar.select_first();
        }

        NavigationMessage::SelectLast => {
            let len = sidebar_rows(&app.nav).len();
            app.sidebar.select_last(len);
        }

        NavigationMessage::Confirm => {
            activate_row(app, app.sidebar.cursor);
        }

        NavigationMessage::ClickRow(index) => {
            activate_row(app, index);
        }

        NavigationMessage::ClickEntry(id) => {
            let effects = app.nav.click_entry(id);
            after_transition(app, &effects);
        }
    }
}

/// 激活指定行：一级菜单走 click_entry，二级链接走 click_sub_entry
fn activate_row(app: &mut App, index: usize) {
    let rows = sidebar_rows(&app.nav);
    let Some(row) = rows.get(index).copied() else {
        return;
    };
    app.sidebar.cursor = index;

    let effects = match row {
        SidebarRow::Entry(id) => app.nav.click_entry(id),
        SidebarRow::Sub(parent, view) => app.nav.click_sub_entry(parent, view),
    };
    after_transition(app, &effects);
}

/// 视图切换后的收尾
///
/// 空效果表示纯展开/收起，视图没变，只需要把光标夹回
/// 新行列表的范围；否则重置滚动与一次性展示再逐条执行效果。
pub(super) fn after_transition(app: &mut App, effects: &[NavEffect]) {
    if !effects.is_empty() {
        app.content_scroll = 0;
        app.cultural.hide_results();
        app.clear_status();
        apply_effects(app, effects);
    }
    let len = sidebar_rows(&app.nav).len();
    app.sidebar.clamp(len);
}

/// 逐条执行切换效果
pub(super) fn apply_effects(app: &mut App, effects: &[NavEffect]) {
    for effect in effects {
        match effect {
            NavEffect::SyncLayout => {
                let probe = ViewportProbe::new(app.viewport_rect(), app.nav.current_view());
                app.layout.recompute(&probe);
            }
            NavEffect::ResetLayout => {
                app.layout.reset();
            }
            NavEffect::Remount(ViewId::MyConsultant) => {
                super::rescale_contacts(app);
            }
            NavEffect::Remount(ViewId::HashValue) => {
                app.hash_value.reset_focus();
            }
            NavEffect::Remount(_) => {}
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use seamark_core::MenuId;

    use super::*;
    use crate::backend::AppConfig;
    use crate::message::{AppMessage, ContentMessage};

    fn booted_app() -> App {
        let mut app = App::new(&AppConfig::default(), (120, 40)).unwrap();
        crate::update::bootstrap(&mut app);
        app
    }

    fn row_of_sub(app: &App, view: ViewId) -> usize {
        sidebar_rows(&app.nav)
            .iter()
            .position(|row| matches!(row, SidebarRow::Sub(_, v) if *v == view))
            .unwrap()
    }

    fn row_of_entry(app: &App, id: MenuId) -> usize {
        sidebar_rows(&app.nav)
            .iter()
            .position(|row| matches!(row, SidebarRow::Entry(e) if *e == id))
            .unwrap()
    }

    #[test]
    fn test_bootstrap_measures_header_but_not_sticky() {
        let app = booted_app();
        let params = app.layout.params();
        assert!(params.header_h > 0);
        assert_eq!(params.sticky_max_h, 0);
        assert_eq!(app.nav.current_view(), Some(ViewId::Comparison));
    }

    #[test]
    fn test_pure_disclosure_keeps_view_and_scroll() {
        let mut app = booted_app();
        app.content_scroll = 5;

        // 数据看板已展开，点一个收着的组只展开不切换
        let index = row_of_entry(&app, MenuId::Consultants);
        update(&mut app, NavigationMessage::ClickRow(index));

        assert_eq!(app.nav.current_view(), Some(ViewId::Comparison));
        assert_eq!(app.content_scroll, 5);
        assert!(app.nav.is_entry_open(MenuId::Consultants));
    }

    #[test]
    fn test_transition_resets_scroll_and_hides_results() {
        let mut app = booted_app();
        app.content_scroll = 7;
        app.cultural.detect();

        let index = row_of_sub(&app, ViewId::MarketReport);
        update(&mut app, NavigationMessage::ClickRow(index));

        assert_eq!(app.nav.current_view(), Some(ViewId::MarketReport));
        assert_eq!(app.content_scroll, 0);
        assert!(!app.cultural.results_shown);
    }

    #[test]
    fn test_entering_locked_view_publishes_sticky_heights() {
        let mut app = booted_app();

        let index = row_of_entry(&app, MenuId::Consultants);
        update(&mut app, NavigationMessage::ClickRow(index));
        let index = row_of_sub(&app, ViewId::FindConsultant);
        update(&mut app, NavigationMessage::ClickRow(index));

        assert_eq!(app.nav.current_view(), Some(ViewId::FindConsultant));
        assert!(app.nav.scroll_locked());
        let params = app.layout.params();
        assert!(params.left_sticky_h > 0);
        assert!(params.right_sticky_h > 0);
        assert_eq!(
            params.sticky_max_h,
            params.left_sticky_h.max(params.right_sticky_h)
        );
    }

    #[test]
    fn test_leaving_locked_view_zeroes_sticky_but_keeps_header() {
        let mut app = booted_app();
        let index = row_of_entry(&app, MenuId::Consultants);
        update(&mut app, NavigationMessage::ClickRow(index));
        let index = row_of_sub(&app, ViewId::FindConsultant);
        update(&mut app, NavigationMessage::ClickRow(index));
        let header_before = app.layout.params().header_h;

        let index = row_of_sub(&app, ViewId::MyConsultant);
        update(&mut app, NavigationMessage::ClickRow(index));

        let params = app.layout.params();
        assert_eq!(params.sticky_max_h, 0);
        assert_eq!(params.header_h, header_before);
    }

    #[test]
    fn test_collapse_message_falls_back_to_default_view() {
        let mut app = booted_app();
        let index = row_of_sub(&app, ViewId::MarketReport);
        update(&mut app, NavigationMessage::ClickRow(index));
        assert_eq!(app.nav.current_view(), Some(ViewId::MarketReport));

        crate::update::update(&mut app, AppMessage::CollapseToDefault);

        assert_eq!(app.nav.current_view(), Some(ViewId::Comparison));
        assert_eq!(app.nav.active_entry(), None);
        // 行列表收缩后光标仍在范围内
        assert!(app.sidebar.cursor < sidebar_rows(&app.nav).len());
    }

    #[test]
    fn test_remount_resets_hash_focus_but_keeps_filled_slots() {
        let mut app = booted_app();
        let index = row_of_entry(&app, MenuId::Compliance);
        update(&mut app, NavigationMessage::ClickRow(index));
        let index = row_of_sub(&app, ViewId::HashValue);
        update(&mut app, NavigationMessage::ClickRow(index));

        crate::update::update(
            &mut app,
            AppMessage::Content(ContentMessage::FillUploadSlot),
        );
        crate::update::update(&mut app, AppMessage::Content(ContentMessage::SelectNext));
        assert!(app.hash_value.upload_filled);

        // 离开再回来：焦点回到第一个槽，填充结果保留
        let index = row_of_sub(&app, ViewId::CulturalAdaptation);
        update(&mut app, NavigationMessage::ClickRow(index));
        let index = row_of_sub(&app, ViewId::HashValue);
        update(&mut app, NavigationMessage::ClickRow(index));

        assert!(app.hash_value.upload_filled);
        assert_eq!(
            app.hash_value.focused,
            crate::model::state::HashSlotFocus::Upload
        );
    }
}
