//! 内容区更新逻辑
//!
//! 同一个消息在不同视图下含义不同，这里按当前视图路由；
//! 消息与视图对不上号时（例如切走后迟到的点击）一律忽略。

use seamark_core::ViewId;

use crate::backend::{AppConfig, ConfigService, LocalConfigService};
use crate::i18n::t;
use crate::message::ContentMessage;
use crate::model::state::{
    ConsultantColumn, CulturalFocus, FindConsultantState, HashSlotFocus, CULTURAL_FILE_NAME,
    CULTURAL_REGIONS, CULTURAL_SUGGESTIONS, DEMO_FILE_NAME,
};
use crate::model::App;
use crate::view::measure;
use crate::view::pages;
use crate::view::theme;

/// 处理内容区消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        // ========== 滚动 ==========
        ContentMessage::ScrollUp => {
            handle_scroll_up(app);
        }
        ContentMessage::ScrollDown => {
            handle_scroll_down(app);
        }

        // ========== 选择 ==========
        ContentMessage::SelectPrevious => {
            handle_select_previous(app);
        }
        ContentMessage::SelectNext => {
            handle_select_next(app);
        }
        ContentMessage::Confirm => {
            handle_confirm(app);
        }

        // ========== 「寻找顾问」专用 ==========
        ContentMessage::SwitchColumn => {
            if app.nav.current_view() == Some(ViewId::FindConsultant) {
                app.find_consultant.switch_column();
            }
        }
        ContentMessage::FocusColumn(column) => {
            if app.nav.current_view() == Some(ViewId::FindConsultant) {
                app.find_consultant.focus_column(column);
            }
        }

        // ========== 「我的顾问」专用 ==========
        ContentMessage::SelectContact(id) => {
            if app.nav.current_view() == Some(ViewId::MyConsultant) {
                app.my_consultant.select(id);
            }
        }

        // ========== 「哈希值」专用 ==========
        ContentMessage::FillUploadSlot => {
            if app.nav.current_view() == Some(ViewId::HashValue) {
                fill_upload(app);
            }
        }
        ContentMessage::FillVerifySlot => {
            if app.nav.current_view() == Some(ViewId::HashValue) {
                fill_verify(app);
            }
        }
        ContentMessage::GenerateHash => {
            if app.nav.current_view() == Some(ViewId::HashValue) {
                generate_hash();
            }
        }

        // ========== 「文化适配」专用 ==========
        ContentMessage::StageFile => {
            if app.nav.current_view() == Some(ViewId::CulturalAdaptation) {
                stage_file(app);
            }
        }
        ContentMessage::Detect => {
            if app.nav.current_view() == Some(ViewId::CulturalAdaptation) {
                detect(app);
            }
        }
        ContentMessage::SuggestionRow(index) => {
            if app.nav.current_view() == Some(ViewId::CulturalAdaptation) {
                if let Some(text) = CULTURAL_SUGGESTIONS.get(index) {
                    log::info!("suggestion clicked: {text}");
                }
            }
        }
        ContentMessage::RegionRow(index) => {
            if app.nav.current_view() == Some(ViewId::CulturalAdaptation) {
                if let Some((region, _)) = CULTURAL_REGIONS.get(index) {
                    log::info!("region note clicked: {region}");
                }
            }
        }

        // ========== 设置页专用 ==========
        ContentMessage::CyclePrevious => {
            if app.nav.current_view() == Some(ViewId::Settings) {
                app.settings.toggle_previous();
                settings_changed(app);
            }
        }
        ContentMessage::CycleNext => {
            if app.nav.current_view() == Some(ViewId::Settings) {
                app.settings.toggle_next();
                settings_changed(app);
            }
        }
    }
}

// ========== 滚动处理 ==========

fn handle_scroll_up(app: &mut App) {
    // 滚动锁定的视图把滚动交给聚焦的那一栏
    if app.nav.scroll_locked() {
        app.find_consultant.scroll_up();
        return;
    }
    app.content_scroll = app.content_scroll.saturating_sub(1);
}

fn handle_scroll_down(app: &mut App) {
    if app.nav.scroll_locked() {
        let max = consultant_scroll_max(app);
        app.find_consultant.scroll_down(max);
        return;
    }
    let Some(view) = app.nav.current_view() else {
        return;
    };
    if app.content_scroll < page_scroll_max(app, view) {
        app.content_scroll += 1;
    }
}

/// 静态页面的最大滚动行数：内容总行数减掉可视行数
fn page_scroll_max(app: &App, view: ViewId) -> u16 {
    let total = pages::scrollable_line_count(view);
    let visible = usize::from(measure::page_inner(app.viewport_rect()).height);
    u16::try_from(total.saturating_sub(visible)).unwrap_or(u16::MAX)
}

/// 聚焦栏的最大滚动行数
///
/// 列表区从吸顶高度之后开始，自身留一圈边框。
fn consultant_scroll_max(app: &App) -> u16 {
    let page = measure::page_inner(app.viewport_rect());
    let (left, right) = measure::consultant_columns(page);
    let sticky_max = app.layout.params().sticky_max_h;
    let (column, lines) = match app.find_consultant.focused {
        ConsultantColumn::Left => (left, FindConsultantState::left_line_count()),
        ConsultantColumn::Right => (right, FindConsultantState::right_line_count()),
    };
    let list = measure::consultant_list_area(column, sticky_max);
    let visible = list.height.saturating_sub(2);
    lines.saturating_sub(visible)
}

// ========== 选择处理 ==========

fn handle_select_previous(app: &mut App) {
    match app.nav.current_view() {
        Some(ViewId::MyConsultant) => app.my_consultant.select_previous(),
        Some(ViewId::HashValue) => app.hash_value.focus_previous(),
        Some(ViewId::CulturalAdaptation) => app.cultural.focus_previous(),
        Some(ViewId::Settings) => app.settings.select_previous(),
        _ => {}
    }
}

fn handle_select_next(app: &mut App) {
    match app.nav.current_view() {
        Some(ViewId::MyConsultant) => app.my_consultant.select_next(),
        Some(ViewId::HashValue) => app.hash_value.focus_next(),
        Some(ViewId::CulturalAdaptation) => app.cultural.focus_next(),
        Some(ViewId::Settings) => app.settings.select_next(),
        _ => {}
    }
}

fn handle_confirm(app: &mut App) {
    match app.nav.current_view() {
        Some(ViewId::HashValue) => match app.hash_value.focused {
            HashSlotFocus::Upload => fill_upload(app),
            HashSlotFocus::Verify => fill_verify(app),
            HashSlotFocus::Generate => generate_hash(),
        },
        Some(ViewId::CulturalAdaptation) => match app.cultural.focused {
            CulturalFocus::Upload => stage_file(app),
            CulturalFocus::Detect => detect(app),
        },
        _ => {}
    }
}

// ========== 「哈希值」处理 ==========

fn fill_upload(app: &mut App) {
    if app.hash_value.fill_upload() {
        log::info!("upload slot filled: {DEMO_FILE_NAME}");
    }
}

fn fill_verify(app: &mut App) {
    if app.hash_value.fill_verify() {
        log::info!("verify slot filled: {DEMO_FILE_NAME}");
    }
}

/// 生成按钮是演示件，链上哈希常驻结果区，点击只留日志
fn generate_hash() {
    log::info!("generate hash clicked");
}

// ========== 「文化适配」处理 ==========

fn stage_file(app: &mut App) {
    app.cultural.stage_file();
    log::info!("cultural file staged: {CULTURAL_FILE_NAME}");
}

fn detect(app: &mut App) {
    app.cultural.detect();
    log::info!("cultural detection started");
}

// ========== 设置页处理 ==========

/// 设置变化后：同步主题全局值并立即写回配置
fn settings_changed(app: &mut App) {
    theme::set_theme_index(app.settings.theme.index());

    let config = AppConfig {
        theme: app.settings.theme.name().to_string(),
        language: app.settings.language.code().to_string(),
    };
    match LocalConfigService::new().save(&config) {
        Ok(()) => app.set_status(t().common.saved),
        Err(err) => log::warn!("config save failed: {err:#}"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use seamark_core::MenuId;

    use super::*;
    use crate::backend::AppConfig;
    use crate::message::{AppMessage, NavigationMessage};
    use crate::model::state::ContactId;
    use crate::model::{sidebar_rows, SidebarRow};

    fn booted_app(viewport: (u16, u16)) -> App {
        let mut app = App::new(&AppConfig::default(), viewport).unwrap();
        crate::update::bootstrap(&mut app);
        app
    }

    fn click_sub(app: &mut App, parent: MenuId, view: ViewId) {
        let index = sidebar_rows(&app.nav)
            .iter()
            .position(|row| matches!(row, SidebarRow::Entry(e) if *e == parent))
            .unwrap();
        crate::update::update(
            app,
            AppMessage::Navigation(NavigationMessage::ClickRow(index)),
        );
        let index = sidebar_rows(&app.nav)
            .iter()
            .position(|row| matches!(row, SidebarRow::Sub(_, v) if *v == view))
            .unwrap();
        crate::update::update(
            app,
            AppMessage::Navigation(NavigationMessage::ClickRow(index)),
        );
    }

    #[test]
    fn test_page_scroll_stops_at_content_bottom() {
        // 矮终端，默认视图的对比表放不下，可以滚动
        let mut app = booted_app((120, 12));
        let expected = page_scroll_max(&app, ViewId::Comparison);
        assert!(expected > 0);

        for _ in 0..100 {
            update(&mut app, ContentMessage::ScrollDown);
        }
        assert_eq!(app.content_scroll, expected);

        for _ in 0..100 {
            update(&mut app, ContentMessage::ScrollUp);
        }
        assert_eq!(app.content_scroll, 0);
    }

    #[test]
    fn test_locked_view_scrolls_focused_column_not_the_page() {
        let mut app = booted_app((120, 20));
        click_sub(&mut app, MenuId::Consultants, ViewId::FindConsultant);
        assert!(app.nav.scroll_locked());

        update(&mut app, ContentMessage::ScrollDown);

        assert_eq!(app.content_scroll, 0);
        assert_eq!(app.find_consultant.left_scroll, 1);
        assert_eq!(app.find_consultant.right_scroll, 0);

        // 换栏后滚动作用到另一栏
        update(&mut app, ContentMessage::SwitchColumn);
        update(&mut app, ContentMessage::ScrollDown);
        assert_eq!(app.find_consultant.right_scroll, 1);
        assert_eq!(app.find_consultant.left_scroll, 1);
    }

    #[test]
    fn test_contact_selection_ignored_outside_its_view() {
        let mut app = booted_app((120, 40));
        update(&mut app, ContentMessage::SelectContact(ContactId::Julia));
        assert_eq!(app.my_consultant.selected, ContactId::Jiajian);

        click_sub(&mut app, MenuId::Consultants, ViewId::MyConsultant);
        update(&mut app, ContentMessage::SelectContact(ContactId::Julia));
        assert_eq!(app.my_consultant.selected, ContactId::Julia);
    }

    #[test]
    fn test_confirm_fills_focused_slot_once() {
        let mut app = booted_app((120, 40));
        click_sub(&mut app, MenuId::Compliance, ViewId::HashValue);

        update(&mut app, ContentMessage::Confirm);
        assert!(app.hash_value.upload_filled);
        assert!(!app.hash_value.verify_filled);

        // 已填充的槽再确认一次不变
        update(&mut app, ContentMessage::Confirm);
        assert!(app.hash_value.upload_filled);

        update(&mut app, ContentMessage::SelectNext);
        update(&mut app, ContentMessage::Confirm);
        assert!(app.hash_value.verify_filled);
    }

    #[test]
    fn test_detect_replays_reveal_from_the_first_card() {
        let mut app = booted_app((120, 40));
        click_sub(&mut app, MenuId::Compliance, ViewId::CulturalAdaptation);

        update(&mut app, ContentMessage::StageFile);
        update(&mut app, ContentMessage::Detect);
        for _ in 0..10 {
            crate::update::update(&mut app, AppMessage::Tick);
        }
        assert_eq!(app.cultural.visible_cards(), 4);

        // 再点一次检测，从第一张卡重播
        update(&mut app, ContentMessage::Detect);
        assert_eq!(app.cultural.visible_cards(), 1);
        assert!(app.cultural.file_staged);
    }
}
