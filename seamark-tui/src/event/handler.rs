//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use seamark_core::{MenuId, ViewId};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, NavigationMessage};
use crate::model::state::{ConsultantColumn, CULTURAL_REGIONS, CULTURAL_SUGGESTIONS};
use crate::model::App;
use crate::view::measure;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event, app),
        // 尺寸变化除了重绘还要重算同步布局，交给 update 层
        Event::Resize(width, height) => AppMessage::Resize(width, height),
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::QUIT.matches(&key) || DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::Navigation(NavigationMessage::ClickEntry(MenuId::HelpCenter));
    }

    if DefaultKeymap::COLLAPSE.matches(&key) {
        return AppMessage::CollapseToDefault;
    }

    // Tab: 切换焦点面板
    if key.modifiers.is_empty() && key.code == KeyCode::Tab {
        return AppMessage::ToggleFocus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 处理侧边栏的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }
        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),
        // Enter: 激活光标所在行
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理内容区的按键，按当前视图路由
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    let Some(view) = app.nav.current_view() else {
        return AppMessage::Noop;
    };

    match view {
        ViewId::FindConsultant => handle_consultant_keys(key),
        ViewId::MyConsultant => handle_contact_keys(key),
        ViewId::HashValue | ViewId::CulturalAdaptation => handle_slot_keys(key),
        ViewId::Settings => handle_settings_keys(key),
        _ => handle_scroll_keys(key),
    }
}

/// 滚动类页面：↑↓ 逐行滚动
fn handle_scroll_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::ScrollDown),
        _ => AppMessage::Noop,
    }
}

/// 「寻找顾问」：↑↓ 滚动当前栏，←→ 切换左右栏
fn handle_consultant_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::ScrollDown),
        KeyCode::Left | KeyCode::Right => AppMessage::Content(ContentMessage::SwitchColumn),
        _ => AppMessage::Noop,
    }
}

/// 「我的顾问」：↑↓ 切换会话联系人
fn handle_contact_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        _ => AppMessage::Noop,
    }
}

/// 「哈希值」与「文化适配」：↑↓ 移动焦点，Enter 确认
fn handle_slot_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

/// 处理设置页面的按键
fn handle_settings_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上一个设置项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        // ↓ 或 j: 下一个设置项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        // ←: 当前项取值向前切
        KeyCode::Left => AppMessage::Content(ContentMessage::CyclePrevious),
        // →: 当前项取值向后切
        KeyCode::Right => AppMessage::Content(ContentMessage::CycleNext),
        _ => AppMessage::Noop,
    }
}

/// 处理鼠标事件
fn handle_mouse_event(mouse: MouseEvent, app: &App) -> AppMessage {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            handle_mouse_down(Position::new(mouse.column, mouse.row), app)
        }
        MouseEventKind::ScrollUp => AppMessage::Content(ContentMessage::ScrollUp),
        MouseEventKind::ScrollDown => AppMessage::Content(ContentMessage::ScrollDown),
        _ => AppMessage::Noop,
    }
}

/// 左键按下的命中测试
///
/// 区域划分与渲染共用 `view::measure`，这里算出的矩形
/// 就是屏幕上画出的矩形。
fn handle_mouse_down(position: Position, app: &App) -> AppMessage {
    let viewport = app.viewport_rect();

    // 侧边栏：按行号换算成菜单行点击
    let sidebar = measure::sidebar_inner(viewport);
    if sidebar.contains(position) {
        let index = usize::from(position.y - sidebar.y);
        return AppMessage::Navigation(NavigationMessage::ClickRow(index));
    }

    let page = measure::page_inner(viewport);
    if !page.contains(position) {
        return AppMessage::Noop;
    }

    match app.nav.current_view() {
        Some(ViewId::FindConsultant) => consultant_hit(position, page),
        Some(ViewId::MyConsultant) => contact_hit(position, app),
        Some(ViewId::HashValue) => hash_hit(position, page),
        Some(ViewId::CulturalAdaptation) => cultural_hit(position, page, app),
        _ => AppMessage::Noop,
    }
}

/// 「寻找顾问」：点哪栏哪栏拿焦点
fn consultant_hit(position: Position, page: Rect) -> AppMessage {
    let (left, right) = measure::consultant_columns(page);
    if left.contains(position) {
        return AppMessage::Content(ContentMessage::FocusColumn(ConsultantColumn::Left));
    }
    if right.contains(position) {
        return AppMessage::Content(ContentMessage::FocusColumn(ConsultantColumn::Right));
    }
    AppMessage::Noop
}

/// 「我的顾问」：联系人点击区域在模型里维护
fn contact_hit(position: Position, app: &App) -> AppMessage {
    match app.my_consultant.contact_at(position) {
        Some(id) => AppMessage::Content(ContentMessage::SelectContact(id)),
        None => AppMessage::Noop,
    }
}

/// 「哈希值」：两个上传槽和生成按钮
fn hash_hit(position: Position, page: Rect) -> AppMessage {
    let areas = measure::hash_areas(page);
    if areas.upload.contains(position) {
        AppMessage::Content(ContentMessage::FillUploadSlot)
    } else if areas.verify.contains(position) {
        AppMessage::Content(ContentMessage::FillVerifySlot)
    } else if areas.generate.contains(position) {
        AppMessage::Content(ContentMessage::GenerateHash)
    } else {
        AppMessage::Noop
    }
}

/// 「文化适配」：上传区、检测按钮与结果区的行
fn cultural_hit(position: Position, page: Rect, app: &App) -> AppMessage {
    let areas = measure::cultural_areas(page);
    if areas.upload.contains(position) {
        return AppMessage::Content(ContentMessage::StageFile);
    }
    if areas.detect.contains(position) {
        return AppMessage::Content(ContentMessage::Detect);
    }

    // 结果未显示时下方是空白，点击不算数
    if !app.cultural.results_shown {
        return AppMessage::Noop;
    }

    if let Some(index) = row_index(position, areas.suggestions, CULTURAL_SUGGESTIONS.len()) {
        return AppMessage::Content(ContentMessage::SuggestionRow(index));
    }
    if let Some(index) = row_index(position, areas.regions, CULTURAL_REGIONS.len()) {
        return AppMessage::Content(ContentMessage::RegionRow(index));
    }
    AppMessage::Noop
}

/// 带边框列表里的行号：首行在上边框的下一行
fn row_index(position: Position, area: Rect, len: usize) -> Option<usize> {
    if !area.contains(position) || position.y <= area.y {
        return None;
    }
    let index = usize::from(position.y - area.y - 1);
    (index < len).then_some(index)
}
