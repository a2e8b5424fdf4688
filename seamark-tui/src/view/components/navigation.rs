//! 左侧导航面板组件
//!
//! 菜单按展开状态压平成行列表渲染：一级菜单一行，
//! 展开的组在其下逐行列出二级链接。

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use seamark_core::{MenuId, ViewId};

use crate::i18n::t;
use crate::model::{sidebar_rows, App, SidebarRow};
use crate::view::theme::{colors, Styles};

/// 渲染导航面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let is_focused = app.focus.is_navigation();

    // 边框样式
    let border_style = if is_focused {
        Styles::border_focused()
    } else {
        Styles::border()
    };

    let block = Block::default()
        .title(format!(" {} ", texts.nav.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(border_style);

    let rows = sidebar_rows(&app.nav);
    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let is_cursor = i == app.sidebar.cursor;
            let prefix = if is_cursor { "▶ " } else { "  " };

            let (content, style) = match row {
                SidebarRow::Entry(id) => {
                    let is_submenu = app
                        .nav
                        .menu()
                        .iter()
                        .any(|entry| entry.id == *id && entry.is_submenu());
                    // 组的展开标记：▾ 已展开，▸ 可展开
                    let marker = if !is_submenu {
                        ""
                    } else if app.nav.is_entry_open(*id) {
                        " ▾"
                    } else {
                        " ▸"
                    };
                    let content =
                        format!("{}{} {}{}", prefix, entry_icon(*id), entry_label(*id), marker);
                    let style = if app.nav.is_entry_active(*id) {
                        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(c.fg)
                    };
                    (content, style)
                }
                SidebarRow::Sub(parent, view) => {
                    let content = format!("{}  ├ {}", prefix, view_label(*view));
                    let style = if app.nav.is_sub_active(*parent, *view) {
                        Styles::selected()
                    } else {
                        Style::default().fg(c.muted)
                    };
                    (content, style)
                }
            };

            ListItem::new(Line::from(Span::styled(content, style)))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(Styles::selected());

    // 使用 ListState 来跟踪光标行
    let mut state = ListState::default();
    state.select(Some(app.sidebar.cursor));

    frame.render_stateful_widget(list, area, &mut state);
}

/// 一级菜单图标
const fn entry_icon(id: MenuId) -> &'static str {
    match id {
        MenuId::DataBoard => "▦",
        MenuId::MarketingPlan => "✎",
        MenuId::Consultants => "@",
        MenuId::Cases => "▣",
        MenuId::Compliance => "✓",
        MenuId::HelpCenter => "?",
        MenuId::Settings => "≡",
    }
}

/// 一级菜单标签
fn entry_label(id: MenuId) -> &'static str {
    let texts = t();
    match id {
        MenuId::DataBoard => texts.nav.data_board,
        MenuId::MarketingPlan => texts.nav.marketing_plan,
        MenuId::Consultants => texts.nav.consultants,
        MenuId::Cases => texts.nav.cases,
        MenuId::Compliance => texts.nav.compliance,
        MenuId::HelpCenter => texts.nav.help_center,
        MenuId::Settings => texts.nav.settings,
    }
}

/// 二级链接标签
fn view_label(view: ViewId) -> &'static str {
    let texts = t();
    match view {
        ViewId::RealTime => texts.views.real_time,
        ViewId::Comparison => texts.views.comparison,
        ViewId::MarketReport => texts.views.market_report,
        ViewId::MarketSizeChart => texts.views.market_size_chart,
        ViewId::MarketingPlan => texts.views.marketing_plan,
        ViewId::FindConsultant => texts.views.find_consultant,
        ViewId::MyConsultant => texts.views.my_consultant,
        ViewId::CaseReport => texts.views.case_report,
        ViewId::OverseasCases => texts.views.overseas_cases,
        ViewId::HashValue => texts.views.hash_value,
        ViewId::CulturalAdaptation => texts.views.cultural_adaptation,
        ViewId::HelpCenter => texts.views.help_center,
        ViewId::Settings => texts.views.settings,
    }
}
