//! 顶部头部组件
//!
//! 头部高度由 `measure::header_height` 按终端宽度决定，
//! 同一个值也会经高度探针写进布局同步参数。

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use seamark_core::{MenuId, ViewId};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染头部：应用名加时钟一行，面包屑一行
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let clock = chrono::Local::now().format("%H:%M").to_string();
    let title_line = Line::from(vec![
        Span::styled(
            texts.common.app_name,
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(clock, Style::default().fg(c.muted)),
    ]);
    let breadcrumb_line = Line::from(Span::styled(
        breadcrumb(app),
        Style::default().fg(c.muted),
    ));

    let paragraph = Paragraph::new(vec![title_line, breadcrumb_line]).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// 面包屑：激活的一级菜单 › 当前视图
fn breadcrumb(app: &App) -> String {
    let texts = t();
    let mut parts: Vec<&str> = Vec::new();

    if let Some(id) = app.nav.active_entry() {
        parts.push(match id {
            MenuId::DataBoard => texts.nav.data_board,
            MenuId::MarketingPlan => texts.nav.marketing_plan,
            MenuId::Consultants => texts.nav.consultants,
            MenuId::Cases => texts.nav.cases,
            MenuId::Compliance => texts.nav.compliance,
            MenuId::HelpCenter => texts.nav.help_center,
            MenuId::Settings => texts.nav.settings,
        });
    }

    if let Some(view) = app.nav.current_view() {
        parts.push(match view {
            ViewId::RealTime => texts.views.real_time,
            ViewId::Comparison => texts.views.comparison,
            ViewId::MarketReport => texts.views.market_report,
            ViewId::MarketSizeChart => texts.views.market_size_chart,
            ViewId::MarketingPlan => texts.views.marketing_plan,
            ViewId::FindConsultant => texts.views.find_consultant,
            ViewId::MyConsultant => texts.views.my_consultant,
            ViewId::CaseReport => texts.views.case_library,
            ViewId::OverseasCases => texts.views.overseas_cases,
            ViewId::HashValue => texts.views.hash_value,
            ViewId::CulturalAdaptation => texts.views.cultural_adaptation,
            ViewId::HelpCenter => texts.views.help_center,
            ViewId::Settings => texts.views.settings,
        });
    }

    parts.join(" › ")
}
