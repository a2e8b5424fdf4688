//! 「寻找顾问」页视图
//!
//! 左右两栏各有一张吸顶卡片，卡片高度不同，两栏列表统一从
//! 同步后的吸顶高度（两张卡片高度的较大值）之后开始，矮的
//! 卡片下方留空垫齐。页面本身不滚动，两栏列表各自滚动。

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::state::{ConsultantColumn, CONSULTANTS, SERVICE_FEED};
use crate::model::App;
use crate::view::measure;
use crate::view::theme::{colors, Styles};

/// 渲染寻找顾问页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let (left, right) = measure::consultant_columns(area);
    let sticky_max = app.layout.params().sticky_max_h;

    render_left_column(app, frame, left, sticky_max);
    render_right_column(app, frame, right, sticky_max);
}

/// 左栏：吸顶筛选卡 + 顾问列表
fn render_left_column(app: &App, frame: &mut Frame, column: Rect, sticky_max: u16) {
    let texts = t();
    let c = colors();
    let is_focused = app.find_consultant.focused == ConsultantColumn::Left;

    // 列表区域先画，吸顶卡片后画盖在上面
    let list_area = measure::consultant_list_area(column, sticky_max);
    if list_area.height > 2 {
        let border_style = if is_focused {
            Styles::border_focused()
        } else {
            Styles::border()
        };
        let block = Block::default()
            .title(format!(" {} ", texts.find_consultant.results_title))
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(list_area);
        frame.render_widget(block, list_area);

        let mut lines = Vec::new();
        for profile in &CONSULTANTS {
            lines.push(Line::from(vec![
                Span::styled(
                    profile.name,
                    Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  · {}", profile.region), Style::default().fg(c.muted)),
            ]));
            lines.push(Line::from(vec![
                Span::styled(format!("  {} · ", profile.field), Style::default().fg(c.muted)),
                Span::styled(format!("{} 分", profile.rating), Style::default().fg(c.warning)),
            ]));
            lines.push(Line::from(""));
        }
        let list = Paragraph::new(lines).scroll((app.find_consultant.left_scroll, 0));
        frame.render_widget(list, inner);
    }

    // 吸顶的筛选卡
    let card_height = measure::search_card_height(column.width).min(column.height);
    let card_area = Rect {
        height: card_height,
        ..column
    };
    let card = Block::default()
        .title(format!(" {} ", texts.find_consultant.filter_title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.highlight));
    let card_inner = card.inner(card_area);
    frame.render_widget(card, card_area);

    let form = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                format!(" {}  ", texts.find_consultant.market_label),
                Style::default().fg(c.muted),
            ),
            Span::styled("东南亚", Style::default().fg(c.fg)),
        ]),
        Line::from(vec![
            Span::styled(
                format!(" {}  ", texts.find_consultant.industry_label),
                Style::default().fg(c.muted),
            ),
            Span::styled("快消品", Style::default().fg(c.fg)),
        ]),
        Line::from(vec![
            Span::styled(
                format!(" {}  ", texts.find_consultant.budget_label),
                Style::default().fg(c.muted),
            ),
            Span::styled("100-500 万", Style::default().fg(c.fg)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {} ", texts.find_consultant.submit),
            Style::default()
                .fg(c.selected_fg)
                .bg(c.highlight)
                .add_modifier(Modifier::BOLD),
        )),
    ]);
    frame.render_widget(form, card_inner);
}

/// 右栏：吸顶活动横幅 + 服务动态
fn render_right_column(app: &App, frame: &mut Frame, column: Rect, sticky_max: u16) {
    let texts = t();
    let c = colors();
    let is_focused = app.find_consultant.focused == ConsultantColumn::Right;

    let list_area = measure::consultant_list_area(column, sticky_max);
    if list_area.height > 2 {
        let border_style = if is_focused {
            Styles::border_focused()
        } else {
            Styles::border()
        };
        let block = Block::default()
            .title(format!(" {} ", texts.find_consultant.feed_title))
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(list_area);
        frame.render_widget(block, list_area);

        let mut lines = Vec::new();
        for item in SERVICE_FEED {
            lines.push(Line::from(vec![
                Span::styled("• ", Style::default().fg(c.highlight)),
                Span::styled(item, Style::default().fg(c.fg)),
            ]));
            lines.push(Line::from(""));
        }
        let list = Paragraph::new(lines).scroll((app.find_consultant.right_scroll, 0));
        frame.render_widget(list, inner);
    }

    // 吸顶的活动横幅
    let banner_height = measure::banner_height(column.width).min(column.height);
    let banner_area = Rect {
        height: banner_height,
        ..column
    };
    let banner = Block::default()
        .title(format!(" {} ", texts.find_consultant.banner_title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.warning));
    let banner_inner = banner.inner(banner_area);
    frame.render_widget(banner, banner_area);

    let promo = Paragraph::new(vec![
        Line::from(Span::styled(
            format!(" {}", texts.find_consultant.banner_line1),
            Style::default().fg(c.warning).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", texts.find_consultant.banner_line2),
            Style::default().fg(c.muted),
        )),
    ]);
    frame.render_widget(promo, banner_inner);
}
