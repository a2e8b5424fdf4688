//! 「我的顾问」页视图
//!
//! 联系人卡片画在状态里算好的点击区域上，渲染位置与
//! 鼠标命中范围天然一致。

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::state::CONTACTS;
use crate::model::App;
use crate::view::measure;
use crate::view::theme::{colors, Styles};

/// 渲染我的顾问页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let (contacts_column, chat_column) = measure::chat_columns(area);
    render_contacts(app, frame, contacts_column);
    render_chat(app, frame, chat_column);
}

/// 联系人面板
fn render_contacts(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", texts.my_consultant.contacts_title))
        .borders(Borders::ALL)
        .border_style(Styles::border());
    frame.render_widget(block, area);

    for contact in &CONTACTS {
        let Some(slot) = app.my_consultant.area_of(contact.id) else {
            continue;
        };
        let is_selected = app.my_consultant.selected == contact.id;

        let name_style = if is_selected {
            Style::default()
                .fg(c.selected_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
        };
        let title_style = if is_selected {
            Style::default().fg(c.selected_fg)
        } else {
            Style::default().fg(c.muted)
        };
        let base = if is_selected {
            Style::default().bg(c.selected_bg)
        } else {
            Style::default()
        };

        let card = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(format!(" {}  ", contact.name), name_style),
                Span::styled(
                    format!("● {}", texts.my_consultant.online),
                    Style::default().fg(c.success),
                ),
            ]),
            Line::from(Span::styled(format!(" {}", contact.title), title_style)),
        ])
        .style(base);

        frame.render_widget(card, slot);
    }
}

/// 会话面板：消息记录 + 输入框占位
fn render_chat(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let contact = app.my_consultant.selected_contact();

    let block = Block::default()
        .title(format!(" {} · {} ", contact.name, texts.my_consultant.online))
        .borders(Borders::ALL)
        .border_style(Styles::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // 消息记录
            Constraint::Length(1), // 输入框占位
        ])
        .split(inner);

    let mut lines = Vec::new();
    for (from_me, text) in app.my_consultant.chat_log() {
        let line = if *from_me {
            Line::from(Span::styled(
                format!("{text} ◂ "),
                Style::default().fg(c.highlight),
            ))
            .alignment(Alignment::Right)
        } else {
            Line::from(Span::styled(
                format!(" ▸ {text}"),
                Style::default().fg(c.fg),
            ))
        };
        lines.push(line);
        lines.push(Line::from(""));
    }
    let history = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(history, rows[0]);

    let input = Paragraph::new(Span::styled(
        format!(" {}", texts.my_consultant.input_placeholder),
        Style::default().fg(c.muted).add_modifier(Modifier::ITALIC),
    ));
    frame.render_widget(input, rows[1]);
}
