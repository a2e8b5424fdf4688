//! 「文化适配」页视图
//!
//! 上半部是上传区和检测按钮，下半部的结果区只在检测后出现，
//! 四张结果卡片按 tick 进度逐张画出。区域划分出自
//! `measure::cultural_areas`，与鼠标命中一致。

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::state::{
    CulturalFocus, CULTURAL_FILE_NAME, CULTURAL_REGIONS, CULTURAL_SUGGESTIONS, RESULT_CARDS,
};
use crate::model::App;
use crate::view::measure;
use crate::view::theme::{colors, Styles};

/// 渲染文化适配页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let areas = measure::cultural_areas(area);

    render_upload(app, frame, areas.upload);
    render_detect_button(app, frame, areas.detect);

    if app.cultural.results_shown {
        render_cards(app, frame, areas.cards);
        render_suggestions(frame, areas.suggestions);
        render_regions(frame, areas.regions);
    }
}

/// 素材上传区
fn render_upload(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let is_focused = app.cultural.focused == CulturalFocus::Upload;

    let border_style = if is_focused {
        Styles::border_focused()
    } else {
        Styles::border()
    };
    let block = Block::default()
        .title(format!(" {} ", texts.cultural.upload_title))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = if app.cultural.file_staged {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {CULTURAL_FILE_NAME}"),
                Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("  {}", texts.cultural.staged_note),
                Style::default().fg(c.success),
            )),
        ]
    } else {
        vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                format!("  {}", texts.cultural.upload_placeholder),
                Style::default().fg(c.muted),
            )),
        ]
    };
    frame.render_widget(Paragraph::new(lines), inner);
}

/// 开始检测按钮
fn render_detect_button(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let is_focused = app.cultural.focused == CulturalFocus::Detect;

    let border_style = if is_focused {
        Styles::border_focused()
    } else {
        Styles::border()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", texts.cultural.detect),
        Style::default()
            .fg(c.selected_fg)
            .bg(c.highlight)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(label, inner);
}

/// 结果卡片：2x2 网格，按显示进度逐张出现
fn render_cards(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", texts.cultural.results_title))
        .borders(Borders::ALL)
        .border_style(Styles::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    let slots = [top[0], top[1], bottom[0], bottom[1]];

    let visible = app.cultural.visible_cards();
    for (i, (dimension, verdict)) in RESULT_CARDS.iter().enumerate().take(visible) {
        let card = Block::default()
            .title(format!(" {dimension} "))
            .borders(Borders::ALL)
            .border_style(Styles::border());
        let card_inner = card.inner(slots[i]);
        frame.render_widget(card, slots[i]);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(" {verdict}"),
                Style::default().fg(c.fg),
            )))
            .wrap(Wrap { trim: false }),
            card_inner,
        );
    }
}

/// 优化建议列表，每条一行
fn render_suggestions(frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", texts.cultural.suggestions_title))
        .borders(Borders::ALL)
        .border_style(Styles::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = CULTURAL_SUGGESTIONS
        .iter()
        .map(|s| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(c.highlight)),
                Span::styled(*s, Style::default().fg(c.fg)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

/// 地区风险提示，每条一行
fn render_regions(frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", texts.cultural.regions_title))
        .borders(Borders::ALL)
        .border_style(Styles::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = CULTURAL_REGIONS
        .iter()
        .map(|(region, note)| {
            Line::from(vec![
                Span::styled(
                    format!("{region}  "),
                    Style::default().fg(c.warning).add_modifier(Modifier::BOLD),
                ),
                Span::styled(*note, Style::default().fg(c.muted)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}
