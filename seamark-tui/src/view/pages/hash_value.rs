//! 「哈希值」页视图
//!
//! 左列两个上传槽位，右列校验结果与生成按钮。
//! 区域划分出自 `measure::hash_areas`，与鼠标命中一致。

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::state::{
    HashSlotFocus, DEMO_CHAIN_HASH, DEMO_FILE_NAME, DEMO_FILE_ORIGIN, DEMO_FILE_SIZE,
};
use crate::model::App;
use crate::view::measure;
use crate::view::theme::{colors, Styles};

/// 渲染哈希值页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let areas = measure::hash_areas(area);

    render_slot(
        frame,
        areas.upload,
        texts.hash_value.upload_title,
        app.hash_value.upload_filled,
        app.hash_value.focused == HashSlotFocus::Upload,
    );
    render_slot(
        frame,
        areas.verify,
        texts.hash_value.verify_title,
        app.hash_value.verify_filled,
        app.hash_value.focused == HashSlotFocus::Verify,
    );
    render_result(app, frame, areas.result);
    render_generate_button(app, frame, areas.generate);
}

/// 上传槽位：空槽显示提示，已填充显示演示文件信息
fn render_slot(frame: &mut Frame, area: Rect, title: &str, filled: bool, is_focused: bool) {
    let texts = t();
    let c = colors();

    let border_style = if is_focused {
        Styles::border_focused()
    } else {
        Styles::border()
    };
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = if filled {
        vec![
            Line::from(Span::styled(
                format!(" {DEMO_FILE_NAME}"),
                Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(" {}  {}", texts.hash_value.size_label, DEMO_FILE_SIZE),
                Style::default().fg(c.muted),
            )),
            Line::from(Span::styled(
                format!(" {}  {}", texts.hash_value.origin_label, DEMO_FILE_ORIGIN),
                Style::default().fg(c.muted),
            )),
        ]
    } else {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("   {}", texts.hash_value.empty_slot),
                Style::default().fg(c.muted),
            )),
        ]
    };

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// 校验结果卡：链上记录恒在，两个槽位都填充后给出本地计算值
fn render_result(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let both_filled = app.hash_value.upload_filled && app.hash_value.verify_filled;

    let block = Block::default()
        .title(format!(" {} ", texts.hash_value.result_title))
        .borders(Borders::ALL)
        .border_style(Styles::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {}", texts.hash_value.chain_label),
            Style::default().fg(c.muted),
        )),
        Line::from(Span::styled(
            format!(" {DEMO_CHAIN_HASH}"),
            Style::default().fg(c.fg),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", texts.hash_value.local_label),
            Style::default().fg(c.muted),
        )),
    ];
    if both_filled {
        lines.push(Line::from(Span::styled(
            format!(" {DEMO_CHAIN_HASH}"),
            Style::default().fg(c.fg),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" {} ", texts.hash_value.match_ok),
            Style::default()
                .fg(c.selected_fg)
                .bg(c.success)
                .add_modifier(Modifier::BOLD),
        )));
    } else {
        lines.push(Line::from(Span::styled(" —", Style::default().fg(c.muted))));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// 生成按钮
fn render_generate_button(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let is_focused = app.hash_value.focused == HashSlotFocus::Generate;

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
        format!(" {} ", texts.hash_value.generate),
        Style::default()
            .fg(c.selected_fg)
            .bg(c.highlight)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(label, inner);
}
