//! 设置页面视图

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::state::Theme;
use crate::model::App;
use crate::view::theme::colors;

/// 设置项标签的对齐宽度（基于显示宽度）
const LABEL_WIDTH: usize = 18;

/// 渲染设置页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let settings = &app.settings;

    let theme_value = match settings.theme {
        Theme::Dark => texts.settings.theme_dark,
        Theme::Light => texts.settings.theme_light,
    };
    let language_value = settings.language.display_name();

    let lines = vec![
        Line::from(""),
        setting_row(texts.settings.theme_label, theme_value, settings.selected == 0),
        Line::from(""),
        setting_row(
            texts.settings.language_label,
            language_value,
            settings.selected == 1,
        ),
        Line::from(""),
        Line::from(""),
        // 操作提示
        Line::from(vec![
            Span::styled("  ↑↓", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!(" {} │ ", texts.hints.select),
                Style::default().fg(c.muted),
            ),
            Span::styled("←→", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!(" {}", texts.hints.adjust),
                Style::default().fg(c.muted),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

/// 渲染单行设置项，标签按显示宽度对齐
fn setting_row<'a>(label: &'a str, value: &'a str, is_selected: bool) -> Line<'a> {
    let c = colors();
    let prefix = if is_selected { " ▶ " } else { "   " };
    let padding = LABEL_WIDTH.saturating_sub(label.width());

    let label_style = if is_selected {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };
    let value_style = if is_selected {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.highlight)
    };
    // 未选中时用空白占位，保持与 ◀ ▶ 对齐
    let (left_arrow, right_arrow) = if is_selected { ("◀ ", " ▶") } else { ("  ", "  ") };

    Line::from(vec![
        Span::styled(prefix, label_style),
        Span::styled(label, label_style),
        Span::raw(format!("{:width$}", "", width = padding)),
        Span::styled(": ", Style::default().fg(c.muted)),
        Span::styled(left_arrow, Style::default().fg(Color::Yellow)),
        Span::styled(value, value_style),
        Span::styled(right_arrow, Style::default().fg(Color::Yellow)),
    ])
}
