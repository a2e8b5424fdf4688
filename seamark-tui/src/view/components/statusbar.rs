//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use seamark_core::ViewId;

use crate::i18n::t;
use crate::model::{App, FocusPanel};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前焦点和视图生成快捷键提示
    let hints = get_hints(app);

    // 构建状态栏内容
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let content = Line::from(spans);
    let paragraph = Paragraph::new(content).style(Styles::statusbar());

    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let mut hints = Vec::new();

    // 全局快捷键
    hints.push(("Tab", texts.hints.switch_panel));

    match app.focus {
        FocusPanel::Navigation => {
            hints.push(("↑↓", texts.hints.navigate));
            hints.push(("Enter", texts.hints.expand_or_open));
            hints.push(("Esc", texts.hints.collapse));
        }
        FocusPanel::Content => match app.nav.current_view() {
            Some(ViewId::FindConsultant) => {
                hints.push(("↑↓", texts.hints.scroll));
                hints.push(("←→", texts.hints.switch_column));
            }
            Some(ViewId::MyConsultant) => {
                hints.push(("↑↓", texts.hints.select));
            }
            Some(ViewId::HashValue | ViewId::CulturalAdaptation) => {
                hints.push(("↑↓", texts.hints.select));
                hints.push(("Enter", texts.hints.confirm));
            }
            Some(ViewId::Settings) => {
                hints.push(("↑↓", texts.hints.select));
                hints.push(("←→", texts.hints.adjust));
            }
            Some(_) => {
                hints.push(("↑↓", texts.hints.scroll));
            }
            None => {}
        },
    }

    hints.push(("Alt+h", texts.hints.help));
    hints.push(("q", texts.hints.quit));

    hints
}
