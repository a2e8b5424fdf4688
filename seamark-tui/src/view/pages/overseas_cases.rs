//! 「海外体验案例」页视图

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// 线下体验案例（演示数据）：(城市, 项目, 亮点)
const CASES: [(&str, &str, &str); 3] = [
    ("新加坡", "品牌快闪体验店", "两周接待 1.2 万人次，社媒曝光 600 万"),
    ("曼谷", "泼水节联名活动", "联名素材全网播放 2300 万次"),
    ("迪拜", "商超路演", "现场转化率 18%，复购率高于本地均值"),
];

/// 页面内容行，行数供滚动上限计算使用
pub fn lines() -> Vec<Line<'static>> {
    let c = colors();
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  线下体验项目精选",
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (city, project, highlight) in CASES {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {city}  "),
                Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
            ),
            Span::styled(project, Style::default().fg(c.fg).add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {highlight}"),
            Style::default().fg(c.muted),
        )));
        lines.push(Line::from(""));
    }

    lines
}

/// 渲染海外体验案例页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(lines()).scroll((app.content_scroll, 0));
    frame.render_widget(paragraph, area);
}
