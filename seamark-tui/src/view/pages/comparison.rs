//! 「历史方案对比」页视图
//!
//! 应用启动后的默认视图。

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// 对比项（演示数据）：(指标, 2023 方案, 2024 方案)
const ROWS: [(&str, &str, &str); 6] = [
    ("总预算", "280 万", "420 万"),
    ("主投市场", "新加坡、马来西亚", "印尼、泰国、越南"),
    ("投放渠道", "搜索 + 展示广告", "短视频 + 直播 + KOL"),
    ("内容策略", "中文素材直译", "本地团队改写"),
    ("平均转化率", "1.8%", "3.4%"),
    ("ROI", "1 : 2.1", "1 : 3.6"),
];

/// 页面内容行，行数供滚动上限计算使用
pub fn lines() -> Vec<Line<'static>> {
    let c = colors();
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  2023 → 2024 方案对比",
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (metric, last_year, this_year) in ROWS {
        lines.push(Line::from(Span::styled(
            format!("  {metric}"),
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(vec![
            Span::styled("    2023  ", Style::default().fg(c.muted)),
            Span::styled(last_year, Style::default().fg(c.muted)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("    2024  ", Style::default().fg(c.muted)),
            Span::styled(this_year, Style::default().fg(c.success)),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "  口径说明：转化率按全渠道线索口径统计",
        Style::default().fg(c.muted),
    )));
    lines
}

/// 渲染对比页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(lines()).scroll((app.content_scroll, 0));
    frame.render_widget(paragraph, area);
}
