//! 「市场规模图表」页视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{BarChart, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// 年度市场规模（亿美元），2024 为预估值
const MARKET_SIZE: &[(&str, u64)] = &[
    ("2019", 182),
    ("2020", 210),
    ("2021", 268),
    ("2022", 321),
    ("2023", 389),
    ("2024", 452),
];

/// 渲染市场规模图表页
pub fn render(_app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // 柱状图
            Constraint::Length(2), // 图注
        ])
        .split(area);

    let chart = BarChart::default()
        .data(MARKET_SIZE)
        .bar_width(6)
        .bar_gap(2)
        .bar_style(Style::default().fg(c.highlight))
        .value_style(Style::default().fg(c.selected_fg).bg(c.highlight))
        .label_style(Style::default().fg(c.muted));
    frame.render_widget(chart, layout[0]);

    let caption = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "  东南亚数字营销市场规模（亿美元），2024 为预估值",
            Style::default().fg(c.muted),
        )),
    ]);
    frame.render_widget(caption, layout[1]);
}
