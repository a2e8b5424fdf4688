//! 「实时数据」页视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 指标卡（演示数据）：(名称, 数值, 环比)
const METRICS: [(&str, &str, &str); 4] = [
    ("今日曝光", "128,904", "+12%"),
    ("点击量", "23,481", "+8%"),
    ("新增线索", "312", "+15%"),
    ("咨询会话", "96", "-3%"),
];

/// 渲染实时数据页
pub fn render(_app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    // 两排指标卡 + 底部刷新说明
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // 上排指标卡
            Constraint::Length(5), // 下排指标卡
            Constraint::Min(1),    // 刷新说明
        ])
        .split(area);

    render_metric_row(frame, layout[0], &METRICS[0..2]);
    render_metric_row(frame, layout[1], &METRICS[2..4]);

    let updated = chrono::Local::now().format("%H:%M:%S").to_string();
    let footer = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  更新时间 {updated} · 数据每 5 分钟自动刷新"),
            Style::default().fg(c.muted),
        )),
    ]);
    frame.render_widget(footer, layout[2]);
}

/// 渲染一排两张指标卡
fn render_metric_row(frame: &mut Frame, area: Rect, metrics: &[(&str, &str, &str)]) {
    let c = colors();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (i, (name, value, delta)) in metrics.iter().enumerate() {
        let delta_color = if delta.starts_with('-') {
            c.error
        } else {
            c.success
        };

        let block = Block::default()
            .title(format!(" {name} "))
            .borders(Borders::ALL)
            .border_style(Styles::border());

        let content = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(
                    format!("  {value}"),
                    Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(*delta, Style::default().fg(delta_color)),
            ]),
            Line::from(Span::styled("  较昨日", Style::default().fg(c.muted))),
        ])
        .block(block);

        frame.render_widget(content, columns[i]);
    }
}
