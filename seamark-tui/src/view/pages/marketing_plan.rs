//! 「营销方案」页视图

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// 出海营销五步法（演示数据）：(阶段, 说明)
const STEPS: [(&str, &str); 5] = [
    ("市场洞察", "圈定目标国家，完成竞品与人群调研"),
    ("定位与信息", "确定品牌主张和本地化信息框架"),
    ("渠道组合", "按预算配比搜索、社媒与达人渠道"),
    ("落地执行", "素材本地化、投放排期与 A/B 测试"),
    ("复盘迭代", "按周复盘数据，滚动调整预算分配"),
];

/// 页面内容行，行数供滚动上限计算使用
pub fn lines() -> Vec<Line<'static>> {
    let c = colors();
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  出海营销五步法",
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (i, (stage, detail)) in STEPS.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}. ", i + 1),
                Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
            ),
            Span::styled(*stage, Style::default().fg(c.fg).add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("     {detail}"),
            Style::default().fg(c.muted),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "  每个阶段配有标准交付物模板，可向顾问索取",
        Style::default().fg(c.muted),
    )));
    lines
}

/// 渲染营销方案页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(lines()).scroll((app.content_scroll, 0));
    frame.render_widget(paragraph, area);
}
