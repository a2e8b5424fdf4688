//! 「帮助中心」页视图

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// 常见问题（演示数据）：(问题, 回答)
const FAQS: [(&str, &str); 4] = [
    ("如何更换对接顾问？", "在「我的顾问」联系人列表里选择新顾问即可，历史沟通记录会保留。"),
    ("哈希校验失败怎么办？", "先确认上传的是原始导出文件，重新生成后仍不一致请联系客服。"),
    ("检测报告多久更新一次？", "文化适配规则库每月更新，已出具的报告不会自动变更。"),
    ("发票如何申请？", "在服务订单页提交开票信息，三个工作日内开出。"),
];

/// 页面内容行，行数供滚动上限计算使用
pub fn lines() -> Vec<Line<'static>> {
    let c = colors();
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  常见问题",
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (question, answer) in FAQS {
        lines.push(Line::from(vec![
            Span::styled("  Q  ", Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)),
            Span::styled(question, Style::default().fg(c.fg).add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("  A  ", Style::default().fg(c.muted)),
            Span::styled(answer, Style::default().fg(c.muted)),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "  客服邮箱 support@seamark.example · 工作日 9:00-18:00 在线",
        Style::default().fg(c.muted),
    )));
    lines
}

/// 渲染帮助中心页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(lines()).scroll((app.content_scroll, 0));
    frame.render_widget(paragraph, area);
}
