//! 案例库页视图
//!
//! 菜单里的链接叫「成功案例」，页面标题沿用「案例库」。

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// 成功案例（演示数据）：(客户, 行业, 地区, 成果)
const CASES: [(&str, &str, &str, &str); 4] = [
    ("某新茶饮品牌", "餐饮连锁", "印尼、菲律宾", "六个月开出 37 家门店，线上会员 82 万"),
    ("某智能家居厂商", "消费电子", "泰国、越南", "大促期间类目销量第一，ROI 1 : 4.2"),
    ("某母婴电商", "跨境零售", "马来西亚", "本地化改版后转化率提升 2.1 倍"),
    ("某手游发行商", "游戏", "中东、北非", "上线首月下载破 500 万，登顶 12 国畅销榜"),
];

/// 页面内容行，行数供滚动上限计算使用
pub fn lines() -> Vec<Line<'static>> {
    let c = colors();
    let mut lines = vec![Line::from("")];

    for (client, industry, region, outcome) in CASES {
        lines.push(Line::from(Span::styled(
            format!("  {client}"),
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("    {industry} · {region}"),
            Style::default().fg(c.muted),
        )));
        lines.push(Line::from(vec![
            Span::styled("    成果  ", Style::default().fg(c.muted)),
            Span::styled(outcome, Style::default().fg(c.success)),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "  更多案例可联系顾问获取完整版",
        Style::default().fg(c.muted),
    )));
    lines
}

/// 渲染案例库页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(lines()).scroll((app.content_scroll, 0));
    frame.render_widget(paragraph, area);
}
