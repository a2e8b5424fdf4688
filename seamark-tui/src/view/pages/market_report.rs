//! 「市场调研报告」页视图

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// 报告章节（演示数据）：(标题, 正文行)
const SECTIONS: [(&str, [&str; 3]); 4] = [
    (
        "一、市场概况",
        [
            "东南亚六国数字广告市场保持高速增长，2024 年整体规模预计 452 亿美元。",
            "移动端占比超过八成，短视频与直播电商是增长最快的两个场景，",
            "年增速分别为 41% 与 58%。",
        ],
    ),
    (
        "二、用户画像",
        [
            "核心消费人群集中在 18-34 岁，对价格敏感但愿意为本地化体验付费。",
            "社交平台是第一信息来源，KOL 推荐对购买决策的影响高于品牌广告。",
            "印尼与菲律宾用户的日均短视频时长已超过两小时。",
        ],
    ),
    (
        "三、渠道格局",
        [
            "头部电商平台集中度继续上升，但社交电商分走约两成新增交易。",
            "搜索广告成本一年内上涨 23%，短视频信息流成本仍处洼地。",
            "线下商超联动线上履约的混合模式在泰国增长显著。",
        ],
    ),
    (
        "四、进入建议",
        [
            "首选印尼、泰国作为试点市场，以短视频内容撬动自然流量。",
            "素材本地化投入应不低于媒介预算的 15%。",
            "斋月、双十二等本地大促节点需提前两个月锁定资源。",
        ],
    ),
];

/// 页面内容行，行数供滚动上限计算使用
pub fn lines() -> Vec<Line<'static>> {
    let c = colors();
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  东南亚市场调研报告（2024 年版）",
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (title, body) in SECTIONS {
        lines.push(Line::from(Span::styled(
            format!("  {title}"),
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        )));
        for text in body {
            lines.push(Line::from(Span::styled(
                format!("    {text}"),
                Style::default().fg(c.fg),
            )));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "  完整数据表可在数据看板导出",
        Style::default().fg(c.muted),
    )));
    lines
}

/// 渲染调研报告页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(lines()).scroll((app.content_scroll, 0));
    frame.render_widget(paragraph, area);
}
