//! 主布局渲染

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
    Frame,
};
use seamark_core::ViewId;

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::measure;
use super::pages;
use super::theme::Styles;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    // 区域划分与鼠标命中、高度探针共用同一套测量函数
    let areas = measure::main_areas(frame.area());

    // 渲染头部
    components::header::render(app, frame, areas.header);

    // 渲染左侧导航
    components::navigation::render(app, frame, areas.sidebar);

    // 渲染右侧内容
    render_page_content(app, frame, areas.page);

    // 渲染状态栏
    components::statusbar::render(app, frame, areas.status);
}

/// 根据当前视图渲染内容区
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();

    // 内容区域的边框
    let is_focused = app.focus.is_content();
    let border_style = if is_focused {
        Styles::border_focused()
    } else {
        Styles::border()
    };

    // 请求的视图未挂载时只画空白面板
    let Some(view) = app.nav.current_view() else {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        frame.render_widget(block, area);
        return;
    };

    // 根据当前视图获取 i18n 标题
    let page_title = match view {
        ViewId::RealTime => texts.views.real_time,
        ViewId::Comparison => texts.views.comparison,
        ViewId::MarketReport => texts.views.market_report,
        ViewId::MarketSizeChart => texts.views.market_size_chart,
        ViewId::MarketingPlan => texts.views.marketing_plan,
        ViewId::FindConsultant => texts.views.find_consultant,
        ViewId::MyConsultant => texts.views.my_consultant,
        // 菜单里叫「成功案例」，页面标题沿用「案例库」
        ViewId::CaseReport => texts.views.case_library,
        ViewId::OverseasCases => texts.views.overseas_cases,
        ViewId::HashValue => texts.views.hash_value,
        ViewId::CulturalAdaptation => texts.views.cultural_adaptation,
        ViewId::HelpCenter => texts.views.help_center,
        ViewId::Settings => texts.views.settings,
    };

    let block = Block::default()
        .title(format!(" {} ", page_title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // 根据当前视图渲染具体内容
    match view {
        ViewId::RealTime => pages::real_time::render(app, frame, inner_area),
        ViewId::Comparison => pages::comparison::render(app, frame, inner_area),
        ViewId::MarketReport => pages::market_report::render(app, frame, inner_area),
        ViewId::MarketSizeChart => pages::market_size_chart::render(app, frame, inner_area),
        ViewId::MarketingPlan => pages::marketing_plan::render(app, frame, inner_area),
        ViewId::FindConsultant => pages::find_consultant::render(app, frame, inner_area),
        ViewId::MyConsultant => pages::my_consultant::render(app, frame, inner_area),
        ViewId::CaseReport => pages::case_report::render(app, frame, inner_area),
        ViewId::OverseasCases => pages::overseas_cases::render(app, frame, inner_area),
        ViewId::HashValue => pages::hash_value::render(app, frame, inner_area),
        ViewId::CulturalAdaptation => pages::cultural_adaptation::render(app, frame, inner_area),
        ViewId::HelpCenter => pages::help_center::render(app, frame, inner_area),
        ViewId::Settings => pages::settings::render(app, frame, inner_area),
    }
}
