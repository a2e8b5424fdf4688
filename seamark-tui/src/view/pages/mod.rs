//! 页面渲染
//!
//! 每个视图一个文件。逐行滚动的页面把内容行构建函数 `lines`
//! 公开出来，`update` 层据此计算滚动上限；固定布局的页面
//! 自己划分区域，不参与逐行滚动。

pub mod case_report;
pub mod comparison;
pub mod cultural_adaptation;
pub mod find_consultant;
pub mod hash_value;
pub mod help_center;
pub mod market_report;
pub mod market_size_chart;
pub mod marketing_plan;
pub mod my_consultant;
pub mod overseas_cases;
pub mod real_time;
pub mod settings;

use seamark_core::ViewId;

/// 逐行滚动页面的内容总行数，固定布局页面返回 0
pub fn scrollable_line_count(view: ViewId) -> usize {
    match view {
        ViewId::Comparison => comparison::lines().len(),
        ViewId::MarketReport => market_report::lines().len(),
        ViewId::MarketingPlan => marketing_plan::lines().len(),
        ViewId::CaseReport => case_report::lines().len(),
        ViewId::OverseasCases => overseas_cases::lines().len(),
        ViewId::HelpCenter => help_center::lines().len(),
        _ => 0,
    }
}
