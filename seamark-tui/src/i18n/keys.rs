//! 翻译键定义
//!
//! 界面文案的结构化定义，`zh_cn` 与 `en_us` 按此结构提供翻译。
//! 页面内的演示数据（顾问名单、聊天记录等）不属于界面文案，
//! 不进入翻译表。

/// 顶层翻译表
pub struct Translations {
    pub common: CommonTexts,
    pub hints: HintTexts,
    pub nav: NavTexts,
    pub views: ViewTexts,
    pub find_consultant: FindConsultantTexts,
    pub my_consultant: MyConsultantTexts,
    pub hash_value: HashValueTexts,
    pub cultural: CulturalTexts,
    pub settings: SettingsTexts,
}

/// 通用文案
pub struct CommonTexts {
    pub app_name: &'static str,
    pub saved: &'static str,
}

/// 状态栏快捷键提示的动作名
pub struct HintTexts {
    pub navigate: &'static str,
    pub expand_or_open: &'static str,
    pub collapse: &'static str,
    pub switch_panel: &'static str,
    pub scroll: &'static str,
    pub switch_column: &'static str,
    pub select: &'static str,
    pub adjust: &'static str,
    pub confirm: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

/// 侧边栏菜单文案
pub struct NavTexts {
    pub title: &'static str,
    pub data_board: &'static str,
    pub marketing_plan: &'static str,
    pub consultants: &'static str,
    pub cases: &'static str,
    pub compliance: &'static str,
    pub help_center: &'static str,
    pub settings: &'static str,
}

/// 各视图的标题
///
/// `case_report` 是菜单里的链接名，`case_library` 是对应页面的标题，
/// 两者措辞不同，所以分成两个键。
pub struct ViewTexts {
    pub real_time: &'static str,
    pub comparison: &'static str,
    pub market_report: &'static str,
    pub market_size_chart: &'static str,
    pub marketing_plan: &'static str,
    pub find_consultant: &'static str,
    pub my_consultant: &'static str,
    pub case_report: &'static str,
    pub case_library: &'static str,
    pub overseas_cases: &'static str,
    pub hash_value: &'static str,
    pub cultural_adaptation: &'static str,
    pub help_center: &'static str,
    pub settings: &'static str,
}

/// 「寻找顾问」页文案
pub struct FindConsultantTexts {
    pub filter_title: &'static str,
    pub market_label: &'static str,
    pub industry_label: &'static str,
    pub budget_label: &'static str,
    pub submit: &'static str,
    pub results_title: &'static str,
    pub banner_title: &'static str,
    pub banner_line1: &'static str,
    pub banner_line2: &'static str,
    pub feed_title: &'static str,
}

/// 「我的顾问」页文案
pub struct MyConsultantTexts {
    pub contacts_title: &'static str,
    pub online: &'static str,
    pub input_placeholder: &'static str,
}

/// 「哈希值」页文案
pub struct HashValueTexts {
    pub upload_title: &'static str,
    pub verify_title: &'static str,
    pub empty_slot: &'static str,
    pub origin_label: &'static str,
    pub size_label: &'static str,
    pub result_title: &'static str,
    pub chain_label: &'static str,
    pub local_label: &'static str,
    pub match_ok: &'static str,
    pub generate: &'static str,
}

/// 「文化适配」页文案
pub struct CulturalTexts {
    pub upload_title: &'static str,
    pub upload_placeholder: &'static str,
    pub staged_note: &'static str,
    pub detect: &'static str,
    pub results_title: &'static str,
    pub suggestions_title: &'static str,
    pub regions_title: &'static str,
}

/// 设置页文案
pub struct SettingsTexts {
    pub theme_label: &'static str,
    pub theme_dark: &'static str,
    pub theme_light: &'static str,
    pub language_label: &'static str,
}
