//! 简体中文翻译

use super::keys::{
    CommonTexts, CulturalTexts, FindConsultantTexts, HashValueTexts, HintTexts, MyConsultantTexts,
    NavTexts, SettingsTexts, Translations, ViewTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Seamark 出海营销控制台",
        saved: "设置已保存",
    },
    hints: HintTexts {
        navigate: "导航",
        expand_or_open: "展开/打开",
        collapse: "收起",
        switch_panel: "切换焦点",
        scroll: "滚动",
        switch_column: "切换栏目",
        select: "选择",
        adjust: "调整",
        confirm: "确认",
        help: "帮助中心",
        quit: "退出",
    },
    nav: NavTexts {
        title: "功能菜单",
        data_board: "数据看板",
        marketing_plan: "营销方案",
        consultants: "咨询顾问",
        cases: "客户案例",
        compliance: "合规检测",
        help_center: "帮助中心",
        settings: "系统设置",
    },
    views: ViewTexts {
        real_time: "实时数据",
        comparison: "历史方案对比",
        market_report: "市场调研报告",
        market_size_chart: "市场规模图表",
        marketing_plan: "营销方案",
        find_consultant: "寻找顾问",
        my_consultant: "我的顾问",
        case_report: "成功案例",
        case_library: "案例库",
        overseas_cases: "海外体验案例",
        hash_value: "哈希值验证",
        cultural_adaptation: "文化适配检测",
        help_center: "帮助中心",
        settings: "系统设置",
    },
    find_consultant: FindConsultantTexts {
        filter_title: "筛选条件",
        market_label: "目标市场",
        industry_label: "所属行业",
        budget_label: "预算区间",
        submit: "搜索顾问",
        results_title: "顾问列表",
        banner_title: "专属服务",
        banner_line1: "新客户首次咨询免费",
        banner_line2: "三个工作日内出具初步方案",
        feed_title: "服务动态",
    },
    my_consultant: MyConsultantTexts {
        contacts_title: "联系人",
        online: "在线",
        input_placeholder: "输入消息…",
    },
    hash_value: HashValueTexts {
        upload_title: "素材文件",
        verify_title: "校验文件",
        empty_slot: "＋ 点击上传文件",
        origin_label: "来源",
        size_label: "大小",
        result_title: "哈希校验",
        chain_label: "链上记录",
        local_label: "本地计算",
        match_ok: "校验一致",
        generate: "生成哈希值",
    },
    cultural: CulturalTexts {
        upload_title: "素材上传",
        upload_placeholder: "点击选择待检测素材",
        staged_note: "已就绪，可开始检测",
        detect: "开始检测",
        results_title: "检测结果",
        suggestions_title: "优化建议",
        regions_title: "地区风险提示",
    },
    settings: SettingsTexts {
        theme_label: "主题",
        theme_dark: "深色",
        theme_light: "浅色",
        language_label: "语言 / Language",
    },
};
