//! English translations

use super::keys::{
    CommonTexts, CulturalTexts, FindConsultantTexts, HashValueTexts, HintTexts, MyConsultantTexts,
    NavTexts, SettingsTexts, Translations, ViewTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Seamark Overseas Marketing Console",
        saved: "Settings saved",
    },
    hints: HintTexts {
        navigate: "Navigate",
        expand_or_open: "Expand/Open",
        collapse: "Collapse",
        switch_panel: "Switch focus",
        scroll: "Scroll",
        switch_column: "Switch column",
        select: "Select",
        adjust: "Adjust",
        confirm: "Confirm",
        help: "Help center",
        quit: "Quit",
    },
    nav: NavTexts {
        title: "Menu",
        data_board: "Data Board",
        marketing_plan: "Marketing Plan",
        consultants: "Consultants",
        cases: "Client Cases",
        compliance: "Compliance",
        help_center: "Help Center",
        settings: "Settings",
    },
    views: ViewTexts {
        real_time: "Real-Time Data",
        comparison: "Plan Comparison",
        market_report: "Market Research Report",
        market_size_chart: "Market Size Chart",
        marketing_plan: "Marketing Plan",
        find_consultant: "Find a Consultant",
        my_consultant: "My Consultant",
        case_report: "Success Stories",
        case_library: "Case Library",
        overseas_cases: "Overseas Cases",
        hash_value: "Hash Verification",
        cultural_adaptation: "Cultural Adaptation Check",
        help_center: "Help Center",
        settings: "Settings",
    },
    find_consultant: FindConsultantTexts {
        filter_title: "Filters",
        market_label: "Target market",
        industry_label: "Industry",
        budget_label: "Budget range",
        submit: "Search consultants",
        results_title: "Consultants",
        banner_title: "Premium Service",
        banner_line1: "First consultation free for new clients",
        banner_line2: "Draft plan delivered within 3 business days",
        feed_title: "Activity",
    },
    my_consultant: MyConsultantTexts {
        contacts_title: "Contacts",
        online: "Online",
        input_placeholder: "Type a message…",
    },
    hash_value: HashValueTexts {
        upload_title: "Source file",
        verify_title: "File to verify",
        empty_slot: "+ Click to upload",
        origin_label: "Origin",
        size_label: "Size",
        result_title: "Hash check",
        chain_label: "On-chain record",
        local_label: "Local digest",
        match_ok: "Match",
        generate: "Generate hash",
    },
    cultural: CulturalTexts {
        upload_title: "Upload material",
        upload_placeholder: "Click to pick a file for checking",
        staged_note: "Ready for detection",
        detect: "Run check",
        results_title: "Results",
        suggestions_title: "Suggestions",
        regions_title: "Regional risk notes",
    },
    settings: SettingsTexts {
        theme_label: "Theme",
        theme_dark: "Dark",
        theme_light: "Light",
        language_label: "Language",
    },
};
