//! 应用根模型

use anyhow::Result;
use ratatui::layout::Rect;
use seamark_core::{LayoutSync, NavigationState};

use crate::backend::AppConfig;
use crate::i18n::{self, Language};
use crate::view::theme;

use super::focus::FocusPanel;
use super::sidebar::SidebarState;
use super::state::{
    CulturalState, FindConsultantState, HashValueState, MyConsultantState, SettingsState, Theme,
};

/// 状态栏消息的展示时长（tick 数，tick 周期 100ms）
const STATUS_TTL_TICKS: u8 = 30;

/// 应用根模型
pub struct App {
    /// 是否退出主循环
    pub should_quit: bool,
    /// 当前聚焦的面板
    pub focus: FocusPanel,
    /// 终端尺寸（列，行）
    pub viewport: (u16, u16),
    /// 菜单与视图切换状态
    pub nav: NavigationState,
    /// 头部与吸顶高度的同步值
    pub layout: LayoutSync,
    /// 侧边栏光标
    pub sidebar: SidebarState,
    /// 逐行滚动页面共用的滚动位置
    pub content_scroll: u16,
    /// 状态栏消息
    pub status_message: Option<String>,
    status_ticks: u8,
    /// 「寻找顾问」页状态
    pub find_consultant: FindConsultantState,
    /// 「我的顾问」页状态
    pub my_consultant: MyConsultantState,
    /// 「哈希值」页状态
    pub hash_value: HashValueState,
    /// 「文化适配」页状态
    pub cultural: CulturalState,
    /// 设置页状态
    pub settings: SettingsState,
}

impl App {
    /// 按配置创建应用，同时应用语言与主题的全局设置
    pub fn new(config: &AppConfig, viewport: (u16, u16)) -> Result<Self> {
        let language = Language::from_code(&config.language).unwrap_or_default();
        i18n::set_language(language);
        let initial_theme = Theme::from_name(&config.theme).unwrap_or_default();
        theme::set_theme_index(initial_theme.index());

        let mut settings = SettingsState::new();
        settings.theme = initial_theme;
        settings.language = language;

        Ok(Self {
            should_quit: false,
            focus: FocusPanel::default(),
            viewport,
            nav: NavigationState::standard()?,
            layout: LayoutSync::new(),
            sidebar: SidebarState::new(),
            content_scroll: 0,
            status_message: None,
            status_ticks: 0,
            find_consultant: FindConsultantState::new(),
            my_consultant: MyConsultantState::new(),
            hash_value: HashValueState::new(),
            cultural: CulturalState::new(),
            settings,
        })
    }

    /// 终端整体区域
    pub fn viewport_rect(&self) -> Rect {
        Rect::new(0, 0, self.viewport.0, self.viewport.1)
    }

    /// 设置状态栏消息，数秒后自动消失
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_ticks = STATUS_TTL_TICKS;
    }

    /// 立即清除状态栏消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_ticks = 0;
    }

    /// 每 tick 调用一次，消息到期后清除
    pub fn tick_status(&mut self) {
        if self.status_ticks > 0 {
            self.status_ticks -= 1;
            if self.status_ticks == 0 {
                self.status_message = None;
            }
        }
    }
}
