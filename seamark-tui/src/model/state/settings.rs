//! 设置页状态

use crate::i18n::{self, Language};

/// 主题
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// 深色
    #[default]
    Dark,
    /// 浅色
    Light,
}

impl Theme {
    /// 全局主题索引（`view::theme` 使用）
    pub const fn index(self) -> u8 {
        match self {
            Self::Dark => 0,
            Self::Light => 1,
        }
    }

    /// 配置文件中的主题名
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// 从配置的主题名解析
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    const fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// 设置项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingItem {
    Theme,
    Language,
}

impl SettingItem {
    /// 设置页展示顺序
    pub const ALL: [Self; 2] = [Self::Theme, Self::Language];
}

/// 设置页状态
#[derive(Debug, Default)]
pub struct SettingsState {
    /// 当前选中的设置项下标
    pub selected: usize,
    /// 当前主题
    pub theme: Theme,
    /// 当前语言
    pub language: Language,
}

impl SettingsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_previous(&mut self) {
        let len = SettingItem::ALL.len();
        self.selected = self.selected.checked_sub(1).unwrap_or(len - 1);
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % SettingItem::ALL.len();
    }

    /// 当前选中的设置项
    pub fn current_item(&self) -> SettingItem {
        SettingItem::ALL[self.selected % SettingItem::ALL.len()]
    }

    /// 当前项切到下一个取值，语言变化立即生效
    pub fn toggle_next(&mut self) {
        match self.current_item() {
            SettingItem::Theme => self.theme = self.theme.next(),
            SettingItem::Language => {
                self.language = self.language.next();
                i18n::set_language(self.language);
            }
        }
    }

    /// 当前项切到上一个取值（两个取值的设置项正反向等价）
    pub fn toggle_previous(&mut self) {
        match self.current_item() {
            SettingItem::Theme => self.theme = self.theme.next(),
            SettingItem::Language => {
                self.language = self.language.prev();
                i18n::set_language(self.language);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_name_round_trip() {
        assert_eq!(Theme::from_name(Theme::Dark.name()), Some(Theme::Dark));
        assert_eq!(Theme::from_name(Theme::Light.name()), Some(Theme::Light));
        assert_eq!(Theme::from_name("sepia"), None);
    }

    #[test]
    fn test_selection_wraps_both_ways() {
        let mut state = SettingsState::new();
        state.select_previous();
        assert_eq!(state.current_item(), SettingItem::Language);
        state.select_next();
        assert_eq!(state.current_item(), SettingItem::Theme);
    }

    #[test]
    fn test_toggle_theme_cycles() {
        let mut state = SettingsState::new();
        state.toggle_next();
        assert_eq!(state.theme, Theme::Light);
        state.toggle_next();
        assert_eq!(state.theme, Theme::Dark);
    }

    #[test]
    fn test_toggle_language_applies_globally() {
        let mut state = SettingsState::new();
        state.select_next();
        let before = state.language;
        state.toggle_next();
        assert_ne!(state.language, before);
        assert_eq!(i18n::current_language(), state.language);
        // 还原全局语言，避免影响其他用例
        state.toggle_next();
        assert_eq!(state.language, before);
    }
}
