//! 国际化（i18n）模块
//!
//! 文案按语言分文件维护，运行时通过全局原子变量切换。
//! 默认语言为简体中文，可在设置页切换为英文。

mod en_us;
mod keys;
mod zh_cn;

use std::sync::atomic::{AtomicUsize, Ordering};

pub use keys::Translations;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 简体中文
    #[default]
    ZhCn = 0,
    /// 英文
    EnUs = 1,
}

static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0);

impl Language {
    /// 配置文件中使用的语言代码
    pub const fn code(self) -> &'static str {
        match self {
            Self::ZhCn => "zh-CN",
            Self::EnUs => "en-US",
        }
    }

    /// 语言的自称（用于设置页展示）
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ZhCn => "简体中文",
            Self::EnUs => "English",
        }
    }

    /// 从语言代码解析，无法识别时返回 `None`
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "zh-CN" | "zh" => Some(Self::ZhCn),
            "en-US" | "en" => Some(Self::EnUs),
            _ => None,
        }
    }

    /// 下一个语言（循环）
    pub const fn next(self) -> Self {
        match self {
            Self::ZhCn => Self::EnUs,
            Self::EnUs => Self::ZhCn,
        }
    }

    /// 上一个语言（循环）
    pub const fn prev(self) -> Self {
        self.next()
    }
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    CURRENT_LANGUAGE.store(lang as usize, Ordering::Relaxed);
}

/// 获取当前语言
pub fn current_language() -> Language {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => Language::EnUs,
        _ => Language::ZhCn,
    }
}

/// 获取当前语言的翻译表
pub fn t() -> &'static Translations {
    match current_language() {
        Language::ZhCn => &zh_cn::TRANSLATIONS,
        Language::EnUs => &en_us::TRANSLATIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code_round_trip() {
        assert_eq!(Language::from_code(Language::ZhCn.code()), Some(Language::ZhCn));
        assert_eq!(Language::from_code(Language::EnUs.code()), Some(Language::EnUs));
        assert_eq!(Language::from_code("fr-FR"), None);
    }

    #[test]
    fn test_default_language_is_chinese() {
        assert_eq!(Language::default(), Language::ZhCn);
    }
}
