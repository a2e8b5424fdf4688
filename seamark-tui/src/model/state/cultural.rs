//! 「文化适配」页状态
//!
//! 点击「开始检测」后结果区整体出现，四张结果卡片按 tick
//! 逐张显示。切换到其他视图会隐藏结果，暂存的素材保留，
//! 再次检测时重新播放逐张显示。

/// 暂存素材的演示文件名
pub const CULTURAL_FILE_NAME: &str = "斋月主题海报_v3.png";

/// 检测结果卡片（演示数据）：(维度, 结论)
pub const RESULT_CARDS: [(&str, &str); 4] = [
    ("宗教习俗", "检测到 2 处需复核的表述"),
    ("色彩禁忌", "主视觉用色符合当地习惯"),
    ("语言表达", "口号直译存在歧义，建议意译"),
    ("节日时点", "投放档期与当地斋月重叠"),
];

/// 优化建议（演示数据）
pub const CULTURAL_SUGGESTIONS: [&str; 3] = [
    "将口号换成当地谚语的说法",
    "避开斋月白天投放餐饮类素材",
    "为主图人物增加当地服饰版本",
];

/// 地区风险提示（演示数据）：(地区, 提示)
pub const CULTURAL_REGIONS: [(&str, &str); 3] = [
    ("印尼", "宗教相关表述需本地团队复核"),
    ("泰国", "涉及王室元素一律不可使用"),
    ("越南", "地图素材需使用官方版本"),
];

/// 相邻两张结果卡片出现的间隔（tick 数，tick 周期 100ms）
const REVEAL_STEP_TICKS: u16 = 2;

/// 最后一张卡片出现的 tick（(卡片数 - 1) * 间隔）
const REVEAL_DONE_TICK: u16 = 6;

/// 焦点所在的控件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CulturalFocus {
    /// 素材上传区
    #[default]
    Upload,
    /// 开始检测按钮
    Detect,
}

impl CulturalFocus {
    const fn other(self) -> Self {
        match self {
            Self::Upload => Self::Detect,
            Self::Detect => Self::Upload,
        }
    }
}

/// 页面状态
#[derive(Debug, Default)]
pub struct CulturalState {
    /// 焦点所在控件
    pub focused: CulturalFocus,
    /// 是否已暂存素材
    pub file_staged: bool,
    /// 检测结果是否展示中
    pub results_shown: bool,
    /// 自点击检测起经过的 tick 数
    reveal_tick: u16,
}

impl CulturalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.other();
    }

    pub fn focus_previous(&mut self) {
        self.focused = self.focused.other();
    }

    /// 暂存素材（重复点击保持已暂存状态）
    pub fn stage_file(&mut self) {
        self.file_staged = true;
    }

    /// 开始检测：展示结果区并重播卡片逐张显示
    pub fn detect(&mut self) {
        self.results_shown = true;
        self.reveal_tick = 0;
    }

    /// 离开页面时隐藏结果，素材保留
    pub fn hide_results(&mut self) {
        self.results_shown = false;
        self.reveal_tick = 0;
    }

    /// 每 tick 调用一次，推进卡片显示进度
    pub fn on_tick(&mut self) {
        if self.results_shown && self.reveal_tick < REVEAL_DONE_TICK {
            self.reveal_tick += 1;
        }
    }

    /// 当前可见的结果卡片数
    pub fn visible_cards(&self) -> usize {
        if !self.results_shown {
            return 0;
        }
        let revealed = usize::from(self.reveal_tick / REVEAL_STEP_TICKS) + 1;
        revealed.min(RESULT_CARDS.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_reveal_one_by_one() {
        let mut state = CulturalState::new();
        assert_eq!(state.visible_cards(), 0);

        state.detect();
        assert_eq!(state.visible_cards(), 1);

        state.on_tick();
        state.on_tick();
        assert_eq!(state.visible_cards(), 2);

        for _ in 0..20 {
            state.on_tick();
        }
        assert_eq!(state.visible_cards(), RESULT_CARDS.len());
    }

    #[test]
    fn test_hiding_results_resets_reveal() {
        let mut state = CulturalState::new();
        state.detect();
        for _ in 0..10 {
            state.on_tick();
        }
        state.hide_results();
        assert_eq!(state.visible_cards(), 0);

        state.detect();
        assert_eq!(state.visible_cards(), 1);
    }

    #[test]
    fn test_repeated_detect_replays_reveal() {
        let mut state = CulturalState::new();
        state.detect();
        for _ in 0..10 {
            state.on_tick();
        }
        assert_eq!(state.visible_cards(), RESULT_CARDS.len());
        state.detect();
        assert_eq!(state.visible_cards(), 1);
    }

    #[test]
    fn test_staged_file_survives_hide() {
        let mut state = CulturalState::new();
        state.stage_file();
        state.detect();
        state.hide_results();
        assert!(state.file_staged);
    }
}
