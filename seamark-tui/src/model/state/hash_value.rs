//! 「哈希值」页状态
//!
//! 两个上传槽位都是一次性的：填入演示文件后再点不再响应。
//! 填充结果在视图切换后保留，重新进入页面只把焦点放回第一个槽位。

/// 焦点所在的控件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashSlotFocus {
    /// 素材文件槽
    #[default]
    Upload,
    /// 校验文件槽
    Verify,
    /// 生成哈希值按钮
    Generate,
}

impl HashSlotFocus {
    const fn next(self) -> Self {
        match self {
            Self::Upload => Self::Verify,
            Self::Verify => Self::Generate,
            Self::Generate => Self::Upload,
        }
    }

    const fn previous(self) -> Self {
        match self {
            Self::Upload => Self::Generate,
            Self::Verify => Self::Upload,
            Self::Generate => Self::Verify,
        }
    }
}

/// 演示文件名
pub const DEMO_FILE_NAME: &str = "印尼禽月营销海报（2024）.jpg";
/// 演示文件大小
pub const DEMO_FILE_SIZE: &str = "32mb";
/// 演示文件来源
pub const DEMO_FILE_ORIGIN: &str = "来自\"本地\"文件";
/// 链上记录的演示哈希值
pub const DEMO_CHAIN_HASH: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// 页面状态
#[derive(Debug, Default)]
pub struct HashValueState {
    /// 焦点所在控件
    pub focused: HashSlotFocus,
    /// 素材槽是否已填充
    pub upload_filled: bool,
    /// 校验槽是否已填充
    pub verify_filled: bool,
}

impl HashValueState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 进入页面时把焦点放回第一个槽位
    pub fn reset_focus(&mut self) {
        self.focused = HashSlotFocus::Upload;
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_previous(&mut self) {
        self.focused = self.focused.previous();
    }

    /// 填充素材槽，只在首次生效；返回本次是否发生填充
    pub fn fill_upload(&mut self) -> bool {
        if self.upload_filled {
            return false;
        }
        self.upload_filled = true;
        true
    }

    /// 填充校验槽，只在首次生效；返回本次是否发生填充
    pub fn fill_verify(&mut self) -> bool {
        if self.verify_filled {
            return false;
        }
        self.verify_filled = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_fill_only_once() {
        let mut state = HashValueState::new();
        assert!(state.fill_upload());
        assert!(!state.fill_upload());
        assert!(state.upload_filled);

        assert!(state.fill_verify());
        assert!(!state.fill_verify());
        assert!(state.verify_filled);
    }

    #[test]
    fn test_focus_cycles_through_controls() {
        let mut state = HashValueState::new();
        state.focus_next();
        assert_eq!(state.focused, HashSlotFocus::Verify);
        state.focus_next();
        assert_eq!(state.focused, HashSlotFocus::Generate);
        state.focus_next();
        assert_eq!(state.focused, HashSlotFocus::Upload);
        state.focus_previous();
        assert_eq!(state.focused, HashSlotFocus::Generate);
    }

    #[test]
    fn test_reset_focus_keeps_filled_slots() {
        let mut state = HashValueState::new();
        state.fill_upload();
        state.focus_next();
        state.reset_focus();
        assert_eq!(state.focused, HashSlotFocus::Upload);
        assert!(state.upload_filled);
    }
}
