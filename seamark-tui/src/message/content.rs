//! 内容区消息
//!
//! 同一个消息在不同视图下含义不同（例如 `SelectPrevious`
//! 在「我的顾问」里切换联系人，在设置页里移动设置项），
//! 具体路由在 `update::content` 中按当前视图完成。

use crate::model::state::{ConsultantColumn, ContactId};

/// 内容区操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    /// 向上滚一行
    ScrollUp,
    /// 向下滚一行
    ScrollDown,
    /// 选中上一项
    SelectPrevious,
    /// 选中下一项
    SelectNext,
    /// 当前项取值向前切（设置页）
    CyclePrevious,
    /// 当前项取值向后切（设置页）
    CycleNext,
    /// 确认当前项
    Confirm,
    /// 「寻找顾问」：焦点换到另一栏
    SwitchColumn,
    /// 「寻找顾问」：焦点放到指定栏（鼠标）
    FocusColumn(ConsultantColumn),
    /// 「我的顾问」：切换会话联系人
    SelectContact(ContactId),
    /// 「哈希值」：填充素材槽
    FillUploadSlot,
    /// 「哈希值」：填充校验槽
    FillVerifySlot,
    /// 「哈希值」：点击生成按钮
    GenerateHash,
    /// 「文化适配」：暂存素材
    StageFile,
    /// 「文化适配」：开始检测
    Detect,
    /// 「文化适配」：点击第 n 条优化建议
    SuggestionRow(usize),
    /// 「文化适配」：点击第 n 条地区提示
    RegionRow(usize),
}
