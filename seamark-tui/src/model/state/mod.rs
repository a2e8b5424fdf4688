//! 页面局部状态
//!
//! 交互页面各自的状态与演示数据。这些状态独立于导航状态保存，
//! 切走再切回来时除「文化适配」的检测结果外都会延续。

mod cultural;
mod find_consultant;
mod hash_value;
mod my_consultant;
mod settings;

pub use cultural::{
    CulturalFocus, CulturalState, CULTURAL_FILE_NAME, CULTURAL_REGIONS, CULTURAL_SUGGESTIONS,
    RESULT_CARDS,
};
pub use find_consultant::{
    ConsultantColumn, ConsultantProfile, FindConsultantState, CONSULTANTS, SERVICE_FEED,
};
pub use hash_value::{
    HashSlotFocus, HashValueState, DEMO_CHAIN_HASH, DEMO_FILE_NAME, DEMO_FILE_ORIGIN, DEMO_FILE_SIZE,
};
pub use my_consultant::{Contact, ContactId, MyConsultantState, CONTACTS};
pub use settings::{SettingItem, SettingsState, Theme};
