//! 视图模块（View）
//!
//! Elm 架构中的 View 层：只读取模型渲染界面，不修改任何状态。
//! `measure` 是这一层的公共底座：渲染、鼠标命中与高度同步
//! 全部基于同一组区域划分函数。

pub mod components;
pub mod layout;
pub mod measure;
pub mod pages;
pub mod theme;

pub use layout::render;
