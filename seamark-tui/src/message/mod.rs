//! 消息模块（Message）
//!
//! Elm 架构中的 Message 层：事件层把按键、鼠标、终端事件
//! 翻译成这里定义的消息，`update` 层据此修改模型。
//! 消息只描述「发生了什么」，不携带处理逻辑。

mod app;
mod content;
mod navigation;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use navigation::NavigationMessage;
