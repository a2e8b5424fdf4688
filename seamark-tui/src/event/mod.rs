//! Event 层：输入事件翻译
//!
//! 把 crossterm 的键盘/鼠标/尺寸事件翻译成 Message，本层不改状态。
//!
//! 模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件分发与鼠标命中测试
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//! 事件的去向：
//!     Event::Key(KeyEvent)        键盘事件，按焦点面板与当前视图分发
//!     Event::Mouse(MouseEvent)    左键按下做命中测试，滚轮翻译成滚动
//!     Event::Resize(w, h)         翻译成 AppMessage::Resize，由 update 层重算同步布局
//!
//! 键盘事件只处理 Press，忽略 Release / Repeat。
//! 鼠标命中测试调用 view::measure 的划分函数，
//! 命中的矩形与屏幕上画出的矩形完全一致。

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
