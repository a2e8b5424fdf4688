//! Shared vocabulary of the navigation domain

mod menu;
mod view;

pub use menu::{standard_menu, MenuEntry, MenuId, MenuTarget, SubMenuEntry};
pub use view::{ViewId, ViewRegistry};
