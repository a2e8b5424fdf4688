//! Seamark Core Library
//!
//! Navigation domain of the Seamark dashboard: a single-owner state
//! machine over a fixed set of views and a disclosure menu, plus the
//! shared layout parameters the scroll-locked view depends on.
//!
//! The crate is UI-agnostic. It never draws anything and never waits
//! for anything; a frontend feeds it clicks, applies the returned
//! [`NavEffect`]s, and projects the state into widgets.

pub mod error;
pub mod layout;
pub mod navigation;
pub mod types;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use layout::{LayoutParams, LayoutSync, StickyProbe};
pub use navigation::{NavEffect, NavigationState};
pub use types::{standard_menu, MenuEntry, MenuId, MenuTarget, SubMenuEntry, ViewId, ViewRegistry};
