//! Unified error type definition

use thiserror::Error;

/// Core layer error type.
///
/// Runtime navigation is deliberately tolerant (unknown ids degrade to
/// no-ops), so errors only surface where a menu definition itself is
/// malformed at construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The same menu entry id appears twice in one menu.
    #[error("duplicate menu entry: {0}")]
    DuplicateEntry(&'static str),

    /// The same view is reachable from more than one menu entry.
    #[error("view targeted by more than one menu entry: {0}")]
    DuplicateViewTarget(&'static str),

    /// A submenu entry was declared without any children.
    #[error("submenu entry without children: {0}")]
    EmptySubmenu(&'static str),
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
