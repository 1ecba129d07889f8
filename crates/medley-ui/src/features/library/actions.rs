//! Library feature actions.
//!
//! # Design
//! - Capture user intent separate from rendering.
//! - Actions are UI-only and never perform side effects.

/// High-level actions a user can take on a media item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaAction {
    /// Rename the item.
    Rename(String),
    /// Permanently delete the item from the library.
    Delete,
}
