//! Page lifecycle.

use std::fmt;

/// Where a page controller is in its lifecycle.
///
/// ```text
/// ResolvingId ─► InvalidId
///      │
///      ▼
///   Loading ─► LoadError
///      │
///      ▼
///   Loaded ◄─► Saving ─► Saved
///      │
///      ▼
///  Cancelled
/// ```
///
/// A failed save returns to `Loaded` with the error signal set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageState {
    /// Reading the route parameter
    #[default]
    ResolvingId,
    /// Route parameter unusable; nothing was fetched
    InvalidId,
    /// Fetching the entity
    Loading,
    /// Entity available for editing
    Loaded,
    /// Fetch failed
    LoadError,
    /// Waiting for the backend to store changes
    Saving,
    /// Changes stored, page left
    Saved,
    /// User left without saving
    Cancelled,
}

impl PageState {
    /// Returns `true` when the user can edit and save.
    pub fn is_editable(self) -> bool {
        self == PageState::Loaded
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PageState::ResolvingId => "resolving-id",
            PageState::InvalidId => "invalid-id",
            PageState::Loading => "loading",
            PageState::Loaded => "loaded",
            PageState::LoadError => "load-error",
            PageState::Saving => "saving",
            PageState::Saved => "saved",
            PageState::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}
