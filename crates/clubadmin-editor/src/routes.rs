//! Application routes the editors navigate between.

use std::fmt::Display;

/// Club list.
pub const CLUB_LIST: &str = "/club";

/// Club creation view.
pub const CLUB_NEW: &str = "/club/new";

/// League list.
pub const LEAGUE_LIST: &str = "/liga";

/// Club edit view for `id`.
pub fn club_edit(id: impl Display) -> String {
    format!("/club/edit/{id}")
}

/// League edit view for `id`.
pub fn league_edit(id: impl Display) -> String {
    format!("/liga/edit/{id}")
}
