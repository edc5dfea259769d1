//! Routed page controllers.
//!
//! A page reads the entity id from its route, loads what the view needs and
//! decides where to go when the user is done. Pages are activated once;
//! [`deactivate`](ClubEditPage::deactivate) cancels whatever is still
//! loading, and a load that completes after that writes nothing.

pub mod club;
pub mod league;
pub mod state;

pub use club::{ClubEditPage, ClubNewPage};
pub use league::LeagueEditPage;
pub use state::PageState;

use clubadmin_core::{CancelToken, EntityId};
use std::future::Future;

use crate::error::{EditorError, Result};

/// Parses the route id, picking the message for an absent id or a bad one.
pub(crate) fn resolve_route_id(
    param: Option<&str>,
    absent_message: &str,
    invalid_message: &str,
) -> Result<EntityId> {
    EntityId::from_route_param(param).map_err(|e| {
        let message = if e.is_absent() {
            absent_message
        } else {
            invalid_message
        };
        tracing::warn!(param = ?param, reason = %e, "Rejected route id");
        EditorError::invalid_route(message, e)
    })
}

/// Runs `fut` unless `cancel` fires first; `None` means cancelled.
pub(crate) async fn unless_cancelled<F: Future>(cancel: &CancelToken, fut: F) -> Option<F::Output> {
    tokio::select! {
        biased;
        () = cancel.cancelled() => None,
        output = fut => {
            if cancel.is_cancelled() {
                None
            } else {
                Some(output)
            }
        }
    }
}
