//! Error types for the editor controllers.
//!
//! The `Display` text of every variant is the message shown to the user, so
//! callers can put `err.to_string()` straight into a banner.

use clubadmin_core::RouteIdError;
use thiserror::Error;

use crate::messages;

/// Result type alias for editor operations
pub type Result<T> = std::result::Result<T, EditorError>;

/// Why an editor operation did not complete.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EditorError {
    /// Input was rejected before any remote call.
    #[error("{message}")]
    Validation {
        /// User-facing message
        message: String,
    },

    /// The route did not carry a usable entity id.
    #[error("{message}")]
    InvalidRouteParameter {
        /// User-facing message
        message: String,
        /// What was wrong with the parameter
        #[source]
        source: RouteIdError,
    },

    /// Fetching data for the page failed.
    #[error("{message}")]
    Load {
        /// User-facing message
        message: String,
        /// Gateway failure
        #[source]
        source: clubadmin_core::Error,
    },

    /// Creating or updating the entity failed.
    #[error("{message}")]
    Save {
        /// User-facing message
        message: String,
        /// Gateway failure
        #[source]
        source: clubadmin_core::Error,
    },

    /// A submit or save is already in flight.
    #[error("{}", messages::OPERATION_IN_PROGRESS)]
    Busy,

    /// Nothing has been loaded to edit yet.
    #[error("{}", messages::NOT_READY)]
    NotReady,

    /// The page was deactivated while the operation was pending.
    #[error("{}", messages::CANCELLED)]
    Cancelled,
}

impl EditorError {
    /// Creates a validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        EditorError::Validation {
            message: message.into(),
        }
    }

    /// Creates a route parameter error.
    pub fn invalid_route<S: Into<String>>(message: S, source: RouteIdError) -> Self {
        EditorError::InvalidRouteParameter {
            message: message.into(),
            source,
        }
    }

    /// Creates a load error.
    pub fn load<S: Into<String>>(message: S, source: clubadmin_core::Error) -> Self {
        EditorError::Load {
            message: message.into(),
            source,
        }
    }

    /// Creates a save error.
    pub fn save<S: Into<String>>(message: S, source: clubadmin_core::Error) -> Self {
        EditorError::Save {
            message: message.into(),
            source,
        }
    }

    /// Returns `true` for input problems the user can fix in place.
    pub fn is_validation(&self) -> bool {
        matches!(self, EditorError::Validation { .. })
    }
}
