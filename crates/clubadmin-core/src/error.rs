//! Error types for clubadmin core library.

use crate::types::EntityId;

/// Errors raised by gateways and core parsing helpers.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The remote endpoint has no entity with this id (HTTP 404).
    #[error("{resource} {id} not found")]
    NotFound {
        /// Resource label, e.g. "club"
        resource: &'static str,
        /// Requested id
        id: EntityId,
    },

    /// The remote endpoint answered with a non-success status.
    #[error("Remote error (HTTP {status}): {message}")]
    Remote {
        /// HTTP status code
        status: u16,
        /// Response body or reason phrase
        message: String,
    },

    /// The request never produced a response (connection, timeout, ...).
    #[error("Transport error: {message}")]
    Transport {
        /// Human-readable error message
        message: String,
        /// Source error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A response body could not be decoded into the expected shape.
    #[error("Decode error: {message}")]
    Decode {
        /// What was being decoded
        message: String,
        /// Source error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience `Result` type alias for clubadmin operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new remote error from a status code and message.
    pub fn remote<S: Into<String>>(status: u16, message: S) -> Self {
        Error::Remote {
            status,
            message: message.into(),
        }
    }

    /// Creates a new transport error with a message and source error.
    pub fn transport_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Transport {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new decode error with a message and source error.
    pub fn decode_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Decode {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns `true` if the remote side reported the entity as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
