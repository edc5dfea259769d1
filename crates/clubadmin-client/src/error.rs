//! Error types for clubadmin-client

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for clubadmin-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or building the client
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from clubadmin-core
    #[error("Core error: {0}")]
    Core(#[from] clubadmin_core::Error),

    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Config file could not be read
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`ClientConfig`](crate::ClientConfig)
    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    /// Config values are unusable
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }

    /// Wraps an I/O error with the path it happened on.
    pub fn io_with_path(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
