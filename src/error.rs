//! Error types
//!
//! Lookup misses and empty queries are not errors; they resolve to empty
//! results. What remains is loading the dataset, the session lifecycle and
//! startup configuration.

use std::net::AddrParseError;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for the binary and other top-level plumbing
pub type AppResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// The dataset could not be retrieved or parsed
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Session is not in a state that can serve the request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("data not loaded")]
    NotLoaded,

    #[error("data load failed: {0}")]
    LoadFailed(String),

    /// A second load was attempted after the first one resolved
    #[error("dataset already {0}")]
    AlreadySettled(&'static str),
}

/// Invalid startup configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid bind address {value:?}: {source}")]
    InvalidBindAddress {
        value: String,
        #[source]
        source: AddrParseError,
    },
}
