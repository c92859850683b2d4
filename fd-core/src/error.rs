//! Foundation error types for the Freshdesk client.
//!
//! Failures that happen before any request leaves the process (bad
//! configuration, file system trouble, serialization) are unified into
//! `FdError`. API and transport failures live in the `fd-api` crate.

use thiserror::Error;

/// Convenience type alias for Results using FdError.
pub type FdResult<T> = Result<T, FdError>;

/// Error type for configuration, I/O and serialization failures.
#[derive(Error, Debug)]
pub enum FdError {
    // -- Configuration errors --
    /// Failed to load or parse client configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required configuration value is missing.
    #[error("missing configuration: {0}")]
    MissingConfig(String),

    // -- File/IO errors --
    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    // -- Generic --
    /// Wrapping anyhow errors for interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<serde_json::Error> for FdError {
    fn from(e: serde_json::Error) -> Self {
        FdError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for FdError {
    fn from(e: toml::de::Error) -> Self {
        FdError::Config(e.to_string())
    }
}
