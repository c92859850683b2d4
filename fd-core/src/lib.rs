//! Freshdesk Core - Foundation types, error handling, configuration, and logging.
//!
//! This crate provides the shared foundation used by the Freshdesk client crates:
//! - Client configuration (helpdesk URL, API key, transport settings)
//! - Foundation error type for configuration and I/O failures
//! - Structured logging with tracing
//! - Platform directory lookup
//! - API constants

pub mod config;
pub mod error;
pub mod logging;
pub mod platform;
pub mod constants;

// Re-export commonly used items at the crate root
pub use config::{AppConfig, FreshdeskConfig};
pub use error::{FdError, FdResult};
pub use logging::{init_from_config, init_logging, LogGuard};
pub use platform::Platform;
