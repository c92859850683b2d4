//! Error taxonomy for Freshdesk API calls.
//!
//! A call fails in one of three ways: the transport never produced a
//! response (`ApiError::Transport`, the reqwest error as-is), Freshdesk
//! answered with something other than a usable success
//! (`ApiError::Freshdesk`), or the request could not be built locally
//! (`ApiError::Request`).

use serde_json::Value;
use thiserror::Error;

use fd_core::error::FdError;

/// Convenience type alias for Results using ApiError.
pub type ApiResult<T> = Result<T, ApiError>;

/// Freshdesk API protocol violation.
///
/// Built exactly once per failed response and never retried by the client.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct FreshdeskError {
    /// Human-readable message: the body's `description`, or a fixed message.
    pub message: String,
    /// Parsed JSON body, or the raw body as a JSON string when unparseable.
    pub data: Value,
    /// HTTP status of the response.
    pub status: u16,
    /// `"METHOD /path"` of the request that failed, without query string.
    pub api_target: String,
    /// Value of `x-request-id`, or empty.
    pub request_id: String,
    /// Seconds from `Retry-After`, when Freshdesk sent one (typically 429).
    pub retry_after: Option<u64>,
}

impl FreshdeskError {
    /// Whether this is the 404 not-found case.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Whether Freshdesk throttled the request.
    pub fn is_rate_limited(&self) -> bool {
        self.status == 429
    }

    /// Field-level validation errors from the `errors` array of a 400 body.
    pub fn field_errors(&self) -> Vec<FieldError> {
        self.data
            .get("errors")
            .and_then(|e| serde_json::from_value(e.clone()).ok())
            .unwrap_or_default()
    }
}

/// One entry of the `errors` array in a Freshdesk validation failure.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

/// Every way a Freshdesk call can fail.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never completed (DNS, refused connection, aborted body).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Freshdesk returned an error status or an unusable success body.
    #[error(transparent)]
    Freshdesk(#[from] FreshdeskError),

    /// The request could not be built.
    #[error("invalid request: {0}")]
    Request(String),

    /// Configuration or local I/O failure.
    #[error(transparent)]
    Core(#[from] FdError),
}

impl ApiError {
    /// HTTP status, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Freshdesk(e) => Some(e.status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether this is a Freshdesk 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Freshdesk(e) if e.is_not_found())
    }

    /// The structured Freshdesk error, if that is what this is.
    pub fn freshdesk(&self) -> Option<&FreshdeskError> {
        match self {
            ApiError::Freshdesk(e) => Some(e),
            _ => None,
        }
    }

    /// The underlying transport error, if that is what this is.
    pub fn as_transport(&self) -> Option<&reqwest::Error> {
        match self {
            ApiError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Request(format!("failed to serialize payload: {e}"))
    }
}
