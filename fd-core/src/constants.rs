//! Freshdesk API constants.

/// Client name, used in the default User-Agent.
pub const CLIENT_NAME: &str = "fd-api";

/// Client version.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// REST API path prefix appended to the helpdesk base URL.
pub const API_PREFIX: &str = "/api/v2";

/// Password half of the Basic credentials. Freshdesk ignores it when the
/// user half is an API key.
pub const API_KEY_PASSWORD: &str = "X";

/// Default log file name inside the log directory.
pub const LOG_FILE_NAME: &str = "freshdesk.log";

/// Directory name used under the platform config/data dirs.
pub const APP_DIR_NAME: &str = "freshdesk";

/// Response header names (lower-cased) the normalizer reads.
pub mod headers {
    pub const LINK: &str = "link";
    pub const REQUEST_ID: &str = "x-request-id";
    pub const RETRY_AFTER: &str = "retry-after";
    pub const CONTENT_TYPE: &str = "content-type";
    pub const RATE_LIMIT_TOTAL: &str = "x-ratelimit-total";
    pub const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";
    pub const RATE_LIMIT_USED: &str = "x-ratelimit-used-currentrequest";
}

/// Fixed error messages surfaced on `FreshdeskError`.
pub mod messages {
    /// Used when a 2xx body cannot be decoded.
    pub const NOT_JSON: &str = "Not a JSON response from API";
    /// Used for every 404.
    pub const NOT_FOUND: &str = "The requested entity was not found";
    /// Used when an error body carries no `description`.
    pub const GENERIC: &str = "Error in Freshdesk's client API";
}

/// Default User-Agent sent with every request.
pub fn default_user_agent() -> String {
    format!("{CLIENT_NAME}/{CLIENT_VERSION}")
}
