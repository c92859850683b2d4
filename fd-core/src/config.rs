//! Client configuration management.
//!
//! Handles loading, saving, and validating the Freshdesk client
//! configuration: helpdesk URL, API key, transport settings and logging.
//! Configuration is persisted as TOML on disk.

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{FdError, FdResult};
use crate::platform::Platform;

/// Top-level client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Helpdesk connection settings.
    #[serde(default)]
    pub freshdesk: FreshdeskConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Helpdesk connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreshdeskConfig {
    /// Helpdesk URL (e.g., "https://demo.freshdesk.com").
    #[serde(default)]
    pub base_url: String,

    /// API key of the agent the client acts as.
    #[serde(default)]
    pub api_key: String,

    /// Optional request timeout in milliseconds. Unset means the transport
    /// waits indefinitely.
    #[serde(default)]
    pub timeout_ms: Option<u64>,

    /// User-Agent header sent with every request.
    #[serde(default = "constants::default_user_agent")]
    pub user_agent: String,

    /// Whether to accept invalid TLS certificates (self-hosted proxies).
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for log files. If empty, uses default location.
    #[serde(default)]
    pub directory: String,

    /// Enable JSON structured logging output.
    #[serde(default)]
    pub json_output: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for FreshdeskConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: String::new(),
            timeout_ms: None,
            user_agent: constants::default_user_agent(),
            accept_invalid_certs: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: String::new(),
            json_output: false,
        }
    }
}

impl FreshdeskConfig {
    /// Build a connection config from a helpdesk URL and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Set a request timeout.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Check that the values required to issue requests are present.
    pub fn validate(&self) -> FdResult<()> {
        if AppConfig::sanitize_base_url(&self.base_url).is_empty() {
            return Err(FdError::MissingConfig("freshdesk.base_url".into()));
        }
        if self.api_key.trim().is_empty() {
            return Err(FdError::MissingConfig("freshdesk.api_key".into()));
        }
        Ok(())
    }
}

impl AppConfig {
    /// Load configuration from the default config file path.
    pub fn load_default() -> FdResult<Self> {
        let path = Self::default_config_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> FdResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a specific file path.
    pub fn save_to_file(&self, path: &Path) -> FdResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| FdError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> FdResult<PathBuf> {
        let config_dir = Platform::config_dir()?;
        Ok(config_dir.join("config.toml"))
    }

    /// Get the effective log directory, using the configured path or the default.
    pub fn effective_log_dir(&self) -> FdResult<PathBuf> {
        if self.logging.directory.is_empty() {
            let data_dir = Platform::data_dir()?;
            Ok(data_dir.join("logs"))
        } else {
            Ok(PathBuf::from(&self.logging.directory))
        }
    }

    /// Check whether the helpdesk connection is configured.
    pub fn is_configured(&self) -> bool {
        self.freshdesk.validate().is_ok()
    }

    /// Sanitize and normalize a helpdesk URL.
    ///
    /// Strips surrounding quotes and whitespace, defaults the scheme to
    /// https, and removes trailing slashes.
    pub fn sanitize_base_url(address: &str) -> String {
        let trimmed = address.trim().trim_matches('"').trim();
        if trimmed.is_empty() {
            return String::new();
        }

        let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("https://{trimmed}")
        };

        with_scheme.trim_end_matches('/').to_string()
    }
}
