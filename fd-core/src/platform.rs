//! Platform directory lookup.

use std::path::PathBuf;
use crate::constants::APP_DIR_NAME;
use crate::error::{FdError, FdResult};

/// Detected operating system platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

impl Platform {
    /// Detect the current platform at compile time.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }

    /// Get the platform-specific configuration directory.
    ///
    /// - Windows: `%APPDATA%/freshdesk`
    /// - macOS: `~/Library/Application Support/freshdesk`
    /// - Linux: `~/.config/freshdesk`
    pub fn config_dir() -> FdResult<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| FdError::Config("could not determine config directory".into()))?;
        Ok(base.join(APP_DIR_NAME))
    }

    /// Get the platform-specific data directory, used for log files.
    pub fn data_dir() -> FdResult<PathBuf> {
        let base = dirs::data_dir()
            .ok_or_else(|| FdError::Config("could not determine data directory".into()))?;
        Ok(base.join(APP_DIR_NAME))
    }
}
