//! Tracing subscriber setup for applications embedding the client.
//!
//! The client crates only emit `tracing` events; nothing is printed unless
//! the host installs a subscriber through one of these functions.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::AppConfig;
use crate::constants::LOG_FILE_NAME;
use crate::error::{FdError, FdResult};

/// Keeps the background log writer alive. Dropping it flushes the file.
pub struct LogGuard {
    _guard: WorkerGuard,
}

fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a subscriber writing compact lines to stderr and a daily
/// rotated file under `log_dir`.
///
/// `level` accepts any `EnvFilter` directive, e.g. "info" or
/// "fd_api=debug,warn". An unparseable directive falls back to "info".
/// Fails if a global subscriber is already installed.
pub fn init_logging(level: &str, log_dir: &Path, json_output: bool) -> FdResult<LogGuard> {
    std::fs::create_dir_all(log_dir)?;

    let (writer, guard) = tracing_appender::non_blocking(rolling::daily(log_dir, LOG_FILE_NAME));

    let file_layer = if json_output {
        fmt::layer()
            .with_writer(writer)
            .json()
            .with_current_span(false)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    let console_layer = fmt::layer().with_writer(std::io::stderr).compact();

    tracing_subscriber::registry()
        .with(filter_for(level))
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| FdError::Config(format!("failed to install subscriber: {e}")))?;

    tracing::info!(level = %level, dir = %log_dir.display(), "logging initialized");

    Ok(LogGuard { _guard: guard })
}

/// Install logging from the `[logging]` section of a loaded config.
pub fn init_from_config(config: &AppConfig) -> FdResult<LogGuard> {
    let dir = config.effective_log_dir()?;
    init_logging(&config.logging.level, &dir, config.logging.json_output)
}

/// Console-only logging for tests and small tools. A second call is a no-op.
pub fn init_console_logging(level: &str) {
    let _ = tracing_subscriber::registry()
        .with(filter_for(level))
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
