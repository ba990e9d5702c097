//! Process-wide logging bootstrap.
//!
//! Attaches a console sink and a file sink with independent severity
//! thresholds. `tracing` allows installing the global subscriber only
//! once, so a repeated call is a no-op that still hands back a usable
//! handle; sinks are configured once per process, at startup.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::Level;
use tracing_subscriber::Layer;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Default log file path.
const DEFAULT_LOG_FILE: &str = "arbitrage.log";

/// Logging bootstrap errors.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to open log file {path}: {source}")]
    OpenLogFile {
        path: String,
        source: std::io::Error,
    },
}

/// Sink configuration for [`configure_logging`].
#[derive(Debug, Clone)]
pub struct LoggingOptions {
    /// Path of the file sink.
    pub log_file: PathBuf,
    /// Severity threshold for the console sink.
    pub console_level: Level,
    /// Severity threshold for the file sink.
    pub file_level: Level,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            console_level: Level::INFO,
            file_level: Level::DEBUG,
        }
    }
}

/// Handle to the configured sinks. Holding it is not required for logging
/// to keep working; it exists so callers can see where logs go.
#[derive(Debug)]
pub struct LoggingHandle {
    log_file: PathBuf,
}

impl LoggingHandle {
    pub fn log_file(&self) -> &std::path::Path {
        &self.log_file
    }
}

/// Installs the console and file sinks described by `options`.
///
/// Idempotent with respect to the process: if a global subscriber is
/// already installed, the call leaves it in place and returns a handle
/// to the requested file path anyway.
pub fn configure_logging(options: LoggingOptions) -> Result<LoggingHandle, LoggingError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&options.log_file)
        .map_err(|source| LoggingError::OpenLogFile {
            path: options.log_file.display().to_string(),
            source,
        })?;

    // RUST_LOG overrides the configured console threshold.
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(options.console_level.to_string()));
    let console_layer = fmt::layer().with_target(true).with_filter(console_filter);

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(file))
        .with_filter(LevelFilter::from_level(options.file_level));

    // Errors here mean a subscriber is already set; keep it.
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();

    Ok(LoggingHandle {
        log_file: options.log_file,
    })
}
