//! Application-level configuration.

use serde::Deserialize;

/// Application-level settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Application name used in logs.
    pub name: String,
    /// Environment: "development", "staging", or "production".
    pub env: String,
    /// Console logging verbosity: "debug", "info", "warn", "error".
    pub log_level: Option<String>,
    /// Path of the log file sink (default: "arbitrage.log").
    pub log_file: Option<String>,
}
