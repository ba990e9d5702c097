//! Configuration loading and validation.
//!
//! Uses serde_yaml to load YAML configuration files, with `.env` support
//! for environment overrides of non-sensitive runtime knobs.

mod app;
mod engine;
mod error;
mod rates;
mod retry;
mod venue;

pub(crate) mod duration;

pub use app::AppConfig;
pub use engine::EngineConfig;
pub use error::ConfigError;
pub use rates::RatesConfig;
pub use retry::RetryConfig;
pub use venue::VenueConfig;

use serde::Deserialize;
use std::{collections::HashMap, env, fs};

/// Root configuration structure.
///
/// Required sections: app, venues, pairs.
/// Optional sections: engine, rates, retry.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Application-level settings like name and environment.
    pub app: AppConfig,
    /// Maps venue names to their configurations.
    pub venues: HashMap<String, VenueConfig>,
    /// List of canonical trading pairs to evaluate (e.g., "BTC/USDT").
    pub pairs: Vec<String>,
    /// Evaluation thresholds (optional).
    #[serde(default)]
    pub engine: EngineConfig,
    /// Currency-rate provider (optional).
    #[serde(default)]
    pub rates: RatesConfig,
    /// Retry policy for external calls (optional).
    #[serde(default)]
    pub retry: RetryConfig,
}

impl Config {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Loads environment variables from `.env` first (if present); the
    /// `CROSSARB_LOG_LEVEL` variable overrides `app.log_level`.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_string(),
            source,
        })?;
        let mut config: Config = serde_yaml::from_str(&content)?;

        if let Ok(level) = env::var("CROSSARB_LOG_LEVEL") {
            config.app.log_level = Some(level);
        }

        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.app.name.is_empty() {
            return Err(ConfigError::Validation("app.name is required".into()));
        }

        if self.pairs.is_empty() {
            return Err(ConfigError::Validation(
                "at least one trading pair is required".into(),
            ));
        }

        let mut enabled_venues = 0;
        for (name, venue) in &self.venues {
            if venue.enabled {
                enabled_venues += 1;

                if venue.fee_taker_pct.is_none() {
                    return Err(ConfigError::Validation(format!(
                        "venue {}: fee_taker_pct is required",
                        name
                    )));
                }
            }
        }

        if enabled_venues < 2 {
            return Err(ConfigError::Validation(
                "cross-venue evaluation needs at least two enabled venues".into(),
            ));
        }

        if let Some(capital) = self.engine.capital {
            if capital <= rust_decimal::Decimal::ZERO {
                return Err(ConfigError::Validation(
                    "engine.capital must be positive".into(),
                ));
            }
        }
        if let Some(factor) = self.engine.slippage_factor {
            if factor < rust_decimal::Decimal::ZERO {
                return Err(ConfigError::Validation(
                    "engine.slippage_factor must not be negative".into(),
                ));
            }
        }
        if let Some(volume) = self.engine.min_volume {
            if volume < rust_decimal::Decimal::ZERO {
                return Err(ConfigError::Validation(
                    "engine.min_volume must not be negative".into(),
                ));
            }
        }

        Ok(())
    }
}
