//! Evaluation engine thresholds.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;

use super::duration;
use crate::engine::{DEFAULT_MAX_ROI, DEFAULT_STALENESS_WINDOW, EvaluatorOptions, default_slippage_factor};

/// Engine thresholds; every field is optional and falls back to the
/// engine's built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// Capital deployed per trade, in quote currency.
    pub capital: Option<Decimal>,
    /// Minimum raw price spread in percent to evaluate a pair.
    pub min_profit_pct: Option<Decimal>,
    /// ROI ceiling in percent (bad-tick guard).
    pub max_roi_pct: Option<Decimal>,
    /// Minimum 24h volume per venue, in quote currency.
    pub min_volume: Option<Decimal>,
    /// Scaling factor for the heuristic slippage estimator.
    pub slippage_factor: Option<Decimal>,
    /// How long an opportunity's snapshots stay acceptable (default: 5m).
    #[serde(default, with = "duration")]
    pub staleness_window: Duration,
}

impl EngineConfig {
    /// Materializes evaluator options, substituting defaults for anything
    /// the config leaves out.
    pub fn to_options(&self) -> EvaluatorOptions {
        let defaults = EvaluatorOptions::default();
        EvaluatorOptions {
            capital: self.capital.unwrap_or(defaults.capital),
            slippage_factor: self.slippage_factor.unwrap_or_else(default_slippage_factor),
            min_profit_pct: self.min_profit_pct.unwrap_or(defaults.min_profit_pct),
            min_volume: self.min_volume.unwrap_or(defaults.min_volume),
            max_roi: self.max_roi_pct.unwrap_or(DEFAULT_MAX_ROI),
            staleness_window: if self.staleness_window.is_zero() {
                DEFAULT_STALENESS_WINDOW
            } else {
                self.staleness_window
            },
        }
    }
}
