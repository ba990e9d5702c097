//! Per-venue configuration.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Settings for a single trading venue.
#[derive(Debug, Clone, Deserialize)]
pub struct VenueConfig {
    /// Whether this venue should be scanned.
    #[serde(default)]
    pub enabled: bool,
    /// Taker fee in percent (e.g., "0.1" for 0.1%).
    pub fee_taker_pct: Option<Decimal>,
    /// Maker fee in percent; defaults to the taker fee when absent.
    pub fee_maker_pct: Option<Decimal>,
}

impl VenueConfig {
    /// Taker fee to charge on a leg hit at this venue.
    pub fn taker_fee_pct(&self) -> Decimal {
        self.fee_taker_pct.unwrap_or_default()
    }

    /// Maker fee, falling back to the taker fee when unset.
    pub fn maker_fee_pct(&self) -> Decimal {
        self.fee_maker_pct.or(self.fee_taker_pct).unwrap_or_default()
    }
}
