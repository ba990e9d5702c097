//! Per-venue market snapshots.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CanonicalSymbol;

/// Quote is an immutable price/volume snapshot for one pair on one venue.
///
/// Created once per poll cycle and discarded after evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// Venue name this quote came from (e.g., "binance").
    pub venue: String,
    /// Canonical trading pair.
    pub symbol: CanonicalSymbol,
    /// Last traded price. Non-negative.
    pub price: Decimal,
    /// Rolling 24h traded volume in quote currency. Non-negative.
    pub volume_24h: Decimal,
    /// When this snapshot was captured.
    pub timestamp: DateTime<Utc>,
}

impl Quote {
    /// Returns true if the price is usable for evaluation.
    pub fn has_valid_price(&self) -> bool {
        self.price > Decimal::ZERO
    }
}
