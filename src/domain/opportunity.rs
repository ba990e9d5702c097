//! Arbitrage opportunity domain model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::CanonicalSymbol;

/// Opportunity represents one evaluated arbitrage candidate.
///
/// Created by the profit calculator, then accepted or discarded by the
/// validator; never mutated afterwards. Re-evaluation produces a new
/// instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opportunity {
    /// Trading pair in canonical form.
    pub asset_pair: CanonicalSymbol,
    /// Venue where the asset is bought.
    pub buy_venue: String,
    /// Venue where the asset is sold.
    pub sell_venue: String,
    /// Effective buy price, slippage included.
    pub buy_price: Decimal,
    /// Effective sell price, slippage included.
    pub sell_price: Decimal,
    /// Quantity of the base asset moved.
    pub quantity: Decimal,
    /// Profit before fees.
    pub gross_profit: Decimal,
    /// Profit after trading and withdrawal fees.
    pub net_profit: Decimal,
    /// Net profit as a percentage of the buy notional.
    pub roi_percent: Decimal,
    /// Withdrawal network chosen for the transfer.
    pub network: String,
    /// Withdrawal fee paid on that network.
    pub withdrawal_fee: Decimal,
    /// When this opportunity was detected.
    pub timestamp: DateTime<Utc>,
}

impl Opportunity {
    /// Returns true if the snapshot behind this opportunity is older than
    /// the given window.
    pub fn is_stale(&self, window: Duration) -> bool {
        let age = Utc::now().signed_duration_since(self.timestamp);
        age.num_milliseconds() > window.as_millis() as i64
    }

    /// Returns true if the net profit is positive.
    pub fn is_profitable(&self) -> bool {
        self.net_profit > Decimal::ZERO
    }
}
