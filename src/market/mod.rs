//! Collaborator seams for venue market data.
//!
//! The engine never fetches anything itself; venues implement
//! [`MarketDataSource`] and the (external) polling loop decides cadence
//! and retries.

mod scanner;

pub use scanner::Scanner;

use async_trait::async_trait;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::{CanonicalSymbol, Orderbook, Quote, Venue};

/// Market-data errors.
#[derive(Debug, Error)]
pub enum MarketError {
    /// Trading pair is not listed on this venue.
    #[error("pair {0} is not supported")]
    PairNotSupported(String),

    /// Connection error.
    #[error("connection error: {0}")]
    Connection(String),

    /// API error from the venue.
    #[error("API error: {0}")]
    Api(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for market-data operations.
pub type Result<T> = std::result::Result<T, MarketError>;

/// MarketDataSource supplies read-only snapshots for one venue.
///
/// Implementations translate canonical pairs into their venue's raw
/// symbol spelling (see [`crate::domain::normalize`]) and are polled
/// externally; this core never drives the cadence.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Unique venue identifier (e.g., "binance").
    fn name(&self) -> &str;

    /// Symbol format family of this venue.
    fn venue(&self) -> Venue;

    /// Taker fee in percent for any pair on this venue.
    fn taker_fee_pct(&self) -> Decimal;

    /// Fetches the current price/volume snapshot for a pair.
    /// Returns `PairNotSupported` if the pair is not listed.
    async fn quote(&self, symbol: &CanonicalSymbol) -> Result<Quote>;

    /// Fetches an orderbook snapshot with up to `depth` levels per side.
    /// Venues without book access return `PairNotSupported` or `Api`;
    /// the scanner degrades to the volume heuristic in that case.
    async fn orderbook(&self, symbol: &CanonicalSymbol, depth: u32) -> Result<Orderbook>;
}
