//! Cross-venue arbitrage opportunity evaluation engine.
//!
//! Given price, volume, and order-book snapshots from two trading venues,
//! the engine decides whether moving an asset from one venue to the other
//! yields a legitimate, timely, and sufficiently profitable trade after
//! trading fees, execution slippage, and network withdrawal costs.
//!
//! The evaluation pipeline (normalize -> slippage -> routing -> profit ->
//! validation) is synchronous and side-effect-free; fetching market data
//! and polling cadence belong to external collaborators behind the
//! [`market::MarketDataSource`] trait.

pub mod config;
pub mod domain;
pub mod engine;
pub mod logging;
pub mod market;
pub mod rates;
pub mod retry;

pub use config::Config;
pub use domain::{CanonicalSymbol, NetworkFeeTable, Opportunity, Orderbook, Quote, Side, Venue};
pub use engine::{EvalError, Evaluator};
pub use market::{MarketDataSource, Scanner};
pub use rates::RateConverter;
