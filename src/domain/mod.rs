//! Domain value objects for the evaluation pipeline.
//!
//! Everything here is an immutable snapshot passed by value or reference
//! between pipeline stages; re-evaluation always produces new instances.

mod networks;
mod opportunity;
mod orderbook;
mod quote;
mod symbol;

pub use networks::NetworkFeeTable;
pub use opportunity::Opportunity;
pub use orderbook::{Orderbook, PriceLevel};
pub use quote::Quote;
pub use symbol::{CanonicalSymbol, Venue, normalize};

use serde::{Deserialize, Serialize};

/// Side of a trade, as seen from the venue being hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Buy => write!(f, "buy"),
            Side::Sell => write!(f, "sell"),
        }
    }
}
