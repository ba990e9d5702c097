//! Execution price estimation.
//!
//! Two interchangeable estimators: a coarse volume heuristic for when no
//! book snapshot exists, and a depth walk over the orderbook which is the
//! ground truth and preferred whenever a book is available.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::{Orderbook, Side};

/// Volume at which the heuristic saturates (quote currency).
const SATURATION_VOLUME: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);

/// Default slippage scaling factor (0.1%).
pub fn default_slippage_factor() -> Decimal {
    Decimal::new(1, 3)
}

/// Slippage estimation errors.
///
/// Both are data-quality outcomes, not faults: the caller rejects the
/// candidate instead of propagating an error upward.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlippageError {
    /// Empty book, empty side, or non-positive quantity.
    #[error("no price levels to estimate from")]
    NoEstimate,

    /// The book cannot fill the requested quantity; a partial-fill average
    /// is never returned.
    #[error("insufficient depth to fill requested quantity")]
    InsufficientDepth,
}

/// Coarse volume-based effective price.
///
/// `factor = min(1, max(volume, 0) / 100000)` scaled by `slippage_factor`;
/// buys pay up, sells receive less.
pub fn estimate_heuristic(
    price: Decimal,
    side: Side,
    volume: Decimal,
    slippage_factor: Decimal,
) -> Decimal {
    let volume = volume.max(Decimal::ZERO);
    let factor = (volume / SATURATION_VOLUME).min(Decimal::ONE);
    let adjustment = factor * slippage_factor;

    match side {
        Side::Buy => price * (Decimal::ONE + adjustment),
        Side::Sell => price * (Decimal::ONE - adjustment),
    }
}

/// Volume-weighted execution price from walking the book.
///
/// Walks asks for a buy and bids for a sell, best price outward,
/// accumulating value until `quantity` is filled. Returns the average fill
/// price only on a full fill.
pub fn walk_book(
    book: &Orderbook,
    side: Side,
    quantity: Decimal,
) -> Result<Decimal, SlippageError> {
    if quantity <= Decimal::ZERO {
        return Err(SlippageError::NoEstimate);
    }

    let levels = match side {
        Side::Buy => &book.asks,
        Side::Sell => &book.bids,
    };
    if levels.is_empty() {
        return Err(SlippageError::NoEstimate);
    }

    let mut remaining = quantity;
    let mut total_value = Decimal::ZERO;

    for level in levels {
        let take = remaining.min(level.quantity);
        total_value += level.price * take;
        remaining -= take;
        if remaining <= Decimal::ZERO {
            break;
        }
    }

    if remaining > Decimal::ZERO {
        return Err(SlippageError::InsufficientDepth);
    }

    Ok(total_value / quantity)
}
