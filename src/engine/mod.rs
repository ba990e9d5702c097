//! The opportunity evaluation pipeline.
//!
//! One [`Evaluator::evaluate`] call is a pure function of its inputs:
//! direction pick, sizing, slippage estimation, withdrawal routing, profit
//! calculation, and validation. Evaluations for different pairs are fully
//! independent and may run concurrently; the fee table is read-only.

mod profit;
mod router;
mod slippage;
mod validator;

pub use profit::{ProfitBreakdown, compute};
pub use router::{NetworkRoute, RouteError, best_network, common_networks};
pub use slippage::{SlippageError, default_slippage_factor, estimate_heuristic, walk_book};
pub use validator::{
    DEFAULT_MAX_ROI, DEFAULT_STALENESS_WINDOW, Rejection, is_expired, validate,
};

use rust_decimal::Decimal;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::domain::{NetworkFeeTable, Opportunity, Orderbook, Quote, Side};

/// Everything the evaluator needs to know about one venue's view of a pair.
#[derive(Debug, Clone, Copy)]
pub struct VenueSnapshot<'a> {
    pub quote: &'a Quote,
    /// Book snapshot when available; the depth walk is preferred over the
    /// volume heuristic whenever one exists.
    pub book: Option<&'a Orderbook>,
    /// Taker fee in percent (0.1 means 0.1%).
    pub taker_fee_pct: Decimal,
}

/// Why a candidate did not survive evaluation.
///
/// Every variant is a data-quality outcome: one bad pair never aborts the
/// evaluation of other pairs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("configured capital must be positive")]
    InvalidCapital,

    #[error("quotes are for different pairs: {0} vs {1}")]
    MismatchedPair(String, String),

    #[error("24h volume below minimum on {venue}")]
    LowVolume { venue: String },

    #[error("price spread below profit threshold")]
    SpreadTooNarrow,

    #[error(transparent)]
    Slippage(#[from] SlippageError),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Rejected(#[from] Rejection),
}

/// Evaluation thresholds; see [`crate::config::EngineConfig`] for the
/// YAML-facing counterpart.
#[derive(Debug, Clone)]
pub struct EvaluatorOptions {
    /// Capital deployed per trade, in quote currency.
    pub capital: Decimal,
    /// Scaling factor for the heuristic slippage estimator.
    pub slippage_factor: Decimal,
    /// Minimum raw price spread in percent to bother evaluating.
    pub min_profit_pct: Decimal,
    /// Minimum 24h volume per venue, in quote currency.
    pub min_volume: Decimal,
    /// ROI ceiling in percent; above it the data is assumed bad.
    pub max_roi: Decimal,
    /// Maximum snapshot age for an accepted opportunity.
    pub staleness_window: Duration,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self {
            capital: Decimal::from(1000),
            slippage_factor: default_slippage_factor(),
            min_profit_pct: Decimal::new(5, 1),
            min_volume: Decimal::from(100_000),
            max_roi: DEFAULT_MAX_ROI,
            staleness_window: DEFAULT_STALENESS_WINDOW,
        }
    }
}

/// Runs the full evaluation pipeline for one pair of venue snapshots.
#[derive(Debug, Clone)]
pub struct Evaluator {
    opts: EvaluatorOptions,
}

impl Evaluator {
    pub fn new(opts: EvaluatorOptions) -> Self {
        Self { opts }
    }

    /// Evaluates one candidate: buys on the cheaper venue, sells on the
    /// more expensive one, and returns an accepted [`Opportunity`] or the
    /// reason there is none.
    pub fn evaluate(
        &self,
        a: VenueSnapshot<'_>,
        b: VenueSnapshot<'_>,
        fee_table: &NetworkFeeTable,
    ) -> Result<Opportunity, EvalError> {
        // A non-positive capital would size a zero quantity and trip the
        // profit calculator's notional precondition; surface it as a
        // structured error so one misconfigured knob cannot abort a cycle.
        if self.opts.capital <= Decimal::ZERO {
            return Err(EvalError::InvalidCapital);
        }
        if a.quote.symbol != b.quote.symbol {
            return Err(EvalError::MismatchedPair(
                a.quote.symbol.to_string(),
                b.quote.symbol.to_string(),
            ));
        }
        if !a.quote.has_valid_price() || !b.quote.has_valid_price() {
            return Err(Rejection::InvalidPrice.into());
        }
        for snap in [&a, &b] {
            if snap.quote.volume_24h < self.opts.min_volume {
                return Err(EvalError::LowVolume {
                    venue: snap.quote.venue.clone(),
                });
            }
        }

        // Buy where it's cheap, sell where it's expensive.
        let (buy, sell) = if a.quote.price <= b.quote.price {
            (a, b)
        } else {
            (b, a)
        };

        let spread_pct = (sell.quote.price - buy.quote.price) / buy.quote.price
            * Decimal::ONE_HUNDRED;
        if spread_pct < self.opts.min_profit_pct {
            return Err(EvalError::SpreadTooNarrow);
        }

        // Size against the raw buy price first, then re-size once the
        // effective buy price is known.
        let quantity = self.opts.capital / buy.quote.price;
        let buy_price = self.effective_price(&buy, Side::Buy, quantity)?;
        let quantity = self.opts.capital / buy_price;
        let sell_price = self.effective_price(&sell, Side::Sell, quantity)?;

        let symbol = buy.quote.symbol.clone();
        let route = best_network(
            &symbol.base,
            &buy.quote.venue,
            &sell.quote.venue,
            fee_table,
        )?;

        let breakdown = compute(
            buy_price,
            sell_price,
            quantity,
            buy.taker_fee_pct,
            sell.taker_fee_pct,
            route.fee,
        );

        let opportunity = Opportunity {
            asset_pair: symbol,
            buy_venue: buy.quote.venue.clone(),
            sell_venue: sell.quote.venue.clone(),
            buy_price,
            sell_price,
            quantity,
            gross_profit: breakdown.gross_profit,
            net_profit: breakdown.net_profit,
            roi_percent: breakdown.roi_percent,
            network: route.network,
            withdrawal_fee: route.fee,
            timestamp: buy.quote.timestamp.min(sell.quote.timestamp),
        };

        validate(&opportunity, self.opts.max_roi, self.opts.staleness_window)?;

        debug!(
            pair = %opportunity.asset_pair,
            buy = %opportunity.buy_venue,
            sell = %opportunity.sell_venue,
            net_profit = %opportunity.net_profit,
            roi = %opportunity.roi_percent,
            "opportunity accepted"
        );

        Ok(opportunity)
    }

    /// Effective execution price for one leg. The depth walk is the ground
    /// truth when a book exists; a book that cannot fill the quantity is a
    /// rejection, not a fallback. The heuristic covers missing or
    /// degenerate books.
    fn effective_price(
        &self,
        snap: &VenueSnapshot<'_>,
        side: Side,
        quantity: Decimal,
    ) -> Result<Decimal, EvalError> {
        if let Some(book) = snap.book {
            match walk_book(book, side, quantity) {
                Ok(price) => return Ok(price),
                Err(SlippageError::InsufficientDepth) => {
                    return Err(SlippageError::InsufficientDepth.into());
                }
                Err(SlippageError::NoEstimate) => {}
            }
        }
        Ok(estimate_heuristic(
            snap.quote.price,
            side,
            snap.quote.volume_24h,
            self.opts.slippage_factor,
        ))
    }
}

#[cfg(test)]
mod tests;
