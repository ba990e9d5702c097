//! One evaluation cycle across two venues.
//!
//! The scanner owns no polling loop: callers invoke [`Scanner::scan`] at
//! whatever cadence they like, retrying venue fetches with
//! [`crate::retry`] as they see fit. One bad pair never aborts the rest
//! of the cycle.

use tracing::{debug, info, warn};

use super::MarketDataSource;
use crate::domain::{CanonicalSymbol, NetworkFeeTable, Opportunity, Orderbook, Quote};
use crate::engine::{Evaluator, VenueSnapshot};

/// Default number of book levels requested per side.
const DEFAULT_BOOK_DEPTH: u32 = 20;

/// Scans a pair list across two venues and collects accepted
/// opportunities.
pub struct Scanner {
    evaluator: Evaluator,
    fee_table: NetworkFeeTable,
    pairs: Vec<CanonicalSymbol>,
    book_depth: u32,
}

impl Scanner {
    pub fn new(evaluator: Evaluator, fee_table: NetworkFeeTable, pairs: Vec<CanonicalSymbol>) -> Self {
        Self {
            evaluator,
            fee_table,
            pairs,
            book_depth: DEFAULT_BOOK_DEPTH,
        }
    }

    pub fn with_book_depth(mut self, depth: u32) -> Self {
        self.book_depth = depth;
        self
    }

    /// Runs one scan cycle and returns accepted opportunities sorted by
    /// net profit, highest first. Completion order between pairs carries
    /// no meaning; per-pair failures are logged and skipped.
    pub async fn scan(
        &self,
        venue_a: &dyn MarketDataSource,
        venue_b: &dyn MarketDataSource,
    ) -> Vec<Opportunity> {
        let mut accepted = Vec::new();

        for pair in &self.pairs {
            let (Some(quote_a), Some(quote_b)) = (
                self.fetch_quote(venue_a, pair).await,
                self.fetch_quote(venue_b, pair).await,
            ) else {
                continue;
            };

            let book_a = self.fetch_book(venue_a, pair).await;
            let book_b = self.fetch_book(venue_b, pair).await;

            let result = self.evaluator.evaluate(
                VenueSnapshot {
                    quote: &quote_a,
                    book: book_a.as_ref(),
                    taker_fee_pct: venue_a.taker_fee_pct(),
                },
                VenueSnapshot {
                    quote: &quote_b,
                    book: book_b.as_ref(),
                    taker_fee_pct: venue_b.taker_fee_pct(),
                },
                &self.fee_table,
            );

            match result {
                Ok(opportunity) => accepted.push(opportunity),
                Err(reason) => {
                    debug!(pair = %pair, reason = %reason, "candidate rejected");
                }
            }
        }

        accepted.sort_by(|a, b| b.net_profit.cmp(&a.net_profit));

        info!(
            pairs = self.pairs.len(),
            accepted = accepted.len(),
            venue_a = venue_a.name(),
            venue_b = venue_b.name(),
            "scan cycle completed"
        );

        accepted
    }

    async fn fetch_quote(
        &self,
        venue: &dyn MarketDataSource,
        pair: &CanonicalSymbol,
    ) -> Option<Quote> {
        match venue.quote(pair).await {
            Ok(quote) => Some(quote),
            Err(e) => {
                warn!(venue = venue.name(), pair = %pair, error = %e, "quote fetch failed");
                None
            }
        }
    }

    async fn fetch_book(
        &self,
        venue: &dyn MarketDataSource,
        pair: &CanonicalSymbol,
    ) -> Option<Orderbook> {
        match venue.orderbook(pair, self.book_depth).await {
            Ok(book) => Some(book),
            Err(e) => {
                // Missing books are routine; the heuristic covers them.
                debug!(venue = venue.name(), pair = %pair, error = %e, "no book snapshot");
                None
            }
        }
    }
}
