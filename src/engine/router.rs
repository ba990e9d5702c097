//! Withdrawal route selection.
//!
//! Moving the asset between venues requires a network both sides support;
//! among those, the cheapest tabulated withdrawal fee wins.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::NetworkFeeTable;

/// Routing errors. All are "no usable route" outcomes, never crashes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The venues share no network for the asset, or either venue has no
    /// network data at all.
    #[error("no common withdrawal network for {asset} between {venue_a} and {venue_b}")]
    NoCommonNetwork {
        asset: String,
        venue_a: String,
        venue_b: String,
    },

    /// Shared networks exist but none has a tabulated fee.
    #[error("no withdrawal fee data for {asset}")]
    NoFeeData { asset: String },
}

/// A selected withdrawal network and its fee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRoute {
    pub network: String,
    pub fee: Decimal,
}

/// Networks supported by both venues for the asset, sorted
/// lexicographically for a deterministic scan order.
pub fn common_networks(
    asset: &str,
    venue_a: &str,
    venue_b: &str,
    table: &NetworkFeeTable,
) -> Vec<String> {
    let (Some(a), Some(b)) = (
        table.networks_for(asset, venue_a),
        table.networks_for(asset, venue_b),
    ) else {
        return Vec::new();
    };

    let mut shared: Vec<String> = a.iter().filter(|n| b.contains(n)).cloned().collect();
    shared.sort();
    shared.dedup();
    shared
}

/// Picks the shared network with the lowest tabulated withdrawal fee.
///
/// A network present in the intersection but absent from the fee table is
/// treated as infinitely expensive: skipped, never an error by itself.
/// Ties resolve to the lexicographically first candidate.
pub fn best_network(
    asset: &str,
    venue_a: &str,
    venue_b: &str,
    table: &NetworkFeeTable,
) -> Result<NetworkRoute, RouteError> {
    let candidates = common_networks(asset, venue_a, venue_b, table);
    if candidates.is_empty() {
        return Err(RouteError::NoCommonNetwork {
            asset: asset.to_string(),
            venue_a: venue_a.to_string(),
            venue_b: venue_b.to_string(),
        });
    }

    let mut best: Option<NetworkRoute> = None;
    for network in candidates {
        let Some(fee) = table.withdrawal_fee(asset, &network) else {
            continue;
        };
        if best.as_ref().is_none_or(|b| fee < b.fee) {
            best = Some(NetworkRoute { network, fee });
        }
    }

    best.ok_or_else(|| RouteError::NoFeeData {
        asset: asset.to_string(),
    })
}
