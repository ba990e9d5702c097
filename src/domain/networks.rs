//! Withdrawal network and fee tables.
//!
//! The table is an externally refreshed, read-only snapshot. An absent
//! entry means "unknown", never "free": lookups return `None` and the
//! router treats an untabulated network as infinitely expensive.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-asset withdrawal fees and per-venue supported networks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkFeeTable {
    /// asset -> network -> withdrawal fee (in the asset's quote terms).
    #[serde(default)]
    pub withdrawal_fees: HashMap<String, HashMap<String, Decimal>>,
    /// asset -> venue -> supported networks.
    #[serde(default)]
    pub supported_networks: HashMap<String, HashMap<String, Vec<String>>>,
}

impl NetworkFeeTable {
    /// Loads a table snapshot from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Networks a venue supports for the asset; `None` when the table has
    /// no data for that asset/venue combination.
    pub fn networks_for(&self, asset: &str, venue: &str) -> Option<&[String]> {
        self.supported_networks
            .get(asset)?
            .get(venue)
            .map(Vec::as_slice)
    }

    /// Withdrawal fee for the asset over the network; `None` when the
    /// network has no tabulated fee.
    pub fn withdrawal_fee(&self, asset: &str, network: &str) -> Option<Decimal> {
        self.withdrawal_fees.get(asset)?.get(network).copied()
    }
}
