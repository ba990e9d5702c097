//! Currency-rate provider configuration.

use serde::Deserialize;

use crate::rates::RateConverter;

/// Settings for the external rate provider.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RatesConfig {
    /// Provider endpoint; the source currency is appended as a path
    /// segment. Defaults to the built-in provider when absent.
    pub base_url: Option<String>,
}

impl RatesConfig {
    /// Builds a converter against the configured provider.
    pub fn to_converter(&self) -> RateConverter {
        match &self.base_url {
            Some(url) => RateConverter::new(url.clone()),
            None => RateConverter::default(),
        }
    }
}
