//! Currency rate conversion with a fail-soft fallback.
//!
//! The rate provider serves a table of current rates keyed by the source
//! currency. Transport and parse failures are recovered locally: the two
//! pairs the system is known to need fall back to fixed constants and
//! every other pair falls back to identity. No error ever propagates to
//! callers.
//!
//! Each lookup is a network round trip. Callers own memoization/TTL and
//! must never hold a lock across a call.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::warn;

/// Default rate provider endpoint; the source currency is appended as a
/// path segment.
const DEFAULT_BASE_URL: &str = "https://api.exchangerate-api.com/v4/latest";

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Conservative USD -> IDR rate used when the provider is unreachable.
const FALLBACK_USD_IDR: Decimal = Decimal::from_parts(15_000, 0, 0, false, 0);

#[derive(Debug, Deserialize)]
struct RatesResponse {
    rates: HashMap<String, Decimal>,
}

/// Client for the external currency-rate provider.
pub struct RateConverter {
    base_url: String,
    http_client: reqwest::Client,
}

impl Default for RateConverter {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl RateConverter {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build http client");

        Self {
            base_url: base_url.into(),
            http_client,
        }
    }

    /// Current `from` -> `to` exchange rate.
    ///
    /// Fails soft: any transport, timeout, or payload problem degrades to
    /// [`fallback_rate`] instead of surfacing an error.
    pub async fn rate(&self, from: &str, to: &str) -> Decimal {
        match self.fetch_rates(from).await {
            Ok(rates) => match rates.get(to) {
                Some(rate) => *rate,
                None => {
                    warn!(from, to, "currency missing from rate table, using fallback");
                    fallback_rate(from, to)
                }
            },
            Err(e) => {
                warn!(from, to, error = %e, "rate lookup failed, using fallback");
                fallback_rate(from, to)
            }
        }
    }

    /// Converts an amount between currencies at the current rate.
    pub async fn convert(&self, amount: Decimal, from: &str, to: &str) -> Decimal {
        amount * self.rate(from, to).await
    }

    async fn fetch_rates(&self, from: &str) -> Result<HashMap<String, Decimal>, reqwest::Error> {
        let url = format!("{}/{}", self.base_url, from);
        let response = self
            .http_client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<RatesResponse>()
            .await?;
        Ok(response.rates)
    }
}

/// Fixed fallback table: the two pairs the system needs, identity for the
/// rest (same-currency or unknown).
pub fn fallback_rate(from: &str, to: &str) -> Decimal {
    match (from, to) {
        ("USD", "IDR") => FALLBACK_USD_IDR,
        ("IDR", "USD") => Decimal::ONE / FALLBACK_USD_IDR,
        _ => Decimal::ONE,
    }
}
