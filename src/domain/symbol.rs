//! Symbol normalization across venues.
//!
//! Each venue spells trading pairs differently ("BTCUSDT" vs "BTC-USDT");
//! the pipeline works exclusively with the canonical "BASE/QUOTE" form
//! produced here.

use serde::{Deserialize, Serialize};

/// Quote currencies recognized when splitting concatenated symbols.
/// Checked in order; the first matching suffix wins.
const COMMON_QUOTES: &[&str] = &["USDT", "BUSD", "BTC", "ETH", "BNB", "USD"];

/// A trading venue with a known symbol format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Venue {
    /// Concatenated base+quote without a separator (e.g., "BTCUSDT").
    Binance,
    /// Dash-delimited base and quote (e.g., "BTC-USDT").
    Kucoin,
    /// Unknown venue; symbols pass through unchanged.
    Other,
}

impl std::fmt::Display for Venue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Venue::Binance => write!(f, "binance"),
            Venue::Kucoin => write!(f, "kucoin"),
            Venue::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for Venue {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "binance" => Venue::Binance,
            "kucoin" => Venue::Kucoin,
            _ => Venue::Other,
        })
    }
}

/// A venue-agnostic trading pair.
///
/// Both parts are uppercase after normalization. The quote is empty when
/// the raw symbol carried no recognizable separator; that is preserved, not
/// treated as an error, and downstream validation catches empty bases.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanonicalSymbol {
    pub base: String,
    pub quote: String,
}

impl CanonicalSymbol {
    pub fn new(base: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            quote: quote.into(),
        }
    }

    /// Parses a "BASE/QUOTE" pair string. Without a slash the whole input
    /// becomes the base and the quote stays empty.
    pub fn from_pair(pair: &str) -> Self {
        match pair.split_once('/') {
            Some((base, quote)) => Self::new(base, quote),
            None => Self::new(pair, ""),
        }
    }

    /// Returns true if both base and quote are present.
    pub fn is_complete(&self) -> bool {
        !self.base.is_empty() && !self.quote.is_empty()
    }
}

impl std::fmt::Display for CanonicalSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.quote.is_empty() {
            write!(f, "{}", self.base)
        } else {
            write!(f, "{}/{}", self.base, self.quote)
        }
    }
}

/// Normalizes a raw venue symbol into canonical form.
///
/// Concatenated symbols are split by stripping the first matching suffix
/// from [`COMMON_QUOTES`]; if none match, the last 3 characters are taken
/// as the quote. Delimited symbols are split on the delimiter. Unknown
/// venues (and empty input) pass through with an empty quote.
pub fn normalize(symbol: &str, venue: Venue) -> CanonicalSymbol {
    let symbol = symbol.to_uppercase();

    match venue {
        Venue::Binance => {
            for quote in COMMON_QUOTES {
                if let Some(base) = symbol.strip_suffix(quote) {
                    // First match wins even when the whole symbol is the
                    // quote currency, leaving an empty base.
                    return CanonicalSymbol::new(base, *quote);
                }
            }
            // No known quote suffix: assume a 3-character quote.
            if symbol.len() > 3 {
                let (base, quote) = symbol.split_at(symbol.len() - 3);
                return CanonicalSymbol::new(base, quote);
            }
            CanonicalSymbol::new(symbol, "")
        }
        Venue::Kucoin => match symbol.split_once('-') {
            Some((base, quote)) => CanonicalSymbol::new(base, quote),
            None => CanonicalSymbol::new(symbol, ""),
        },
        Venue::Other => CanonicalSymbol::new(symbol, ""),
    }
}
