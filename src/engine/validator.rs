//! Opportunity acceptance rules.
//!
//! Rejections are expected, frequent outcomes (bad ticks, stale data), so
//! they surface as structured reasons rather than faults. Rejected
//! opportunities are simply not reported.

use chrono::{NaiveDateTime, Utc};
use rust_decimal::Decimal;
use std::time::Duration;
use thiserror::Error;

use crate::domain::Opportunity;

/// Timestamp format used by quote feeds that report wall-clock strings.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Default ROI ceiling in percent. Anything above is assumed to come from
/// stale or bad-tick data.
pub const DEFAULT_MAX_ROI: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Default staleness window for accepted opportunities.
pub const DEFAULT_STALENESS_WINDOW: Duration = Duration::from_secs(300);

/// Why an opportunity was not accepted. Rule order matters: the first
/// failing rule decides the reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("ROI too high")]
    RoiTooHigh,
    #[error("invalid price")]
    InvalidPrice,
    #[error("negative profit")]
    NegativeProfit,
    #[error("expired data")]
    ExpiredData,
}

/// Validates a candidate opportunity, short-circuiting on the first
/// failing rule: implausible ROI, then price sanity, then profitability,
/// then staleness.
pub fn validate(
    opportunity: &Opportunity,
    max_roi: Decimal,
    staleness_window: Duration,
) -> Result<(), Rejection> {
    if opportunity.roi_percent > max_roi {
        return Err(Rejection::RoiTooHigh);
    }
    if opportunity.buy_price <= Decimal::ZERO || opportunity.sell_price <= Decimal::ZERO {
        return Err(Rejection::InvalidPrice);
    }
    if opportunity.net_profit <= Decimal::ZERO {
        return Err(Rejection::NegativeProfit);
    }
    if opportunity.is_stale(staleness_window) {
        return Err(Rejection::ExpiredData);
    }
    Ok(())
}

/// Staleness check used by polling loops to drop quotes before they reach
/// the pipeline. A malformed timestamp counts as expired (fail-safe).
pub fn is_expired(timestamp: &str, max_age: Duration) -> bool {
    let Ok(parsed) = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT) else {
        return true;
    };
    let age = Utc::now().naive_utc().signed_duration_since(parsed);
    age.num_seconds() > max_age.as_secs() as i64
}
