//! Retry policy configuration.

use serde::Deserialize;
use std::time::Duration;

use super::duration;
use crate::retry::{DEFAULT_BASE_DELAY, DEFAULT_MAX_DELAY, RetryPolicy};

/// Retry settings for failed external calls.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of retry attempts.
    pub max_attempts: Option<u32>,
    /// Delay before the first retry.
    #[serde(default, with = "duration")]
    pub base_delay: Duration,
    /// Maximum delay between retries.
    #[serde(default, with = "duration")]
    pub max_delay: Duration,
}

impl RetryConfig {
    /// Materializes a backoff policy, substituting defaults for zeros.
    pub fn to_policy(&self) -> RetryPolicy {
        RetryPolicy {
            base_delay: if self.base_delay.is_zero() {
                DEFAULT_BASE_DELAY
            } else {
                self.base_delay.as_secs_f64()
            },
            max_delay: if self.max_delay.is_zero() {
                DEFAULT_MAX_DELAY
            } else {
                self.max_delay.as_secs_f64()
            },
        }
    }
}
