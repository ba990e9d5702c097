//! Exponential backoff with jitter for retried external calls.
//!
//! The polling loop around each venue fetch owns the retry loop itself;
//! this module only computes the delays.

use rand::Rng;
use std::time::Duration;

/// Default delay before the first retry, in seconds.
pub const DEFAULT_BASE_DELAY: f64 = 1.0;

/// Default cap on the computed delay, in seconds.
pub const DEFAULT_MAX_DELAY: f64 = 60.0;

/// Fraction of the delay used as the jitter range.
const JITTER_FRACTION: f64 = 0.1;

/// Computes the backoff delay for the given retry attempt, in seconds.
///
/// `min(max_delay, base_delay * 2^retry_count)` plus jitter drawn
/// uniformly from `[0, 0.1 * delay)` to avoid thundering herds. The
/// result is non-decreasing in `retry_count` up to the cap and always
/// below `max_delay * 1.1`.
pub fn backoff_delay(retry_count: u32, base_delay: f64, max_delay: f64) -> f64 {
    // Clamp the exponent so very large counts cannot wrap negative when
    // converted to i32; the cap saturates to the max delay anyway.
    let exponential = base_delay * 2f64.powi(retry_count.min(1024) as i32);
    let delay = exponential.min(max_delay);
    let jitter = delay * JITTER_FRACTION * rand::thread_rng().r#gen::<f64>();
    delay + jitter
}

/// Backoff policy carrying its own bounds; built from
/// [`crate::config::RetryConfig`].
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub base_delay: f64,
    pub max_delay: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            base_delay: DEFAULT_BASE_DELAY,
            max_delay: DEFAULT_MAX_DELAY,
        }
    }
}

impl RetryPolicy {
    /// Delay before the given retry attempt.
    pub fn delay(&self, retry_count: u32) -> Duration {
        Duration::from_secs_f64(backoff_delay(retry_count, self.base_delay, self.max_delay))
    }
}
