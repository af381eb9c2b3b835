//! Rate-limit bookkeeping and pre-emptive throttling.

use std::time::Duration;

/// Quota headers reported by the API on every response.
const LIMIT_HEADER: &str = "x-rate-limit";
const REMAINING_HEADER: &str = "x-rate-limit-remaining";
const RESET_HEADER: &str = "x-rate-limit-reset";

/// Last-observed rate-limit quota, taken from response headers.
///
/// Absent until the first response arrives and overwritten after every
/// response. The transport consults it (read-only) before the next
/// request when pre-emptive throttling is enabled, and uses the reset
/// value to pick the delay before the single automatic retry of a 429
/// response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitState {
    /// Total requests allowed in the current window.
    pub limit: u64,
    /// Requests remaining in the current window.
    pub remaining: u64,
    /// Seconds until the window resets.
    pub reset: u64,
}

impl RateLimitState {
    /// Extracts the rate-limit state from response headers.
    ///
    /// Returns `None` unless both the limit and remaining headers are
    /// present and numeric.
    #[must_use]
    pub fn from_headers(headers: &http::HeaderMap) -> Option<Self> {
        let limit = header_u64(headers, LIMIT_HEADER)?;
        let remaining = header_u64(headers, REMAINING_HEADER)?;
        let reset = header_u64(headers, RESET_HEADER).unwrap_or(0);
        Some(Self {
            limit,
            remaining,
            reset,
        })
    }

    /// Seconds to wait before retrying, read from the reset header of a
    /// 429 response. Missing or malformed headers mean no wait.
    #[must_use]
    pub(crate) fn reset_seconds(headers: &http::HeaderMap) -> u64 {
        header_u64(headers, RESET_HEADER).unwrap_or(0)
    }

    /// Fraction of the quota still available, in `[0.0, 1.0]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn remaining_ratio(&self) -> f64 {
        if self.limit == 0 {
            return 0.0;
        }
        self.remaining as f64 / self.limit as f64
    }
}

fn header_u64(headers: &http::HeaderMap, name: &str) -> Option<u64> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}

/// Configuration for pre-emptive request throttling.
///
/// When the previous response shows the quota nearly exhausted, the
/// transport sleeps briefly before sending the next request, trading a
/// little latency against burning the last requests of the window. This
/// is a cooperative, best-effort guard, not a guarantee.
///
/// The defaults back off in two steps: below 10 % of the window
/// remaining wait 250 ms, below 5 % wait 500 ms.
///
/// # Example
///
/// ```
/// use ontraport::transport::ThrottlePolicy;
/// use std::time::Duration;
///
/// let policy = ThrottlePolicy::new()
///     .with_low_threshold(0.2, Duration::from_millis(100));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ThrottlePolicy {
    /// Remaining-quota ratio below which `critical_delay` applies.
    pub critical_ratio: f64,
    /// Delay when the quota is critically low.
    pub critical_delay: Duration,
    /// Remaining-quota ratio below which `low_delay` applies.
    pub low_ratio: f64,
    /// Delay when the quota is running low.
    pub low_delay: Duration,
}

impl ThrottlePolicy {
    /// Default critical-quota ratio (5 %).
    pub const DEFAULT_CRITICAL_RATIO: f64 = 0.05;

    /// Default delay below the critical ratio.
    pub const DEFAULT_CRITICAL_DELAY: Duration = Duration::from_millis(500);

    /// Default low-quota ratio (10 %).
    pub const DEFAULT_LOW_RATIO: f64 = 0.10;

    /// Default delay below the low ratio.
    pub const DEFAULT_LOW_DELAY: Duration = Duration::from_millis(250);

    /// Creates a policy with the default thresholds and delays.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            critical_ratio: Self::DEFAULT_CRITICAL_RATIO,
            critical_delay: Self::DEFAULT_CRITICAL_DELAY,
            low_ratio: Self::DEFAULT_LOW_RATIO,
            low_delay: Self::DEFAULT_LOW_DELAY,
        }
    }

    /// Sets the critical threshold and its delay.
    #[must_use]
    pub const fn with_critical_threshold(mut self, ratio: f64, delay: Duration) -> Self {
        self.critical_ratio = ratio;
        self.critical_delay = delay;
        self
    }

    /// Sets the low threshold and its delay.
    #[must_use]
    pub const fn with_low_threshold(mut self, ratio: f64, delay: Duration) -> Self {
        self.low_ratio = ratio;
        self.low_delay = delay;
        self
    }

    /// Computes the pre-emptive delay for the given quota state.
    ///
    /// Returns `None` when no throttling is warranted: an untouched
    /// quota (`limit == remaining`), a zero limit, or a comfortable
    /// remaining ratio.
    #[must_use]
    pub fn delay_for(&self, state: RateLimitState) -> Option<Duration> {
        if state.limit == 0 || state.limit == state.remaining {
            return None;
        }
        let ratio = state.remaining_ratio();
        if ratio < self.critical_ratio {
            Some(self.critical_delay)
        } else if ratio < self.low_ratio {
            Some(self.low_delay)
        } else {
            None
        }
    }
}

impl Default for ThrottlePolicy {
    fn default() -> Self {
        Self::new()
    }
}
