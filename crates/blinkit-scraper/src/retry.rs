//! Paced retry with exponential backoff for listing fetches.
//!
//! Every attempt, the first included, waits a fixed pacing delay before it
//! runs. A failed attempt with attempts remaining additionally waits
//! `backoff_factor_secs * 2^(attempt-1)` seconds, except after an empty
//! response body, which retries after the pacing delay alone. Exhaustion is not an error:
//! [`retry_with_backoff`] returns `None` so one failing task never aborts a run.
//!
//! # Schedule (`request_delay = 3 s`, `backoff_factor_secs = 2`, 3 attempts)
//!
//! | Attempt | Wait before attempt | Wait after failure |
//! |---------|---------------------|--------------------|
//! | 1       | 3 s                 | 2 s                |
//! | 2       | 3 s                 | 4 s                |
//! | 3       | 3 s                 | none (exhausted)   |

use std::future::Future;
use std::time::Duration;

use blinkit_core::AppConfig;

use crate::error::ScraperError;

/// Attempt budget and delays for one task.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Values below 1 are treated as 1.
    pub attempts: u32,
    /// Pacing delay before every attempt.
    pub request_delay: Duration,
    /// Backoff base in seconds.
    pub backoff_factor_secs: f64,
}

impl RetryPolicy {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            attempts: config.retry_attempts,
            request_delay: config.request_delay(),
            backoff_factor_secs: config.retry_backoff_factor,
        }
    }

    /// Wait after failed attempt number `attempt` (1-based).
    #[must_use]
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        if self.backoff_factor_secs <= 0.0 {
            return Duration::ZERO;
        }
        let exponent = i32::try_from(attempt.saturating_sub(1)).unwrap_or(i32::MAX);
        Duration::try_from_secs_f64(self.backoff_factor_secs * 2f64.powi(exponent))
            .unwrap_or(Duration::MAX)
    }
}

/// Runs `operation` up to `policy.attempts` times.
///
/// Returns `Some(value)` from the first successful attempt, or `None` after
/// every attempt has failed. `context` labels the log events.
pub async fn retry_with_backoff<T, F, Fut>(
    policy: &RetryPolicy,
    context: &str,
    mut operation: F,
) -> Option<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ScraperError>>,
{
    let max_attempts = policy.attempts.max(1);

    for attempt in 1..=max_attempts {
        if !policy.request_delay.is_zero() {
            tokio::time::sleep(policy.request_delay).await;
        }

        match operation().await {
            Ok(value) => {
                tracing::debug!(context, attempt, max_attempts, "attempt succeeded");
                return Some(value);
            }
            Err(err) if attempt < max_attempts => {
                let delay = if err.skips_backoff() {
                    Duration::ZERO
                } else {
                    policy.backoff_delay(attempt)
                };
                tracing::warn!(
                    context,
                    attempt,
                    max_attempts,
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    error = %err,
                    "attempt failed, retrying"
                );
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
            }
            Err(err) => {
                tracing::warn!(
                    context,
                    attempt,
                    max_attempts,
                    error = %err,
                    "attempt failed"
                );
            }
        }
    }

    tracing::error!(context, max_attempts, "all retries failed");
    None
}
