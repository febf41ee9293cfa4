// Retry wrapper for outbound generation calls
//
// Every failure is treated as transient. The n-th retry waits
// `base_delay * n`, so the default policy sleeps 1500ms then 3000ms.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

/// Bounded retry policy with linearly increasing backoff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt; total attempts are `max_retries + 1`
    pub max_retries: u32,

    /// Delay unit multiplied by the retry number
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay: Duration::from_millis(1500),
        }
    }
}

impl RetryPolicy {
    /// Policy that runs the operation exactly once
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            base_delay: Duration::ZERO,
        }
    }

    /// Delay before the given retry (1-based), capped at `Duration::MAX`
    pub fn delay_for(&self, retry: u32) -> Duration {
        self.base_delay.saturating_mul(retry)
    }
}

/// Run `operation` until it succeeds or the policy is exhausted
///
/// The error from the final attempt is returned unchanged; no delay follows it.
pub async fn with_retry<T, E, F, Fut>(policy: &RetryPolicy, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut retry = 0;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) if retry < policy.max_retries => {
                retry += 1;
                let delay = policy.delay_for(retry);
                tracing::warn!(
                    "Gemini API call failed, retrying in {}ms ({}/{}): {}",
                    delay.as_millis(),
                    retry,
                    policy.max_retries,
                    e
                );
                tokio::time::sleep(delay).await;
            }
            Err(e) => return Err(e),
        }
    }
}
