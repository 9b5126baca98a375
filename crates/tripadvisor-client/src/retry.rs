//! Exponential-backoff retries around a single attempt.

use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use tripadvisor_core::{Result, TransportError};

/// Retry budget and backoff for one call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub max_retries: u32,

    /// Delay before the first retry; doubles for each retry after that
    pub base_delay: Duration,
}

impl RetryPolicy {
    /// Create a retry policy
    #[must_use]
    pub const fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    /// A policy that never retries
    #[must_use]
    pub const fn none() -> Self {
        Self::new(0, Duration::ZERO)
    }

    /// Delay after the failed attempt with the given zero-based index
    #[must_use]
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(2u32.saturating_pow(attempt))
    }
}

/// Progress through one call's retry budget
#[derive(Debug, Clone, Copy)]
struct RetryState {
    attempt: u32,
    remaining: u32,
}

impl RetryState {
    const fn new(policy: &RetryPolicy) -> Self {
        Self {
            attempt: 0,
            remaining: policy.max_retries,
        }
    }

    /// Consume one retry, returning the delay to wait before it
    fn next_delay(&mut self, policy: &RetryPolicy) -> Option<Duration> {
        if self.remaining == 0 {
            return None;
        }
        let delay = policy.backoff_for(self.attempt);
        self.remaining -= 1;
        self.attempt += 1;
        Some(delay)
    }
}

/// Run `attempt` until it succeeds, fails for good, or the budget runs out.
///
/// `attempt` receives the zero-based attempt index. Only errors whose
/// [`is_retryable`](tripadvisor_core::TripAdvisorError::is_retryable) flag is
/// set are retried; the error from the last attempt is returned unchanged.
/// Cancelling `cancel` aborts a pending backoff wait.
pub async fn run<T, F, Fut>(
    policy: &RetryPolicy,
    cancel: &CancellationToken,
    mut attempt: F,
) -> Result<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut state = RetryState::new(policy);

    loop {
        let err = match attempt(state.attempt).await {
            Ok(value) => {
                if state.attempt > 0 {
                    debug!(attempts = state.attempt + 1, "succeeded after retrying");
                }
                return Ok(value);
            }
            Err(err) => err,
        };

        if !err.is_retryable() {
            return Err(err);
        }

        let Some(delay) = state.next_delay(policy) else {
            warn!(
                attempts = state.attempt + 1,
                error = %err,
                "retry budget exhausted"
            );
            return Err(err);
        };

        warn!(
            attempt = state.attempt,
            max_retries = policy.max_retries,
            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            error = %err,
            "transient failure, retrying"
        );

        tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(TransportError::cancelled().into()),
            () = tokio::time::sleep(delay) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tripadvisor_core::TripAdvisorError;

    fn timeout() -> TripAdvisorError {
        TransportError::timeout(Duration::from_secs(30)).into()
    }

    #[test]
    fn test_backoff_doubles() {
        let policy = RetryPolicy::new(3, Duration::from_millis(1000));
        assert_eq!(policy.backoff_for(0), Duration::from_millis(1000));
        assert_eq!(policy.backoff_for(1), Duration::from_millis(2000));
        assert_eq!(policy.backoff_for(2), Duration::from_millis(4000));
    }

    #[test]
    fn test_backoff_saturates() {
        let policy = RetryPolicy::new(100, Duration::from_secs(1));
        assert_eq!(policy.backoff_for(64), Duration::from_secs(u64::from(u32::MAX)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_attempts_are_budget_plus_one() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::new(4, Duration::from_millis(10));

        let result: Result<()> = run(&policy, &CancellationToken::new(), |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(timeout()) }
        })
        .await;

        assert_eq!(result.unwrap_err(), timeout());
        assert_eq!(calls.load(Ordering::SeqCst), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_last_error_is_surfaced() {
        let policy = RetryPolicy::new(2, Duration::from_millis(10));

        let result: Result<()> = run(&policy, &CancellationToken::new(), |n| async move {
            Err(TransportError::status(500 + u16::try_from(n).unwrap(), "down").into())
        })
        .await;

        assert_eq!(result.unwrap_err().status_code(), Some(502));
    }

    #[tokio::test(start_paused = true)]
    async fn test_final_error_stops_immediately() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::new(3, Duration::from_millis(10));

        let result: Result<()> = run(&policy, &CancellationToken::new(), |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(TransportError::status(404, "missing").into()) }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_follow_backoff() {
        let policy = RetryPolicy::new(3, Duration::from_millis(100));
        let start = tokio::time::Instant::now();
        let stamps = std::sync::Mutex::new(Vec::new());

        let _: Result<()> = run(&policy, &CancellationToken::new(), |_| {
            stamps.lock().unwrap().push(start.elapsed());
            async { Err(timeout()) }
        })
        .await;

        let stamps = stamps.into_inner().unwrap();
        assert_eq!(
            stamps,
            [
                Duration::ZERO,
                Duration::from_millis(100),
                Duration::from_millis(300),
                Duration::from_millis(700),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_recovers_after_transient_failures() {
        let policy = RetryPolicy::new(2, Duration::from_millis(10));

        let result = run(&policy, &CancellationToken::new(), |n| async move {
            if n < 2 {
                Err(timeout())
            } else {
                Ok(n)
            }
        })
        .await;

        assert_eq!(result.unwrap(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_aborts_backoff() {
        let calls = AtomicU32::new(0);
        let cancel = CancellationToken::new();
        let policy = RetryPolicy::new(3, Duration::from_secs(60));

        let result: Result<()> = run(&policy, &cancel, |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            cancel.cancel();
            async { Err(timeout()) }
        })
        .await;

        assert_eq!(
            result.unwrap_err(),
            TripAdvisorError::from(TransportError::cancelled())
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_no_retries_policy() {
        let calls = AtomicU32::new(0);
        let result: Result<()> = run(&RetryPolicy::none(), &CancellationToken::new(), |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(timeout()) }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
