use std::future::Future;
use std::time::Duration;

use crate::domain::common::entities::app_errors::CoreError;

/// Decides whether a failed attempt may be retried.
pub type RetryPredicate = fn(&CoreError) -> bool;

fn always_retry(_: &CoreError) -> bool {
    true
}

/// Bounded attempts with a constant delay between them.
///
/// No backoff and no jitter: every retry waits exactly `delay`. Each call to
/// [`RetryPolicy::run`] starts with a fresh budget.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: usize,
    pub delay: Duration,
    pub retryable: RetryPredicate,
}

impl RetryPolicy {
    /// Fixed delay policy that retries every failure.
    pub fn fixed(max_attempts: usize, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
            retryable: always_retry,
        }
    }

    pub fn with_retryable(mut self, retryable: RetryPredicate) -> Self {
        self.retryable = retryable;
        self
    }

    /// Attempt budget, never below one.
    pub fn attempts(&self) -> usize {
        self.max_attempts.max(1)
    }

    /// Runs `operation` until it succeeds, a non-retryable error is returned,
    /// or the attempt budget is spent.
    ///
    /// `operation` receives the 1-based attempt number. No delay follows the
    /// final attempt.
    pub async fn run<T, F, Fut>(&self, mut operation: F) -> Result<T, CoreError>
    where
        F: FnMut(usize) -> Fut,
        Fut: Future<Output = Result<T, CoreError>>,
    {
        let attempts = self.attempts();
        let mut attempt = 0;

        loop {
            attempt += 1;

            match operation(attempt).await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    tracing::error!("Attempt {} failed: {}", attempt, err);

                    if !(self.retryable)(&err) {
                        return Err(err);
                    }

                    if attempt >= attempts {
                        return Err(CoreError::RetriesExhausted { attempts: attempt });
                    }

                    tokio::time::sleep(self.delay).await;
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::fixed(3, Duration::from_secs(5))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tokio::time::Instant;

    use super::*;

    fn failure(attempt: usize) -> CoreError {
        CoreError::ExternalServiceError(format!("attempt {attempt} refused"))
    }

    #[tokio::test(start_paused = true)]
    async fn test_succeeds_on_third_attempt_after_two_delays() {
        let policy = RetryPolicy::fixed(3, Duration::from_secs(5));
        let calls = AtomicUsize::new(0);
        let start = Instant::now();

        let result = policy
            .run(|attempt| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if attempt < 3 {
                        Err(failure(attempt))
                    } else {
                        Ok(format!("payload {attempt}"))
                    }
                }
            })
            .await;

        assert_eq!(result, Ok("payload 3".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 3);

        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(10));
        assert!(elapsed < Duration::from_secs(15));
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhaustion_reports_attempt_count() {
        let policy = RetryPolicy::fixed(3, Duration::from_secs(5));
        let calls = AtomicUsize::new(0);

        let result: Result<(), CoreError> = policy
            .run(|attempt| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move { Err(failure(attempt)) }
            })
            .await;

        assert_eq!(result, Err(CoreError::RetriesExhausted { attempts: 3 }));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_success_skips_delay() {
        let policy = RetryPolicy::fixed(3, Duration::from_secs(5));
        let start = Instant::now();

        let result = policy.run(|_| async { Ok::<_, CoreError>(42) }).await;

        assert_eq!(result, Ok(42));
        assert!(start.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_retryable_error_returns_immediately() {
        let policy = RetryPolicy::fixed(3, Duration::from_secs(5))
            .with_retryable(|err| !matches!(err, CoreError::Upstream(_)));
        let calls = AtomicUsize::new(0);

        let result: Result<(), CoreError> = policy
            .run(|_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(CoreError::Upstream("Model is loading".to_string())) }
            })
            .await;

        assert_eq!(result, Err(CoreError::Upstream("Model is loading".to_string())));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_zero_attempts_still_tries_once() {
        let policy = RetryPolicy::fixed(0, Duration::ZERO);
        assert_eq!(policy.attempts(), 1);
    }

    #[test]
    fn test_default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.delay, Duration::from_secs(5));
    }
}
