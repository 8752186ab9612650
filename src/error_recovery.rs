// src/error_recovery.rs
//! Retry with exponential backoff for API operations.

use crate::constants::{RETRY_INITIAL_DELAY, RETRY_MAX_ATTEMPTS, RETRY_MAX_DELAY};
use crate::error::AppError;
use std::time::Duration;

/// How many times to try a request and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: RETRY_MAX_ATTEMPTS,
            initial_delay: RETRY_INITIAL_DELAY,
            max_delay: RETRY_MAX_DELAY,
        }
    }
}

/// Retries an async operation with exponential backoff.
///
/// Only errors accepted by `should_retry` are retried; anything else is
/// returned straight away.
pub async fn retry_with_backoff<F, T, Fut, P>(
    mut operation: F,
    policy: RetryPolicy,
    should_retry: P,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, AppError>>,
    P: Fn(&AppError) -> bool,
{
    let mut delay = policy.initial_delay;
    let mut attempt = 1;

    loop {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(e) if should_retry(&e) && attempt < policy.max_attempts => {
                log::warn!(
                    "Attempt {} failed ({}), retrying after {:?}",
                    attempt,
                    e,
                    delay
                );
                tokio::time::sleep(delay).await;

                // Exponential backoff with cap
                delay = std::cmp::min(delay * 2, policy.max_delay);
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotionErrorCode;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn api_error(code: NotionErrorCode) -> AppError {
        AppError::NotionApi {
            code,
            message: String::new(),
            status: 429,
            request_id: None,
        }
    }

    fn fast_policy() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 3,
            initial_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(2),
        }
    }

    #[tokio::test]
    async fn test_retries_transient_errors_until_success() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let result = retry_with_backoff(
            move || async move {
                if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                    Err(api_error(NotionErrorCode::RateLimited))
                } else {
                    Ok("done")
                }
            },
            fast_policy(),
            AppError::is_retryable,
        )
        .await;

        assert_eq!(result.unwrap(), "done");
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_attempts() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let result: Result<(), AppError> = retry_with_backoff(
            move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(api_error(NotionErrorCode::ServiceUnavailable))
            },
            fast_policy(),
            AppError::is_retryable,
        )
        .await;

        assert!(result.is_err());
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_permanent_errors_are_not_retried() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let result: Result<(), AppError> = retry_with_backoff(
            move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(api_error(NotionErrorCode::ObjectNotFound))
            },
            fast_policy(),
            AppError::is_retryable,
        )
        .await;

        assert!(result.is_err());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_predicate_decides_what_is_retried() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let result: Result<(), AppError> = retry_with_backoff(
            move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(api_error(NotionErrorCode::InternalError))
            },
            fast_policy(),
            AppError::was_not_processed,
        )
        .await;

        assert!(result.is_err());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
