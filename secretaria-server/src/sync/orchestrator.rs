//! Retrying executor for sync operations
//!
//! Only transient failures are retried: a validation rejection or a missing
//! row will fail identically on every attempt, so retrying it just delays
//! the error.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::AppResult;

/// Retry policy for one sync operation
#[derive(Debug, Clone, Copy)]
pub struct SyncOptions {
    /// Attempts after the first failure
    pub retries: u32,
    /// Delay before the first retry; doubles on each subsequent one
    pub retry_delay: Duration,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            retries: 3,
            retry_delay: Duration::from_secs(2),
        }
    }
}

impl SyncOptions {
    /// No retries at all, for operations the caller wants to fail fast
    pub fn none() -> Self {
        Self {
            retries: 0,
            retry_delay: Duration::ZERO,
        }
    }
}

/// Run `op`, retrying transient failures per `options` with exponential
/// backoff. Non-transient errors are returned immediately.
pub async fn execute<T, F, Fut>(name: &str, options: SyncOptions, mut op: F) -> AppResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = AppResult<T>>,
{
    let mut delay = options.retry_delay;
    let mut attempt = 0u32;

    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_transient() && attempt < options.retries => {
                attempt += 1;
                warn!(
                    target: "sync",
                    "{name} failed (attempt {attempt}/{}), retrying in {delay:?}: {e}",
                    options.retries + 1
                );
                tokio::time::sleep(delay).await;
                delay *= 2;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::AppError;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast() -> SyncOptions {
        SyncOptions {
            retries: 3,
            retry_delay: Duration::from_millis(1),
        }
    }

    #[tokio::test]
    async fn transient_failure_is_retried_until_success() {
        let calls = AtomicU32::new(0);

        let result = execute("test", fast(), || async {
            if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                Err(AppError::remote("connection reset"))
            } else {
                Ok(42)
            }
        })
        .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn non_transient_failure_is_not_retried() {
        let calls = AtomicU32::new(0);

        let result: AppResult<()> = execute("test", fast(), || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(AppError::validation("CPF inválido"))
        })
        .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn retries_are_bounded() {
        let calls = AtomicU32::new(0);

        let result: AppResult<()> = execute("test", fast(), || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(AppError::remote("still down"))
        })
        .await;

        assert!(matches!(result, Err(AppError::RemoteCall(_))));
        // 1 initial + 3 retries
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn zero_retries_fails_on_first_error() {
        let calls = AtomicU32::new(0);

        let result: AppResult<()> = execute("test", SyncOptions::none(), || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(AppError::remote("down"))
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
