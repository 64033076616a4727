//! Generic retry with exponential backoff.
//!
//! Reserved for future provider API calls; the scaffolding path itself never
//! retries.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tracing::warn;

/// Invoke `op` up to `max_attempts` times, waiting `base_delay * 2^(n-1)`
/// after the n-th failure. The final error is returned unchanged.
pub async fn retry_async<T, E, F, Fut>(
    mut op: F,
    max_attempts: u32,
    base_delay: Duration,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(e) => {
                let wait = base_delay * 2u32.pow(attempt - 1);
                warn!(
                    "Attempt {} failed: {}. Retrying in {:?}...",
                    attempt, e, wait
                );
                tokio::time::sleep(wait).await;
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn test_succeeds_after_failures() {
        let calls = AtomicU32::new(0);
        let result = retry_async(
            || {
                let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                async move {
                    if n < 3 {
                        Err("transient")
                    } else {
                        Ok(n)
                    }
                }
            },
            5,
            Duration::from_millis(1),
        )
        .await;

        assert_eq!(result, Ok(3));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_exhausts_attempts_and_returns_last_error() {
        let calls = AtomicU32::new(0);
        let result: Result<(), &str> = retry_async(
            || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err("always") }
            },
            3,
            Duration::from_millis(1),
        )
        .await;

        assert_eq!(result, Err("always"));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_first_success_returns_immediately() {
        let result: Result<&str, &str> =
            retry_async(|| async { Ok("done") }, 3, Duration::from_millis(1)).await;
        assert_eq!(result, Ok("done"));
    }
}
