//! Retry with exponential back-off and jitter for transient fetch errors.
//!
//! [`retry_with_backoff`] wraps any fallible async operation and retries on
//! transient errors (HTTP 429, network failures, 5xx). Errors that retrying
//! cannot fix — missing credentials, extraction failures, payload errors,
//! deserialization failures, other 4xx — are returned immediately.

use std::future::Future;
use std::time::Duration;

use crate::error::PlatformError;

/// Returns `true` for errors that are worth retrying after a back-off delay.
///
/// **Retriable:**
/// - [`PlatformError::RateLimited`] — HTTP 429; the server asked us to back off.
/// - [`PlatformError::Http`] with a timeout or connect failure.
/// - [`PlatformError::UnexpectedStatus`] with a 5xx status.
///
/// **Not retriable (hard stop):** everything detected before the network call
/// ([`PlatformError::MissingCredential`], [`PlatformError::IdentifierExtraction`]),
/// application-level failures ([`PlatformError::Payload`]), malformed responses
/// ([`PlatformError::Deserialize`]), and non-429 4xx statuses.
pub(crate) fn is_retriable(err: &PlatformError) -> bool {
    match err {
        PlatformError::Http(e) => e.is_timeout() || e.is_connect(),
        PlatformError::RateLimited { .. } => true,
        PlatformError::UnexpectedStatus { status, .. } => *status >= 500,
        PlatformError::MissingCredential { .. }
        | PlatformError::IdentifierExtraction { .. }
        | PlatformError::Payload { .. }
        | PlatformError::Deserialize { .. }
        | PlatformError::InvalidEndpoint { .. } => false,
    }
}

/// Runs `operation` with up to `max_retries` additional attempts on transient errors.
///
/// The wait before the n-th retry is `backoff_base_ms × 2^(n-1)` ± 25 % jitter,
/// capped at 60 s. A 429 carrying a `Retry-After` value longer than the
/// computed back-off stretches the wait to what the server asked for (still
/// capped). Non-retriable errors are returned immediately.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, PlatformError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, PlatformError>>,
{
    const MAX_DELAY_MS: u64 = 60_000;
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                attempt += 1;
                let mut computed = backoff_base_ms.saturating_mul(1u64 << (attempt - 1).min(10));
                if let PlatformError::RateLimited {
                    retry_after_secs, ..
                } = &err
                {
                    computed = computed.max(retry_after_secs.saturating_mul(1000));
                }
                let capped = computed.min(MAX_DELAY_MS);
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss
                )]
                let delay_ms = (capped as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64;
                tracing::warn!(
                    attempt,
                    max_retries,
                    delay_ms,
                    error = %err,
                    "transient platform error — retrying after back-off"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use creatorscope_core::Platform;

    use super::*;

    fn deserialize_err() -> PlatformError {
        let src = serde_json::from_str::<()>("invalid").unwrap_err();
        PlatformError::Deserialize {
            context: "test".to_owned(),
            source: src,
        }
    }

    #[test]
    fn rate_limited_is_retriable() {
        assert!(is_retriable(&PlatformError::RateLimited {
            platform: Platform::Youtube,
            retry_after_secs: 5
        }));
    }

    #[test]
    fn server_error_status_is_retriable() {
        assert!(is_retriable(&PlatformError::UnexpectedStatus {
            status: 503,
            detail: "Service Unavailable".to_owned()
        }));
    }

    #[test]
    fn not_found_status_is_not_retriable() {
        assert!(!is_retriable(&PlatformError::UnexpectedStatus {
            status: 404,
            detail: "Not Found".to_owned()
        }));
    }

    #[test]
    fn missing_credential_is_not_retriable() {
        assert!(!is_retriable(&PlatformError::MissingCredential {
            platform: Platform::Tiktok
        }));
    }

    #[test]
    fn payload_error_is_not_retriable() {
        assert!(!is_retriable(&PlatformError::Payload {
            platform: Platform::Tiktok,
            message: "bad".to_owned()
        }));
    }

    #[test]
    fn deserialize_error_is_not_retriable() {
        assert!(!is_retriable(&deserialize_err()));
    }

    #[tokio::test]
    async fn succeeds_immediately_on_first_try() {
        use std::sync::atomic::{AtomicU32, Ordering};
        use std::sync::Arc;
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff(3, 0, || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Ok::<u32, PlatformError>(42)
            }
        })
        .await;
        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn retries_rate_limited_then_succeeds() {
        use std::sync::atomic::{AtomicU32, Ordering};
        use std::sync::Arc;
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff(3, 0, || {
            let c = Arc::clone(&c);
            async move {
                let attempt = c.fetch_add(1, Ordering::SeqCst);
                if attempt < 2 {
                    Err(PlatformError::RateLimited {
                        platform: Platform::Youtube,
                        retry_after_secs: 0,
                    })
                } else {
                    Ok::<u32, PlatformError>(99)
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), 99);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn does_not_retry_payload_error() {
        use std::sync::atomic::{AtomicU32, Ordering};
        use std::sync::Arc;
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff(3, 0, || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Err::<u32, _>(PlatformError::Payload {
                    platform: Platform::Tiktok,
                    message: "embedded error".to_owned(),
                })
            }
        })
        .await;
        assert_eq!(
            calls.load(Ordering::SeqCst),
            1,
            "payload errors must not be retried"
        );
        assert!(matches!(result, Err(PlatformError::Payload { .. })));
    }

    #[tokio::test]
    async fn propagates_last_error_after_exhausting_retries() {
        use std::sync::atomic::{AtomicU32, Ordering};
        use std::sync::Arc;
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff(2, 0, || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Err::<u32, _>(PlatformError::RateLimited {
                    platform: Platform::Pinterest,
                    retry_after_secs: 0,
                })
            }
        })
        .await;
        // max_retries=2 → 3 total attempts
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert!(matches!(result, Err(PlatformError::RateLimited { .. })));
    }
}
