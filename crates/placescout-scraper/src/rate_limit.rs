//! Retry utilities for the Places and summary clients.
//!
//! Retries are opt-in: with `max_retries = 0` (the default) every request is
//! attempted once. When enabled, only transient failures (429 responses and
//! network errors) are retried, with exponential backoff that never undercuts
//! a 429's `Retry-After`.

use std::future::Future;
use std::time::Duration;

use crate::error::ScraperError;

/// Returns `true` if `err` represents a transient condition that should be
/// retried after a backoff delay.
///
/// Retriable errors:
/// - [`ScraperError::RateLimited`] — HTTP 429.
/// - [`ScraperError::Http`] — network-level failure (connection reset, timeout, etc.).
///
/// API-level statuses such as `OVER_QUERY_LIMIT` are not retried: the Places
/// API uses that status for exhausted daily quota as well as for bursts, and
/// the two cannot be told apart.
fn is_retriable(err: &ScraperError) -> bool {
    matches!(
        err,
        ScraperError::RateLimited { .. } | ScraperError::Http(_)
    )
}

/// Delay before retry number `attempt + 1`: `backoff_base_secs * 2^attempt`,
/// raised to the server's `Retry-After` when a 429 asked for longer.
fn retry_delay(err: &ScraperError, attempt: u32, backoff_base_secs: u64) -> Duration {
    let backoff_secs = backoff_base_secs.saturating_mul(1u64 << attempt.min(62));
    let secs = match err {
        ScraperError::RateLimited {
            retry_after_secs, ..
        } => backoff_secs.max(*retry_after_secs),
        _ => backoff_secs,
    };
    Duration::from_secs(secs)
}

/// Runs `operation`, retrying transient failures up to `max_retries` extra
/// times. Non-retriable errors, and the last error once retries run out,
/// are returned as-is.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, ScraperError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ScraperError>>,
{
    let mut attempt = 0u32;

    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < max_retries && is_retriable(&err) => err,
            Err(err) => return Err(err),
        };

        let delay = retry_delay(&err, attempt, backoff_base_secs);
        tracing::warn!(
            attempt,
            max_retries,
            delay_secs = delay.as_secs(),
            error = %err,
            "transient request error — retrying"
        );
        tokio::time::sleep(delay).await;
        attempt += 1;
    }
}
