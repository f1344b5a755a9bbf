use std::{future::Future, time::Duration};

use tokio::time::sleep;

use crate::{catalog::CatalogError, warning};

/// Retries a rate-limited operation this many additional times by default.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Fallback wait when the catalog sends no `Retry-After` hint.
pub const DEFAULT_BASE_WAIT: Duration = Duration::from_secs(2);

/// Wait hints above this many seconds are considered abnormal.
const ABNORMAL_WAIT_SECS: u64 = 120;

/// Runs a catalog operation, retrying on rate-limit errors.
///
/// Invokes `operation`; when it fails with [`CatalogError::RateLimited`] the
/// executor sleeps for the server's `retry_after` hint (or `base_wait` if no
/// hint was sent) and tries again, up to `max_retries` additional attempts.
/// Any other error is surfaced immediately without a retry. Once the retry
/// budget is exhausted the last rate-limit error is returned to the caller;
/// it is fatal at that point, not swallowed.
///
/// # Arguments
///
/// * `operation` - Zero-argument closure producing the remote call future;
///   it is re-invoked for every attempt
/// * `max_retries` - Number of additional attempts after the first
/// * `base_wait` - Wait used only when the catalog gives no hint
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(T)` - The wrapped operation's result
/// - `Err(CatalogError)` - The first non-rate-limit error, or the last
///   rate-limit error after the attempt budget is spent
///
/// # Rate Limiting
///
/// The sleep uses `tokio::time::sleep`, so a waiting task never blocks the
/// other in-flight catalog calls of the same analytics run. A hint above
/// 120 seconds is honored but logged as abnormal.
///
/// # Example
///
/// ```
/// let genres = execute_with_retry(
///     || client.artist_genres("4NHQUGzhtTLFvgF5SZesLK"),
///     DEFAULT_MAX_RETRIES,
///     DEFAULT_BASE_WAIT,
/// )
/// .await?;
/// ```
pub async fn execute_with_retry<T, F, Fut>(
    mut operation: F,
    max_retries: u32,
    base_wait: Duration,
) -> Result<T, CatalogError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, CatalogError>>,
{
    let mut attempts: u32 = 0;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(CatalogError::RateLimited { retry_after }) => {
                if attempts >= max_retries {
                    return Err(CatalogError::RateLimited { retry_after });
                }
                attempts += 1;

                let wait = match retry_after {
                    Some(secs) => {
                        if secs > ABNORMAL_WAIT_SECS {
                            warning!(
                                "Retry after has reached an abnormal high of {} seconds.",
                                secs
                            );
                        }
                        Duration::from_secs(secs)
                    }
                    None => base_wait,
                };

                sleep(wait).await;
            }
            Err(err) => return Err(err), // propagate other errors
        }
    }
}
