//! Request deadline.

use std::future::Future;
use std::time::Duration;

use common::{AppError, AppResult};

/// Race `request` against a timer. Whichever finishes second is dropped.
///
/// Expiry is reported as a network error so callers treat a hung server
/// exactly like an unreachable one.
pub async fn with_deadline<F, T>(deadline: Duration, request: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    tokio::select! {
        result = request => result,
        _ = tokio::time::sleep(deadline) => Err(AppError::network(format!(
            "request timed out after {} ms",
            deadline.as_millis()
        ))),
    }
}
