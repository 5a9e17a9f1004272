//! Deadline and cancellation helpers.

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::error::RelayError;

/// Wrap a future with a timeout.
pub async fn with_timeout<T>(
    duration: Duration,
    future: impl Future<Output = Result<T, RelayError>>,
) -> Result<T, RelayError> {
    match tokio::time::timeout(duration, future).await {
        Ok(result) => result,
        Err(_) => Err(RelayError::DeadlineExceeded(duration.as_millis() as u64)),
    }
}

/// Race a future against an optional deadline and a cancellation token.
///
/// The future is dropped as soon as either fires.
pub async fn abortable<T>(
    deadline: Option<Duration>,
    cancel: &CancellationToken,
    future: impl Future<Output = Result<T, RelayError>>,
) -> Result<T, RelayError> {
    let bounded = async {
        match deadline {
            Some(duration) => with_timeout(duration, future).await,
            None => future.await,
        }
    };

    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(RelayError::Cancelled),
        result = bounded => result,
    }
}
