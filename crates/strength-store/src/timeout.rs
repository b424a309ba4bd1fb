//! Caller-supplied deadline around collaborator I/O.

use std::future::Future;
use std::time::Duration;

use strength_core::errors::{StoreError, StrengthResult};

/// Await `fut`, failing with `StoreError::Timeout` after `millis`.
pub async fn with_timeout<T, F>(operation: &str, millis: u64, fut: F) -> StrengthResult<T>
where
    F: Future<Output = StrengthResult<T>>,
{
    match tokio::time::timeout(Duration::from_millis(millis), fut).await {
        Ok(result) => result,
        Err(_) => Err(StoreError::Timeout {
            operation: operation.to_string(),
            millis,
        }
        .into()),
    }
}
