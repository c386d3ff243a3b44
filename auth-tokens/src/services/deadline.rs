use std::future::Future;
use std::time::Duration;

use crate::errors::AuthError;

/// Run a store call under `deadline`. An elapsed deadline becomes
/// [`AuthError::OperationCancelled`]: the effect may or may not have happened.
pub(crate) async fn with_deadline<T, E, F>(
    deadline: Duration,
    operation: &'static str,
    fut: F,
) -> Result<T, AuthError>
where
    F: Future<Output = Result<T, E>>,
    E: Into<AuthError>,
{
    match tokio::time::timeout(deadline, fut).await {
        Ok(result) => result.map_err(Into::into),
        Err(_) => {
            log::warn!("{operation} did not complete within {deadline:?}");
            Err(AuthError::OperationCancelled)
        }
    }
}
