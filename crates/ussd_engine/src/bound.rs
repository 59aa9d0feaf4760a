//! Bounded collaborator calls
//!
//! Directory and ledger calls are network-bound with opaque latency; every
//! one of them goes through [`bounded`] so a slow dependency cannot hang a
//! turn past the gateway's own timeout.

use std::future::Future;
use std::time::Duration;

use crate::error::EngineError;

/// Run a collaborator call under `limit`, folding both the collaborator's
/// own error and a timeout into [`EngineError`]. `what` names the call for
/// the timeout message and logs.
pub async fn bounded<F, T, E>(limit: Duration, what: &'static str, fut: F) -> Result<T, EngineError>
where
    F: Future<Output = Result<T, E>>,
    EngineError: From<E>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(EngineError::from(err)),
        Err(_) => {
            tracing::warn!(call = what, ?limit, "collaborator call timed out");
            Err(EngineError::Timeout(what))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn slow_call_times_out() {
        let result: Result<(), EngineError> = bounded(
            Duration::from_millis(10),
            "test.sleep",
            async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok::<_, EngineError>(())
            },
        )
        .await;
        assert!(matches!(result, Err(EngineError::Timeout("test.sleep"))));
    }

    #[tokio::test]
    async fn fast_call_passes_through() {
        let result = bounded(Duration::from_secs(1), "test.ok", async {
            Ok::<_, EngineError>(7)
        })
        .await;
        assert_eq!(result.unwrap(), 7);
    }
}
