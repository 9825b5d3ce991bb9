use std::future::Future;

use azstat_client::ApiError;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

/// Why a flow-scoped backend call did not produce a value.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// The owning flow was torn down before the call resolved.
    #[error("Request cancelled")]
    Cancelled,

    #[error(transparent)]
    Backend(#[from] ApiError),
}

/// Run `request` until it resolves or `cancel` fires, whichever is first.
///
/// Cancellation wins ties, so a torn-down flow never observes a late result.
pub async fn scoped<T, F>(cancel: &CancellationToken, request: F) -> Result<T, FlowError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(FlowError::Cancelled),
        result = request => result.map_err(FlowError::from),
    }
}

/// Load state of a page section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    /// Display string of the failure.
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> LoadState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use assert_matches::assert_matches;

    use super::*;

    #[tokio::test]
    async fn resolved_request_passes_through() {
        let cancel = CancellationToken::new();
        let result = scoped(&cancel, async { Ok::<_, ApiError>(7) }).await;
        assert_matches!(result, Ok(7));
    }

    #[tokio::test]
    async fn backend_error_is_wrapped() {
        let cancel = CancellationToken::new();
        let result: Result<(), _> = scoped(&cancel, async {
            Err(ApiError::Api {
                status: 503,
                body: "down".into(),
            })
        })
        .await;
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "API Error: 503 - down");
    }

    #[tokio::test]
    async fn cancelled_token_wins_over_pending_request() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let result = scoped(&cancel, async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok::<_, ApiError>(())
        })
        .await;
        assert_matches!(result, Err(FlowError::Cancelled));
    }

    #[test]
    fn load_state_serializes_with_tag() {
        let ready: LoadState<u32> = LoadState::Ready(3);
        assert_eq!(
            serde_json::to_value(&ready).unwrap(),
            serde_json::json!({ "state": "ready", "data": 3 })
        );
        let loading: LoadState<u32> = LoadState::Loading;
        assert_eq!(
            serde_json::to_value(&loading).unwrap(),
            serde_json::json!({ "state": "loading" })
        );
    }
}
