use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the validation backend answered its health probe.
    pub backend_healthy: bool,
}

/// GET /health -- returns service and backend health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let backend_healthy = match state.dashboard.backend().health().await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Backend health probe failed");
            false
        }
    };

    let status = if backend_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        backend_healthy,
    })
}

/// Mount health check routes (root level, outside the locale prefix).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
