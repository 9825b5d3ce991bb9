use axum::routing::get;
use axum::Router;

use crate::handlers::errors;
use crate::state::AppState;

/// Error list routes.
///
/// ```text
/// GET  /{lang}/errors          -> errors_page
/// GET  /{lang}/errors/export   -> export_errors
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{lang}/errors", get(errors::errors_page))
        .route("/{lang}/errors/export", get(errors::export_errors))
}
