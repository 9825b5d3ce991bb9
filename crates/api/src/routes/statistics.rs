use axum::routing::get;
use axum::Router;

use crate::handlers::statistics;
use crate::state::AppState;

/// ```text
/// GET  /{lang}/statistics   -> statistics_page
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{lang}/statistics", get(statistics::statistics_page))
}
