use axum::routing::get;
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

/// Report lookup routes.
///
/// ```text
/// GET  /{lang}/reports/{id}   -> get_report
/// GET  /{lang}/search         -> search_reports
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{lang}/reports/{id}", get(reports::get_report))
        .route("/{lang}/search", get(reports::search_reports))
}
