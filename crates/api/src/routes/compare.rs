use axum::routing::get;
use axum::Router;

use crate::handlers::compare;
use crate::state::AppState;

/// ```text
/// GET  /{lang}/compare   -> compare_page
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{lang}/compare", get(compare::compare_page))
}
