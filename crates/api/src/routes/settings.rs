use axum::routing::{get, post};
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Settings routes.
///
/// ```text
/// GET   /{lang}/settings         -> settings_page
/// PUT   /{lang}/settings         -> save_settings
/// POST  /{lang}/settings/reset   -> reset_settings
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{lang}/settings",
            get(settings::settings_page).put(settings::save_settings),
        )
        .route("/{lang}/settings/reset", post(settings::reset_settings))
}
