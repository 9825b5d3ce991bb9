pub mod compare;
pub mod errors;
pub mod health;
pub mod reports;
pub mod settings;
pub mod statistics;
pub mod upload;

use axum::Router;

use crate::state::AppState;

/// Build the locale-prefixed page route tree.
///
/// Route hierarchy:
///
/// ```text
/// /{lang}                        upload page (GET)
/// /{lang}/upload                 queue files (POST, multipart)
/// /{lang}/uploads/{id}           remove queue entry (DELETE)
///
/// /{lang}/statistics             statistics page (GET)
///
/// /{lang}/errors                 error list page (GET, ?tab=)
/// /{lang}/errors/export          CSV download (GET)
///
/// /{lang}/compare                compare page (GET, ?a=&b=)
///
/// /{lang}/reports/{id}           single report (GET)
/// /{lang}/search                 filename search (GET, ?q=&limit=)
///
/// /{lang}/settings               get, save (GET, PUT)
/// /{lang}/settings/reset         restore defaults (POST)
/// ```
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .merge(upload::router())
        .merge(statistics::router())
        .merge(errors::router())
        .merge(compare::router())
        .merge(reports::router())
        .merge(settings::router())
}
