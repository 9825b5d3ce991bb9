use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::upload;
use crate::state::AppState;

/// Largest multipart body accepted by the upload endpoint.
pub const MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

/// Upload routes.
///
/// ```text
/// GET     /{lang}                -> upload_page
/// GET     /{lang}/               -> upload_page
/// POST    /{lang}/upload         -> upload_files
/// DELETE  /{lang}/uploads/{id}   -> remove_upload
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{lang}", get(upload::upload_page))
        .route("/{lang}/", get(upload::upload_page))
        .route(
            "/{lang}/upload",
            post(upload::upload_files).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/{lang}/uploads/{id}", delete(upload::remove_upload))
}
