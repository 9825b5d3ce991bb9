pub mod compare;
pub mod errors;
pub mod page;
pub mod reports;
pub mod settings;
pub mod statistics;
pub mod upload;

use axum::http::Uri;

use crate::error::AppError;
use azstat_core::error::CoreError;

/// Fallback for unmatched paths, including unsupported locales.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Page",
        id: uri.path().to_string(),
    })
}
