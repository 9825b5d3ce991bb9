//! Locale-prefix routing for page paths.

use axum::extract::{FromRequestParts, Request};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use azstat_core::error::CoreError;
use azstat_core::locale::{self, Locale, LocaleDecision};

use crate::error::AppError;

/// Redirect page paths without a locale segment to the default locale.
///
/// Excluded paths (`/api`, static assets, `/health`) and paths that already
/// carry a supported locale pass through untouched. The query string is
/// preserved on redirect.
pub async fn redirect_unprefixed(request: Request, next: Next) -> Response {
    let decision = locale::resolve(request.uri().path(), request.uri().query());

    match decision {
        LocaleDecision::PassThrough => next.run(request).await,
        LocaleDecision::Redirect(target) => {
            tracing::debug!(from = %request.uri(), to = %target, "Redirecting to locale-prefixed path");
            Redirect::temporary(&target).into_response()
        }
    }
}

/// The locale of the page being served, taken from the first path segment.
///
/// ```ignore
/// async fn my_page(PageLocale(locale): PageLocale) -> AppResult<Json<()>> {
///     tracing::info!(%locale, "rendering page");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PageLocale(pub Locale);

impl<S: Send + Sync> FromRequestParts<S> for PageLocale {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let path = parts.uri.path();
        locale::locale_of(path).map(PageLocale).ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Locale",
                id: path.trim_start_matches('/').split('/').next().unwrap_or_default().to_string(),
            })
        })
    }
}
