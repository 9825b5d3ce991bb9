//! Handlers for the validation error list and its CSV export.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::IntoResponse;
use axum::Json;
use azstat_core::findings::{ErrorTab, CSV_FILENAME};
use azstat_core::navigation::ERRORS_PATH;
use azstat_dashboard::error_list::ErrorListView;
use azstat_dashboard::LoadState;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::page::Page;
use crate::middleware::locale::PageLocale;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query params for `GET /{lang}/errors`.
#[derive(Debug, Deserialize)]
pub struct ErrorsQuery {
    #[serde(default)]
    pub tab: ErrorTab,
}

/// GET /{lang}/errors -- the full error set filtered to one tab, with counts.
///
/// An unknown `tab` is rejected with the JSON `BAD_REQUEST` body.
pub async fn errors_page(
    State(state): State<AppState>,
    PageLocale(locale): PageLocale,
    query: Result<Query<ErrorsQuery>, QueryRejection>,
) -> AppResult<Json<DataResponse<Page<LoadState<ErrorListView>>>>> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let flow = state.dashboard.error_list_flow();
    flow.load().await;
    let content = flow.view(query.tab).await;

    Ok(Json(DataResponse {
        data: Page::new(
            locale,
            ERRORS_PATH,
            |t| (t.errors.title, t.errors.description),
            content,
        ),
    }))
}

/// GET /{lang}/errors/export -- the loaded error set as a CSV download.
pub async fn export_errors(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let flow = state.dashboard.error_list_flow();
    flow.load().await;

    let Some(csv) = flow.export_csv().await else {
        return Err(match flow.view(ErrorTab::All).await {
            LoadState::Failed(message) => AppError::Upstream(message),
            _ => AppError::InternalError("Error list did not finish loading".into()),
        });
    };

    tracing::info!(bytes = csv.len(), "Exported validation errors");
    Ok((
        [
            (CONTENT_TYPE, "text/csv".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{CSV_FILENAME}\""),
            ),
        ],
        csv,
    ))
}
