//! Direct report lookups against the validation backend.

use axum::extract::{Path, Query, State};
use axum::Json;
use azstat_core::report::Report;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

const DEFAULT_SEARCH_LIMIT: u32 = 10;

/// GET /{lang}/reports/{id}
pub async fn get_report(
    State(state): State<AppState>,
    Path((_lang, id)): Path<(String, String)>,
) -> AppResult<Json<DataResponse<Report>>> {
    let report = state.dashboard.backend().get_report(&id).await?;
    Ok(Json(DataResponse { data: report }))
}

/// Query params for `GET /{lang}/search`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub limit: Option<u32>,
}

/// GET /{lang}/search?q=&limit= -- filename search, backend order.
pub async fn search_reports(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<DataResponse<Vec<Report>>>> {
    let q = query.q.trim();
    if q.is_empty() {
        return Err(AppError::BadRequest("Query parameter 'q' is required".into()));
    }

    let limit = query.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
    let reports = state.dashboard.backend().search_reports(q, limit).await?;
    Ok(Json(DataResponse { data: reports }))
}
