use axum::extract::{Query, State};
use axum::Json;
use azstat_core::navigation::COMPARE_PATH;
use azstat_dashboard::compare::{CompareOutcome, CompareView};
use serde::Deserialize;

use crate::handlers::page::Page;
use crate::middleware::locale::PageLocale;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query params for `GET /{lang}/compare`. Empty values count as unselected.
#[derive(Debug, Default, Deserialize)]
pub struct CompareQuery {
    pub a: Option<String>,
    pub b: Option<String>,
}

/// GET /{lang}/compare -- report selectors, plus the comparison when both
/// `a` and `b` are set.
pub async fn compare_page(
    State(state): State<AppState>,
    PageLocale(locale): PageLocale,
    Query(query): Query<CompareQuery>,
) -> Json<DataResponse<Page<CompareView>>> {
    let flow = state.dashboard.compare_flow();
    flow.mount().await;
    flow.select_a(query.a).await;
    flow.select_b(query.b).await;

    match flow.compare().await {
        CompareOutcome::Compared => tracing::debug!("Comparison rendered"),
        CompareOutcome::Failed(error) => tracing::warn!(%error, "Comparison failed"),
        _ => {}
    }

    Json(DataResponse {
        data: Page::new(
            locale,
            COMPARE_PATH,
            |t| (t.compare.title, t.compare.description),
            flow.view().await,
        ),
    })
}
