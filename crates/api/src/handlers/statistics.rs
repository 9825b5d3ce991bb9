use axum::extract::State;
use axum::Json;
use azstat_core::navigation::STATISTICS_PATH;
use azstat_dashboard::statistics::StatisticsView;
use azstat_dashboard::LoadState;

use crate::handlers::page::Page;
use crate::middleware::locale::PageLocale;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /{lang}/statistics -- counters, formatted rates and recent reports.
///
/// A backend failure is part of the page (`state: failed`), not an HTTP error.
pub async fn statistics_page(
    State(state): State<AppState>,
    PageLocale(locale): PageLocale,
) -> Json<DataResponse<Page<LoadState<StatisticsView>>>> {
    let content = state.dashboard.statistics_flow().load().await;

    Json(DataResponse {
        data: Page::new(
            locale,
            STATISTICS_PATH,
            |t| (t.statistics.title, t.statistics.description),
            content,
        ),
    })
}
