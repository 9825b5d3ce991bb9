//! Handlers for dashboard preferences.
//!
//! Settings live in memory for the lifetime of the server and are never
//! forwarded to the validation backend.

use axum::extract::State;
use axum::Json;
use azstat_core::navigation::SETTINGS_PATH;
use azstat_core::settings::Settings;

use crate::error::AppResult;
use crate::handlers::page::Page;
use crate::middleware::locale::PageLocale;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /{lang}/settings
pub async fn settings_page(
    State(state): State<AppState>,
    PageLocale(locale): PageLocale,
) -> Json<DataResponse<Page<Settings>>> {
    let current = state.settings.read().await.clone();

    Json(DataResponse {
        data: Page::new(
            locale,
            SETTINGS_PATH,
            |t| (t.settings.title, t.settings.description),
            current,
        ),
    })
}

/// PUT /{lang}/settings -- validate and replace the stored settings.
pub async fn save_settings(
    State(state): State<AppState>,
    Json(input): Json<Settings>,
) -> AppResult<Json<DataResponse<Settings>>> {
    let settings = input.checked()?;
    *state.settings.write().await = settings.clone();
    tracing::info!(company = %settings.company_name, "Settings saved");
    Ok(Json(DataResponse { data: settings }))
}

/// POST /{lang}/settings/reset -- restore defaults.
pub async fn reset_settings(State(state): State<AppState>) -> Json<DataResponse<Settings>> {
    let defaults = Settings::default();
    *state.settings.write().await = defaults.clone();
    tracing::info!("Settings reset to defaults");
    Json(DataResponse { data: defaults })
}
