//! Handlers for the upload page and the upload queue.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use azstat_client::UploadPayload;
use azstat_core::error::CoreError;
use azstat_core::navigation::UPLOAD_PATH;
use azstat_core::upload::{format_file_size, UploadedFile};
use azstat_dashboard::notifications::Toast;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::handlers::page::Page;
use crate::middleware::locale::PageLocale;
use crate::response::DataResponse;
use crate::state::AppState;

/// Multipart field name carrying each file.
pub const FILE_FIELD: &str = "file";

/// One queue entry with its human-readable size.
#[derive(Debug, Serialize)]
pub struct UploadEntry {
    #[serde(flatten)]
    pub file: UploadedFile,
    pub size_label: String,
}

impl From<UploadedFile> for UploadEntry {
    fn from(file: UploadedFile) -> Self {
        Self {
            size_label: format_file_size(file.size),
            file,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UploadPage {
    pub files: Vec<UploadEntry>,
    /// Most recent toasts, oldest first.
    pub toasts: Vec<Toast>,
}

/// GET /{lang} -- the upload queue and recent toasts.
pub async fn upload_page(
    State(state): State<AppState>,
    PageLocale(locale): PageLocale,
) -> Json<DataResponse<Page<UploadPage>>> {
    let dashboard = &state.dashboard;
    let content = UploadPage {
        files: dashboard
            .uploads()
            .files()
            .await
            .into_iter()
            .map(UploadEntry::from)
            .collect(),
        toasts: dashboard.notifications().recent(),
    };

    Json(DataResponse {
        data: Page::new(
            locale,
            UPLOAD_PATH,
            |t| (t.upload.title, t.upload.description),
            content,
        ),
    })
}

/// POST /{lang}/upload -- queue every `file` field and start uploading.
///
/// Returns the queued entries (all `uploading`) without waiting for the
/// backend. Other fields are ignored.
pub async fn upload_files(
    State(state): State<AppState>,
    PageLocale(locale): PageLocale,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<Vec<UploadEntry>>>)> {
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let name = field.file_name().unwrap_or("unknown").to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        files.push(UploadPayload {
            name,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    if files.is_empty() {
        return Err(AppError::BadRequest(format!(
            "Expected at least one '{FILE_FIELD}' field"
        )));
    }

    let queued = state.dashboard.uploads().add_files(locale, files).await;
    tracing::info!(count = queued.len(), %locale, "Files queued for upload");

    Ok((
        StatusCode::ACCEPTED,
        Json(DataResponse {
            data: queued.into_iter().map(UploadEntry::from).collect(),
        }),
    ))
}

/// DELETE /{lang}/uploads/{id} -- drop an entry from the queue.
pub async fn remove_upload(
    State(state): State<AppState>,
    Path((_lang, id)): Path<(String, Uuid)>,
) -> AppResult<StatusCode> {
    match state.dashboard.uploads().remove(id).await {
        Some(entry) => {
            tracing::info!(upload_id = %id, file = %entry.name, "Upload entry removed");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(AppError::Core(CoreError::NotFound {
            entity: "Upload",
            id: id.to_string(),
        })),
    }
}
