//! HTTP implementation of [`ReportBackend`] using [`reqwest`].

use async_trait::async_trait;
use azstat_core::compare::CompareResult;
use azstat_core::findings::{ErrorFilter, ValidationError};
use azstat_core::report::{Report, ReportFilter};
use azstat_core::statistics::Statistics;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::backend::{BackendHealth, ReportBackend, UploadPayload};

/// Path the error list is read from.
///
/// The backend has no dedicated errors endpoint today; the dashboard reads
/// the report listing. Override with [`ReportApi::with_errors_path`] once a
/// real one exists.
pub const DEFAULT_ERRORS_PATH: &str = "/api/reports";

/// HTTP client for the validation backend.
#[derive(Debug, Clone)]
pub struct ReportApi {
    client: reqwest::Client,
    api_url: String,
    errors_path: String,
}

/// Errors from the backend REST layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code.
    #[error("API Error: {status} - {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The upload endpoint returned a non-2xx status code.
    #[error("Upload failed: {status} - {body}")]
    Upload { status: u16, body: String },

    /// A 2xx response whose body did not match the expected shape.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status of a backend rejection, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::Upload { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            Self::Decode(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// List endpoints answer either with a bare array or with an envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListPayload<T> {
    Bare(Vec<T>),
    Reports { reports: Vec<T> },
    Results { results: Vec<T> },
    Data { data: Vec<T> },
}

impl<T> ListPayload<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Self::Bare(items)
            | Self::Reports { reports: items }
            | Self::Results { results: items }
            | Self::Data { data: items } => items,
        }
    }
}

impl ReportApi {
    /// Create a client for the backend at `api_url`, e.g. `http://localhost:8000`.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            errors_path: DEFAULT_ERRORS_PATH.to_string(),
        }
    }

    /// Read validation errors from `path` instead of [`DEFAULT_ERRORS_PATH`].
    pub fn with_errors_path(mut self, path: impl Into<String>) -> Self {
        self.errors_path = path.into();
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_url, endpoint)
    }

    // ---- private helpers ----

    /// GET `endpoint` with `query` and decode the JSON body.
    ///
    /// Failures are logged here, once, before being returned.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let result = self.fetch_json(endpoint, query).await;

        if let Err(e) = &result {
            tracing::error!(endpoint, error = %e, "API request failed");
        }
        result
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .get(self.url(endpoint))
            .query(query)
            .send()
            .await?;
        let response =
            Self::ensure_success(response, |status, body| ApiError::Api { status, body }).await?;
        Self::decode(response).await
    }

    async fn send_upload(&self, file: UploadPayload) -> Result<Report, ApiError> {
        let mut part = reqwest::multipart::Part::bytes(file.bytes).file_name(file.name);
        if !file.content_type.is_empty() {
            part = part.mime_str(&file.content_type)?;
        }
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(self.url("/api/upload"))
            .multipart(form)
            .send()
            .await?;
        let response =
            Self::ensure_success(response, |status, body| ApiError::Upload { status, body })
                .await?;
        Self::decode(response).await
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, ApiError> {
        let payload: ListPayload<T> = self.get_json(endpoint, query).await?;
        Ok(payload.into_vec())
    }

    /// Ensure the response has a success status code. On failure, the
    /// status and body text are packed into the error built by `make`.
    async fn ensure_success(
        response: reqwest::Response,
        make: impl FnOnce(u16, String) -> ApiError,
    ) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(make(status.as_u16(), body));
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl ReportBackend for ReportApi {
    /// `POST /api/upload` with a multipart `file` field.
    async fn upload_report(&self, file: UploadPayload) -> Result<Report, ApiError> {
        let name = file.name.clone();
        let result = self.send_upload(file).await;

        match &result {
            Ok(report) => tracing::info!(file = %name, report_id = %report.id, "Report uploaded"),
            Err(e) => tracing::error!(file = %name, error = %e, "Upload failed"),
        }
        result
    }

    /// `GET /api/reports[?validation_status=...]`.
    async fn get_reports(&self, filter: &ReportFilter) -> Result<Vec<Report>, ApiError> {
        let mut query = Vec::new();
        if let Some(status) = filter.validation_status {
            query.push(("validation_status", status.as_str().to_string()));
        }
        self.get_list("/api/reports", &query).await
    }

    /// `GET /api/reports/{id}`.
    async fn get_report(&self, id: &str) -> Result<Report, ApiError> {
        self.get_json(&format!("/api/reports/{id}"), &[]).await
    }

    /// `GET /api/stats`.
    async fn get_statistics(&self) -> Result<Statistics, ApiError> {
        self.get_json("/api/stats", &[]).await
    }

    /// Errors are read from the configured errors path. The status filter
    /// travels as `validation_status`, matching the listing endpoint.
    async fn get_errors(&self, filter: &ErrorFilter) -> Result<Vec<ValidationError>, ApiError> {
        let mut query = Vec::new();
        if let Some(status) = filter.status {
            query.push(("validation_status", status.as_str().to_string()));
        }
        if let Some(severity) = filter.severity {
            query.push(("severity", severity.as_str().to_string()));
        }
        self.get_list(&self.errors_path, &query).await
    }

    /// `GET /api/reports/compare?ids=A&ids=B`.
    async fn compare_reports(&self, ids: &[String]) -> Result<CompareResult, ApiError> {
        let query: Vec<(&str, String)> = ids.iter().map(|id| ("ids", id.clone())).collect();
        self.get_json("/api/reports/compare", &query).await
    }

    /// `GET /api/search?q=...&limit=...`.
    async fn search_reports(&self, query: &str, limit: u32) -> Result<Vec<Report>, ApiError> {
        let params = [("q", query.to_string()), ("limit", limit.to_string())];
        self.get_list("/api/search", &params).await
    }

    /// `GET /api/health`.
    async fn health(&self) -> Result<BackendHealth, ApiError> {
        self.get_json("/api/health", &[]).await
    }
}
