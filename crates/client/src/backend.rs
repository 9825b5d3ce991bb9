use async_trait::async_trait;
use azstat_core::compare::CompareResult;
use azstat_core::findings::{ErrorFilter, ValidationError};
use azstat_core::report::{Report, ReportFilter};
use azstat_core::statistics::Statistics;
use serde::{Deserialize, Serialize};

use crate::api::ApiError;

/// A file to submit for validation.
#[derive(Debug, Clone)]
pub struct UploadPayload {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadPayload {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Health summary reported by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendHealth {
    pub status: String,
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub total_reports: Option<u64>,
}

/// Operations the dashboard needs from the validation backend.
///
/// Every method surfaces failures as a single [`ApiError`]; nothing is
/// retried, timed out, or partially applied. Concurrent calls are
/// independent.
#[async_trait]
pub trait ReportBackend: Send + Sync {
    /// Submit one file; returns the report the backend created.
    async fn upload_report(&self, file: UploadPayload) -> Result<Report, ApiError>;

    /// List reports in backend order. An empty list is not an error.
    async fn get_reports(&self, filter: &ReportFilter) -> Result<Vec<Report>, ApiError>;

    async fn get_report(&self, id: &str) -> Result<Report, ApiError>;

    async fn get_statistics(&self) -> Result<Statistics, ApiError>;

    async fn get_errors(&self, filter: &ErrorFilter) -> Result<Vec<ValidationError>, ApiError>;

    /// Compare exactly the given reports.
    async fn compare_reports(&self, ids: &[String]) -> Result<CompareResult, ApiError>;

    async fn search_reports(&self, query: &str, limit: u32) -> Result<Vec<Report>, ApiError>;

    async fn health(&self) -> Result<BackendHealth, ApiError>;
}
