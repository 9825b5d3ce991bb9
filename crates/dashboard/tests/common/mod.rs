#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use azstat_client::{ApiError, BackendHealth, ReportBackend, UploadPayload};
use azstat_core::compare::{CompareResult, ComparisonEntry};
use azstat_core::findings::{ErrorFilter, ErrorStatus, Severity, ValidationError};
use azstat_core::report::{Report, ReportFilter, ValidationStatus};
use azstat_core::statistics::Statistics;
use tokio::sync::Notify;

pub fn report(id: &str, filename: &str, status: ValidationStatus, score: f64) -> Report {
    Report {
        id: id.to_string(),
        filename: filename.to_string(),
        upload_date: format!("2024-01-0{id}T10:00:00Z"),
        validation_status: status,
        score,
        errors_count: 0,
        warnings_count: 0,
    }
}

pub fn finding(id: &str, status: ErrorStatus) -> ValidationError {
    ValidationError {
        id: id.to_string(),
        report_id: "1".to_string(),
        report_name: "report1.html".to_string(),
        error_type: "Missing Field".to_string(),
        message: format!("finding {id}"),
        line: Some(10),
        column: None,
        severity: Severity::Error,
        status,
        timestamp: "2024-01-01T10:00:00Z".to_string(),
    }
}

pub fn comparison(ids: &[&str]) -> CompareResult {
    CompareResult {
        reports: Vec::new(),
        comparison: ids
            .iter()
            .map(|id| ComparisonEntry {
                report_id: id.to_string(),
                filename: format!("report{id}.html"),
                score: 90.0,
                errors_count: 1,
                warnings_count: 0,
                validation_status: ValidationStatus::Valid,
            })
            .collect(),
    }
}

pub fn upload(name: &str) -> UploadPayload {
    UploadPayload {
        name: name.to_string(),
        content_type: "text/html".to_string(),
        bytes: b"<html></html>".to_vec(),
    }
}

fn api_error(status: u16) -> ApiError {
    ApiError::Api {
        status,
        body: "backend failure".to_string(),
    }
}

/// In-memory backend with per-call failure switches and wait gates.
///
/// A gate blocks the matching call until [`Notify::notify_one`] is called
/// on it, which lets tests control the order in which requests settle.
#[derive(Default)]
pub struct FakeBackend {
    pub reports: Mutex<Vec<Report>>,
    pub statistics: Mutex<Statistics>,
    pub errors: Mutex<Vec<ValidationError>>,
    pub compare_results: Mutex<Vec<CompareResult>>,

    pub fail_reports: Mutex<Option<u16>>,
    pub fail_statistics: Mutex<Option<u16>>,
    pub fail_errors: Mutex<Option<u16>>,
    pub fail_compare: Mutex<Option<u16>>,
    pub fail_uploads: Mutex<HashSet<String>>,

    pub upload_gates: Mutex<HashMap<String, Arc<Notify>>>,
    pub compare_gate: Mutex<Option<Arc<Notify>>>,
    pub reports_gate: Mutex<Option<Arc<Notify>>>,

    pub uploaded: Mutex<Vec<String>>,
    pub compare_calls: Mutex<Vec<Vec<String>>>,
    pub errors_calls: Mutex<usize>,
}

impl FakeBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn gate_upload(&self, name: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.upload_gates
            .lock()
            .unwrap()
            .insert(name.to_string(), Arc::clone(&gate));
        gate
    }

    pub fn gate_compare(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.compare_gate.lock().unwrap() = Some(Arc::clone(&gate));
        gate
    }

    pub fn gate_reports(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.reports_gate.lock().unwrap() = Some(Arc::clone(&gate));
        gate
    }

    async fn wait(gate: Option<Arc<Notify>>) {
        if let Some(gate) = gate {
            gate.notified().await;
        }
    }
}

#[async_trait]
impl ReportBackend for FakeBackend {
    async fn upload_report(&self, file: UploadPayload) -> Result<Report, ApiError> {
        let gate = self.upload_gates.lock().unwrap().get(&file.name).cloned();
        Self::wait(gate).await;

        if self.fail_uploads.lock().unwrap().contains(&file.name) {
            return Err(ApiError::Upload {
                status: 400,
                body: "Invalid file".to_string(),
            });
        }
        self.uploaded.lock().unwrap().push(file.name.clone());
        Ok(report("9", &file.name, ValidationStatus::Valid, 100.0))
    }

    async fn get_reports(&self, filter: &ReportFilter) -> Result<Vec<Report>, ApiError> {
        let gate = self.reports_gate.lock().unwrap().clone();
        Self::wait(gate).await;

        if let Some(status) = *self.fail_reports.lock().unwrap() {
            return Err(api_error(status));
        }
        let reports = self.reports.lock().unwrap().clone();
        Ok(match filter.validation_status {
            Some(status) => reports
                .into_iter()
                .filter(|r| r.validation_status == status)
                .collect(),
            None => reports,
        })
    }

    async fn get_report(&self, id: &str) -> Result<Report, ApiError> {
        self.reports
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| api_error(404))
    }

    async fn get_statistics(&self) -> Result<Statistics, ApiError> {
        if let Some(status) = *self.fail_statistics.lock().unwrap() {
            return Err(api_error(status));
        }
        Ok(self.statistics.lock().unwrap().clone())
    }

    async fn get_errors(&self, _filter: &ErrorFilter) -> Result<Vec<ValidationError>, ApiError> {
        *self.errors_calls.lock().unwrap() += 1;
        if let Some(status) = *self.fail_errors.lock().unwrap() {
            return Err(api_error(status));
        }
        Ok(self.errors.lock().unwrap().clone())
    }

    async fn compare_reports(&self, ids: &[String]) -> Result<CompareResult, ApiError> {
        self.compare_calls.lock().unwrap().push(ids.to_vec());
        let gate = self.compare_gate.lock().unwrap().clone();
        Self::wait(gate).await;

        if let Some(status) = *self.fail_compare.lock().unwrap() {
            return Err(api_error(status));
        }
        let mut results = self.compare_results.lock().unwrap();
        if results.is_empty() {
            let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
            Ok(comparison(&ids))
        } else {
            Ok(results.remove(0))
        }
    }

    async fn search_reports(&self, query: &str, limit: u32) -> Result<Vec<Report>, ApiError> {
        Ok(self
            .reports
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.filename.contains(query))
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn health(&self) -> Result<BackendHealth, ApiError> {
        Ok(BackendHealth {
            status: "healthy".to_string(),
            api_version: Some("1.0.0".to_string()),
            database: Some("connected".to_string()),
            total_reports: Some(self.reports.lock().unwrap().len() as u64),
        })
    }
}

/// Poll `flow` until the entry `id` leaves `uploading`, or is gone.
pub async fn settle(flow: &azstat_dashboard::upload::UploadFlow, id: uuid::Uuid) {
    tokio::time::timeout(std::time::Duration::from_secs(2), async {
        loop {
            match flow.get(id).await {
                Some(entry) if !entry.status.is_settled() => {}
                _ => return,
            }
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("upload did not settle in time");
}
