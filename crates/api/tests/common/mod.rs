#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use azstat_client::{ApiError, BackendHealth, ReportBackend, UploadPayload};
use azstat_core::compare::{CompareResult, ComparisonEntry};
use azstat_core::findings::{ErrorFilter, ErrorStatus, Severity, ValidationError};
use azstat_core::report::{Report, ReportFilter, ValidationStatus};
use azstat_core::statistics::Statistics;
use azstat_dashboard::Dashboard;
use http_body_util::BodyExt;
use tower::ServiceExt;

use azstat_api::config::ServerConfig;
use azstat_api::router::build_app_router;
use azstat_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        report_api_url: "http://127.0.0.1:9".to_string(),
    }
}

/// Build the full application router over `backend`, with the same
/// middleware stack production uses.
pub fn build_test_app(backend: Arc<StubBackend>) -> (Router, AppState) {
    let config = test_config();
    let dashboard = Arc::new(Dashboard::new(backend));
    let state = AppState::new(config.clone(), dashboard);
    (build_app_router(state.clone(), &config), state)
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn send_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(
        app,
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Hand-assembled `multipart/form-data` body with one part per file.
pub fn multipart(boundary: &str, files: &[(&str, &str, &str)]) -> Body {
    let mut body = String::new();
    for (field, name, content) in files {
        body.push_str(&format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{name}\"\r\nContent-Type: text/html\r\n\r\n{content}\r\n"
        ));
    }
    body.push_str(&format!("--{boundary}--\r\n"));
    Body::from(body)
}

pub fn report(id: &str, filename: &str, status: ValidationStatus, score: f64) -> Report {
    Report {
        id: id.to_string(),
        filename: filename.to_string(),
        upload_date: "2024-01-15T10:30:00Z".to_string(),
        validation_status: status,
        score,
        errors_count: 2,
        warnings_count: 1,
    }
}

pub fn finding(id: &str, message: &str, status: ErrorStatus) -> ValidationError {
    ValidationError {
        id: id.to_string(),
        report_id: "1".to_string(),
        report_name: "report1.html".to_string(),
        error_type: "Format Error".to_string(),
        message: message.to_string(),
        line: Some(42),
        column: Some(7),
        severity: Severity::Warning,
        status,
        timestamp: "2024-01-15T10:30:00Z".to_string(),
    }
}

fn unavailable() -> ApiError {
    ApiError::Api {
        status: 500,
        body: "Internal Server Error".to_string(),
    }
}

/// In-memory validation backend with on/off failure switches.
#[derive(Default)]
pub struct StubBackend {
    pub reports: Mutex<Vec<Report>>,
    pub statistics: Mutex<Statistics>,
    pub errors: Mutex<Vec<ValidationError>>,
    pub failing: Mutex<bool>,
    pub uploaded: Mutex<Vec<UploadPayload>>,
    pub compared: Mutex<Vec<Vec<String>>>,
}

impl StubBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn seeded() -> Arc<Self> {
        let backend = Self::default();
        *backend.reports.lock().unwrap() = vec![
            report("1", "report1.html", ValidationStatus::Valid, 98.5),
            report("2", "report2.html", ValidationStatus::Error, 45.0),
        ];
        *backend.statistics.lock().unwrap() = Statistics {
            total_reports: 2,
            valid_reports: 1,
            error_reports: 1,
            pending_reports: 0,
            average_score: Some(72.5),
            success_rate: Some(0.5),
        };
        *backend.errors.lock().unwrap() = vec![
            finding("1", "Missing total", ErrorStatus::Pending),
            finding("2", "Bad date", ErrorStatus::Resolved),
            finding("3", "Unknown code", ErrorStatus::Pending),
        ];
        Arc::new(backend)
    }

    pub fn fail(&self) {
        *self.failing.lock().unwrap() = true;
    }

    fn check(&self) -> Result<(), ApiError> {
        if *self.failing.lock().unwrap() {
            Err(unavailable())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ReportBackend for StubBackend {
    async fn upload_report(&self, file: UploadPayload) -> Result<Report, ApiError> {
        self.check()?;
        let created = report("10", &file.name, ValidationStatus::Valid, 100.0);
        self.uploaded.lock().unwrap().push(file);
        Ok(created)
    }

    async fn get_reports(&self, _filter: &ReportFilter) -> Result<Vec<Report>, ApiError> {
        self.check()?;
        Ok(self.reports.lock().unwrap().clone())
    }

    async fn get_report(&self, id: &str) -> Result<Report, ApiError> {
        self.check()?;
        self.reports
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(ApiError::Api {
                status: 404,
                body: "{\"detail\":\"Report not found\"}".to_string(),
            })
    }

    async fn get_statistics(&self) -> Result<Statistics, ApiError> {
        self.check()?;
        Ok(self.statistics.lock().unwrap().clone())
    }

    async fn get_errors(&self, _filter: &ErrorFilter) -> Result<Vec<ValidationError>, ApiError> {
        self.check()?;
        Ok(self.errors.lock().unwrap().clone())
    }

    async fn compare_reports(&self, ids: &[String]) -> Result<CompareResult, ApiError> {
        self.check()?;
        self.compared.lock().unwrap().push(ids.to_vec());
        Ok(CompareResult {
            reports: Vec::new(),
            comparison: ids
                .iter()
                .map(|id| ComparisonEntry {
                    report_id: id.clone(),
                    filename: String::new(),
                    score: 80.0,
                    errors_count: 1,
                    warnings_count: 2,
                    validation_status: ValidationStatus::Warning,
                })
                .collect(),
        })
    }

    async fn search_reports(&self, query: &str, limit: u32) -> Result<Vec<Report>, ApiError> {
        self.check()?;
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
        self.check()?;
        Ok(BackendHealth {
            status: "healthy".to_string(),
            api_version: Some("1.0.0".to_string()),
            database: None,
            total_reports: None,
        })
    }
}
