//! REST client for the AzStat validation backend.
//!
//! [`api::ReportApi`] wraps the backend's HTTP endpoints (upload, listing,
//! statistics, errors, comparison) using [`reqwest`]. Page flows depend on
//! the [`backend::ReportBackend`] trait rather than the concrete client.

pub mod api;
pub mod backend;

pub use api::{ApiError, ReportApi};
pub use backend::{BackendHealth, ReportBackend, UploadPayload};
