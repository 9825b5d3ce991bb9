//! Validated report records as served by the validation backend.
//!
//! The dashboard never mutates a [`Report`]; it only holds re-fetchable
//! copies for display.

use serde::{Deserialize, Serialize};

use crate::types::{deserialize_id, ReportId};

/// Overall outcome the backend assigned to a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    Valid,
    Warning,
    Error,
}

impl ValidationStatus {
    /// String representation used in query strings and logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One uploaded and validated HTML report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: ReportId,
    #[serde(default)]
    pub filename: String,
    /// ISO-8601 upload time exactly as the backend reports it.
    #[serde(default, alias = "uploaded_at")]
    pub upload_date: String,
    pub validation_status: ValidationStatus,
    /// 0-100.
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub errors_count: u32,
    #[serde(default)]
    pub warnings_count: u32,
}

/// Optional filter for the report list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilter {
    pub validation_status: Option<ValidationStatus>,
}

impl ReportFilter {
    pub fn with_status(status: ValidationStatus) -> Self {
        Self {
            validation_status: Some(status),
        }
    }
}

/// Look up a report by id in a fetched list.
pub fn find_report<'a>(reports: &'a [Report], id: &str) -> Option<&'a Report> {
    reports.iter().find(|r| r.id == id)
}
