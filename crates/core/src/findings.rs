//! Validation errors reported against uploaded reports, their tab
//! partitioning, and the client-side CSV export.

use serde::{Deserialize, Serialize};

use crate::types::{deserialize_id, ReportId};

/// File name offered for the CSV download.
pub const CSV_FILENAME: &str = "validation_errors.csv";

/// Header row of the CSV export.
pub const CSV_HEADER: &str = "Report Name,Error Type,Message,Line,Severity,Status";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// Review state of a validation error. Transitions are owned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorStatus {
    Pending,
    Resolved,
    Ignored,
}

impl ErrorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Resolved => "resolved",
            Self::Ignored => "ignored",
        }
    }
}

/// A single finding produced by the validation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub report_id: ReportId,
    #[serde(default)]
    pub report_name: String,
    #[serde(default)]
    pub error_type: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub line: Option<u32>,
    #[serde(default)]
    pub column: Option<u32>,
    pub severity: Severity,
    pub status: ErrorStatus,
    #[serde(default)]
    pub timestamp: String,
}

impl ValidationError {
    /// `line`, `line:column`, or empty when no line is known.
    pub fn location_label(&self) -> String {
        match (self.line, self.column) {
            (Some(line), Some(column)) => format!("{line}:{column}"),
            (Some(line), None) => line.to_string(),
            (None, _) => String::new(),
        }
    }
}

/// Optional filters for the error list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorFilter {
    pub status: Option<ErrorStatus>,
    pub severity: Option<Severity>,
}

/// Tabs of the error list page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorTab {
    #[default]
    All,
    Pending,
    Resolved,
    Ignored,
}

/// Status-keyed view over a fetched error set.
///
/// Borrowed from the full set and rebuilt on every render, so the tabs can
/// never drift from the list they were derived from.
#[derive(Debug, Default)]
pub struct ErrorPartition<'a> {
    pub pending: Vec<&'a ValidationError>,
    pub resolved: Vec<&'a ValidationError>,
    pub ignored: Vec<&'a ValidationError>,
}

impl<'a> ErrorPartition<'a> {
    pub fn new(errors: &'a [ValidationError]) -> Self {
        let mut partition = Self::default();
        for error in errors {
            match error.status {
                ErrorStatus::Pending => partition.pending.push(error),
                ErrorStatus::Resolved => partition.resolved.push(error),
                ErrorStatus::Ignored => partition.ignored.push(error),
            }
        }
        partition
    }

    pub fn total(&self) -> usize {
        self.pending.len() + self.resolved.len() + self.ignored.len()
    }
}

/// Select the errors shown on a tab, preserving fetch order.
pub fn errors_for_tab(errors: &[ValidationError], tab: ErrorTab) -> Vec<&ValidationError> {
    let wanted = match tab {
        ErrorTab::All => return errors.iter().collect(),
        ErrorTab::Pending => ErrorStatus::Pending,
        ErrorTab::Resolved => ErrorStatus::Resolved,
        ErrorTab::Ignored => ErrorStatus::Ignored,
    };
    errors.iter().filter(|e| e.status == wanted).collect()
}

/// Render the loaded error set as CSV.
///
/// Fields are joined with bare commas and no quoting, so a comma inside a
/// message is indistinguishable from a delimiter. Consumers must not treat
/// this export as lossless. A missing or zero line leaves the cell empty.
pub fn to_csv(errors: &[ValidationError]) -> String {
    let rows: Vec<String> = errors
        .iter()
        .map(|e| {
            let line = e
                .line
                .filter(|l| *l != 0)
                .map(|l| l.to_string())
                .unwrap_or_default();
            format!(
                "{},{},{},{},{},{}",
                e.report_name,
                e.error_type,
                e.message,
                line,
                e.severity.as_str(),
                e.status.as_str()
            )
        })
        .collect();

    format!("{CSV_HEADER}\n{}", rows.join("\n"))
}
