//! Side-by-side comparison of two reports.

use serde::{Deserialize, Serialize};

use crate::report::{find_report, Report, ValidationStatus};
use crate::types::{deserialize_id, ReportId};

/// Per-report row of a comparison response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    #[serde(deserialize_with = "deserialize_id")]
    pub report_id: ReportId,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub errors_count: u32,
    #[serde(default)]
    pub warnings_count: u32,
    pub validation_status: ValidationStatus,
}

/// Response of the compare endpoint. Lives for a single compare cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompareResult {
    #[serde(default)]
    pub reports: Vec<Report>,
    #[serde(default)]
    pub comparison: Vec<ComparisonEntry>,
}

/// Two independent selection slots plus the in-flight flag.
///
/// Selecting the same report in both slots is allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompareSelection {
    pub report_a: Option<ReportId>,
    pub report_b: Option<ReportId>,
    pub comparing: bool,
}

impl CompareSelection {
    pub fn select_a(&mut self, id: Option<ReportId>) {
        self.report_a = id.filter(|s| !s.is_empty());
    }

    pub fn select_b(&mut self, id: Option<ReportId>) {
        self.report_b = id.filter(|s| !s.is_empty());
    }

    /// Both slots filled and no comparison running.
    pub fn can_compare(&self) -> bool {
        self.report_a.is_some() && self.report_b.is_some() && !self.comparing
    }

    /// The ids to send, in slot order, when [`can_compare`](Self::can_compare) holds.
    pub fn ids(&self) -> Option<[ReportId; 2]> {
        match (&self.report_a, &self.report_b) {
            (Some(a), Some(b)) if !self.comparing => Some([a.clone(), b.clone()]),
            _ => None,
        }
    }
}

/// Card rendered for one comparison entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompareCard {
    pub report_id: ReportId,
    pub filename: String,
    pub score: f64,
    pub errors_count: u32,
    pub warnings_count: u32,
    pub validation_status: ValidationStatus,
}

/// Filename to show for an entry: its own, else the source report's, else the id.
pub fn display_filename(entry: &ComparisonEntry, reports: &[Report]) -> String {
    if !entry.filename.is_empty() {
        return entry.filename.clone();
    }
    find_report(reports, &entry.report_id)
        .map(|r| r.filename.clone())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| entry.report_id.clone())
}

/// Map each comparison entry back to its source report for display.
pub fn build_cards(result: &CompareResult, reports: &[Report]) -> Vec<CompareCard> {
    result
        .comparison
        .iter()
        .map(|entry| CompareCard {
            report_id: entry.report_id.clone(),
            filename: display_filename(entry, reports),
            score: entry.score,
            errors_count: entry.errors_count,
            warnings_count: entry.warnings_count,
            validation_status: entry.validation_status,
        })
        .collect()
}
