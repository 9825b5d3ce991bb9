//! Aggregate statistics snapshot and its display derivations.

use serde::{Deserialize, Serialize};

use crate::report::Report;

/// Number of reports shown in the "recent reports" table.
pub const RECENT_REPORT_LIMIT: usize = 5;

/// Marker rendered for a measurement the backend did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// Aggregate counters recomputed by the backend on every fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(default)]
    pub total_reports: u64,
    #[serde(default)]
    pub valid_reports: u64,
    #[serde(default)]
    pub error_reports: u64,
    #[serde(default)]
    pub pending_reports: u64,
    /// Mean score, 0-100. `None` when the backend has nothing to average.
    #[serde(default)]
    pub average_score: Option<f64>,
    /// Fraction of valid reports, 0-1.
    #[serde(default)]
    pub success_rate: Option<f64>,
}

/// `98.5%`, or [`NOT_AVAILABLE`] when absent. Zero renders as `0.0%`.
pub fn format_average_score(value: Option<f64>) -> String {
    match value {
        Some(score) if score.is_finite() => format!("{:.1}%", round_half_up(score)),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Render a 0-1 rate as a percentage, or [`NOT_AVAILABLE`] when absent.
pub fn format_success_rate(value: Option<f64>) -> String {
    match value {
        Some(rate) if rate.is_finite() => format!("{:.1}%", round_half_up(rate * 100.0)),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Round to one decimal with ties away from zero (`87.25` -> `87.3`).
fn round_half_up(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// The first [`RECENT_REPORT_LIMIT`] reports in backend order.
///
/// No date sort is applied; the backend decides what "recent" means.
pub fn recent_reports(reports: &[Report]) -> &[Report] {
    &reports[..reports.len().min(RECENT_REPORT_LIMIT)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ValidationStatus;

    fn report(id: &str) -> Report {
        Report {
            id: id.into(),
            filename: format!("{id}.html"),
            upload_date: String::new(),
            validation_status: ValidationStatus::Valid,
            score: 90.0,
            errors_count: 0,
            warnings_count: 0,
        }
    }

    #[test]
    fn null_average_renders_not_available() {
        let stats: Statistics =
            serde_json::from_value(serde_json::json!({ "total_reports": 3, "average_score": null }))
                .unwrap();
        assert_eq!(stats.average_score, None);
        assert_eq!(format_average_score(stats.average_score), "N/A");
        assert_ne!(format_average_score(stats.average_score), "0%");
    }

    #[test]
    fn zero_is_a_real_measurement() {
        assert_eq!(format_average_score(Some(0.0)), "0.0%");
        assert_eq!(format_success_rate(Some(0.0)), "0.0%");
    }

    #[test]
    fn percentages_use_one_decimal() {
        assert_eq!(format_average_score(Some(87.25)), "87.3%");
        assert_eq!(format_success_rate(Some(0.756)), "75.6%");
        assert_eq!(format_success_rate(None), "N/A");
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(format_average_score(Some(72.25)), "72.3%");
        assert_eq!(format_success_rate(Some(0.8125)), "81.3%");
        assert_eq!(format_success_rate(Some(0.5)), "50.0%");
    }

    #[test]
    fn recent_reports_keeps_backend_order_and_caps_at_five() {
        let reports: Vec<Report> = ["f", "e", "d", "c", "b", "a"].iter().map(|id| report(id)).collect();
        let recent: Vec<&str> = recent_reports(&reports).iter().map(|r| r.id.as_str()).collect();
        assert_eq!(recent, vec!["f", "e", "d", "c", "b"]);
    }

    #[test]
    fn recent_reports_of_short_list_returns_all() {
        let reports = vec![report("a"), report("b")];
        assert_eq!(recent_reports(&reports).len(), 2);
        assert!(recent_reports(&[]).is_empty());
    }
}
