//! Statistics flow: aggregate counters plus the most recent reports.

use std::sync::Arc;

use azstat_client::ReportBackend;
use azstat_core::report::{Report, ReportFilter};
use azstat_core::statistics::{
    format_average_score, format_success_rate, recent_reports, Statistics,
};
use serde::Serialize;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use crate::scope::{scoped, FlowError, LoadState};

/// Most recent upload, shown in the activity panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatestActivity {
    pub filename: String,
    pub upload_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsView {
    pub stats: Statistics,
    /// Formatted average score, or the not-available marker.
    pub average_score: String,
    /// Formatted success rate, or the not-available marker.
    pub success_rate: String,
    pub recent_reports: Vec<Report>,
    pub latest_activity: Option<LatestActivity>,
}

impl StatisticsView {
    pub fn new(stats: Statistics, reports: &[Report]) -> Self {
        let recent = recent_reports(reports).to_vec();
        let latest_activity = recent.first().map(|r| LatestActivity {
            filename: r.filename.clone(),
            upload_date: r.upload_date.clone(),
        });

        Self {
            average_score: format_average_score(stats.average_score),
            success_rate: format_success_rate(stats.success_rate),
            stats,
            recent_reports: recent,
            latest_activity,
        }
    }
}

pub struct StatisticsFlow {
    backend: Arc<dyn ReportBackend>,
    cancel: CancellationToken,
    state: RwLock<LoadState<StatisticsView>>,
}

impl StatisticsFlow {
    pub fn new(backend: Arc<dyn ReportBackend>, cancel: CancellationToken) -> Self {
        Self {
            backend,
            cancel,
            state: RwLock::new(LoadState::Loading),
        }
    }

    /// Fetch statistics and the report list concurrently.
    ///
    /// Both must succeed before anything is shown; if either fails, the
    /// other is dropped and the section goes to the error state.
    pub async fn load(&self) -> LoadState<StatisticsView> {
        let filter = ReportFilter::default();
        let joined = tokio::try_join!(
            scoped(&self.cancel, self.backend.get_statistics()),
            scoped(&self.cancel, self.backend.get_reports(&filter)),
        );

        let mut state = self.state.write().await;
        match joined {
            Ok((stats, reports)) => {
                *state = LoadState::Ready(StatisticsView::new(stats, &reports));
            }
            Err(FlowError::Cancelled) => {}
            Err(FlowError::Backend(e)) => {
                tracing::error!(error = %e, "Failed to fetch statistics");
                *state = LoadState::Failed(e.to_string());
            }
        }
        state.clone()
    }

    pub async fn snapshot(&self) -> LoadState<StatisticsView> {
        self.state.read().await.clone()
    }
}

impl Drop for StatisticsFlow {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
