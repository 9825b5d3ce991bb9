//! Compare flow: pick two reports and render their differential.

use std::sync::Arc;

use azstat_client::ReportBackend;
use azstat_core::compare::{build_cards, CompareCard, CompareResult, CompareSelection};
use azstat_core::report::{Report, ReportFilter};
use serde::Serialize;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use crate::scope::{scoped, FlowError, LoadState};

#[derive(Debug, Default)]
struct CompareState {
    reports: LoadState<Vec<Report>>,
    selection: CompareSelection,
    result: Option<CompareResult>,
    error: Option<String>,
}

/// What happened when the compare action was invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompareOutcome {
    /// A new result replaced the previous one.
    Compared,
    /// One of the slots is empty; nothing was sent.
    Incomplete,
    /// A comparison is already running; nothing was sent.
    InFlight,
    /// The backend rejected the request; the previous result is kept.
    Failed(String),
    /// The flow was torn down while waiting.
    Cancelled,
}

/// Render model of the compare page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompareView {
    pub loading: bool,
    pub reports: Vec<Report>,
    pub selection: CompareSelection,
    pub can_compare: bool,
    pub cards: Vec<CompareCard>,
    pub error: Option<String>,
    pub no_reports: bool,
}

pub struct CompareFlow {
    backend: Arc<dyn ReportBackend>,
    cancel: CancellationToken,
    state: RwLock<CompareState>,
}

impl CompareFlow {
    pub fn new(backend: Arc<dyn ReportBackend>, cancel: CancellationToken) -> Self {
        Self {
            backend,
            cancel,
            state: RwLock::new(CompareState::default()),
        }
    }

    /// Load the full report list for the two selectors.
    pub async fn mount(&self) {
        let result = scoped(&self.cancel, self.backend.get_reports(&ReportFilter::default())).await;

        let mut state = self.state.write().await;
        match result {
            Ok(reports) => {
                tracing::debug!(count = reports.len(), "Reports loaded for comparison");
                state.reports = LoadState::Ready(reports);
            }
            Err(FlowError::Cancelled) => {}
            Err(FlowError::Backend(e)) => {
                tracing::error!(error = %e, "Failed to fetch reports");
                let message = e.to_string();
                state.reports = LoadState::Failed(message.clone());
                state.error = Some(message);
            }
        }
    }

    pub async fn select_a(&self, id: Option<String>) {
        self.state.write().await.selection.select_a(id);
    }

    pub async fn select_b(&self, id: Option<String>) {
        self.state.write().await.selection.select_b(id);
    }

    /// Send both selected ids to the compare endpoint.
    ///
    /// On success the previous result is replaced in full. On failure it is
    /// left untouched and the error is kept for inline display.
    pub async fn compare(&self) -> CompareOutcome {
        let ids = {
            let mut state = self.state.write().await;
            if state.selection.comparing {
                return CompareOutcome::InFlight;
            }
            let Some(ids) = state.selection.ids() else {
                return CompareOutcome::Incomplete;
            };
            state.selection.comparing = true;
            state.error = None;
            ids
        };

        tracing::info!(report_a = %ids[0], report_b = %ids[1], "Comparing reports");
        let result = scoped(&self.cancel, self.backend.compare_reports(&ids)).await;

        let mut state = self.state.write().await;
        match result {
            Ok(compared) => {
                state.selection.comparing = false;
                state.result = Some(compared);
                CompareOutcome::Compared
            }
            Err(FlowError::Cancelled) => CompareOutcome::Cancelled,
            Err(FlowError::Backend(e)) => {
                tracing::error!(error = %e, "Failed to compare reports");
                let message = e.to_string();
                state.selection.comparing = false;
                state.error = Some(message.clone());
                CompareOutcome::Failed(message)
            }
        }
    }

    pub async fn result(&self) -> Option<CompareResult> {
        self.state.read().await.result.clone()
    }

    pub async fn view(&self) -> CompareView {
        let state = self.state.read().await;
        let reports = state.reports.ready().cloned().unwrap_or_default();
        let cards = state
            .result
            .as_ref()
            .map(|result| build_cards(result, &reports))
            .unwrap_or_default();

        CompareView {
            loading: state.reports.is_loading(),
            no_reports: state.reports.ready().is_some_and(|r| r.is_empty()),
            can_compare: state.selection.can_compare(),
            selection: state.selection.clone(),
            reports,
            cards,
            error: state.error.clone(),
        }
    }
}

impl Drop for CompareFlow {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
