//! Error list flow: the full validation error set, tabbed by status.

use std::sync::Arc;

use azstat_client::ReportBackend;
use azstat_core::findings::{errors_for_tab, to_csv, ErrorFilter, ErrorPartition, ErrorTab, ValidationError};
use serde::Serialize;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use crate::scope::{scoped, FlowError, LoadState};

/// Tab badge counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TabCounts {
    pub all: usize,
    pub pending: usize,
    pub resolved: usize,
    pub ignored: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorListView {
    pub tab: ErrorTab,
    pub counts: TabCounts,
    pub errors: Vec<ValidationError>,
}

impl ErrorListView {
    /// Derive the tab view from the full set. Nothing here is cached.
    pub fn new(errors: &[ValidationError], tab: ErrorTab) -> Self {
        let partition = ErrorPartition::new(errors);
        Self {
            tab,
            counts: TabCounts {
                all: errors.len(),
                pending: partition.pending.len(),
                resolved: partition.resolved.len(),
                ignored: partition.ignored.len(),
            },
            errors: errors_for_tab(errors, tab).into_iter().cloned().collect(),
        }
    }
}

pub struct ErrorListFlow {
    backend: Arc<dyn ReportBackend>,
    cancel: CancellationToken,
    errors: RwLock<LoadState<Vec<ValidationError>>>,
}

impl ErrorListFlow {
    pub fn new(backend: Arc<dyn ReportBackend>, cancel: CancellationToken) -> Self {
        Self {
            backend,
            cancel,
            errors: RwLock::new(LoadState::Loading),
        }
    }

    /// Fetch the full error set, replacing whatever was loaded before.
    pub async fn load(&self) {
        *self.errors.write().await = LoadState::Loading;
        let result = scoped(&self.cancel, self.backend.get_errors(&ErrorFilter::default())).await;

        let mut errors = self.errors.write().await;
        match result {
            Ok(fetched) => {
                tracing::debug!(count = fetched.len(), "Validation errors loaded");
                *errors = LoadState::Ready(fetched);
            }
            Err(FlowError::Cancelled) => {}
            Err(FlowError::Backend(e)) => {
                tracing::error!(error = %e, "Failed to fetch errors");
                *errors = LoadState::Failed(e.to_string());
            }
        }
    }

    /// Explicit refresh: a full re-fetch, never an incremental merge.
    pub async fn refresh(&self) {
        self.load().await;
    }

    pub async fn view(&self, tab: ErrorTab) -> LoadState<ErrorListView> {
        match &*self.errors.read().await {
            LoadState::Loading => LoadState::Loading,
            LoadState::Ready(errors) => LoadState::Ready(ErrorListView::new(errors, tab)),
            LoadState::Failed(message) => LoadState::Failed(message.clone()),
        }
    }

    /// CSV snapshot of the currently loaded set, or `None` if nothing is loaded.
    pub async fn export_csv(&self) -> Option<String> {
        self.errors.read().await.ready().map(|errors| to_csv(errors))
    }
}

impl Drop for ErrorListFlow {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
