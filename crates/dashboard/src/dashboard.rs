use std::sync::Arc;

use azstat_client::ReportBackend;
use tokio_util::sync::CancellationToken;

use crate::compare::CompareFlow;
use crate::error_list::ErrorListFlow;
use crate::notifications::NotificationBus;
use crate::statistics::StatisticsFlow;
use crate::upload::UploadFlow;

/// Long-lived owner of the dashboard's flows.
///
/// The upload queue lives as long as the dashboard. Compare, error list
/// and statistics flows are created per page visit; each gets a child of
/// the master token so [`Dashboard::shutdown`] reaches all of them.
pub struct Dashboard {
    backend: Arc<dyn ReportBackend>,
    cancel: CancellationToken,
    notifications: Arc<NotificationBus>,
    uploads: UploadFlow,
}

impl Dashboard {
    pub fn new(backend: Arc<dyn ReportBackend>) -> Self {
        let cancel = CancellationToken::new();
        let notifications = Arc::new(NotificationBus::new());
        let uploads = UploadFlow::new(
            Arc::clone(&backend),
            Arc::clone(&notifications),
            cancel.child_token(),
        );

        Self {
            backend,
            cancel,
            notifications,
            uploads,
        }
    }

    pub fn backend(&self) -> &Arc<dyn ReportBackend> {
        &self.backend
    }

    pub fn uploads(&self) -> &UploadFlow {
        &self.uploads
    }

    pub fn notifications(&self) -> &Arc<NotificationBus> {
        &self.notifications
    }

    pub fn compare_flow(&self) -> CompareFlow {
        CompareFlow::new(Arc::clone(&self.backend), self.cancel.child_token())
    }

    pub fn error_list_flow(&self) -> ErrorListFlow {
        ErrorListFlow::new(Arc::clone(&self.backend), self.cancel.child_token())
    }

    pub fn statistics_flow(&self) -> StatisticsFlow {
        StatisticsFlow::new(Arc::clone(&self.backend), self.cancel.child_token())
    }

    /// Cancel every outstanding request and wait for upload tasks to finish.
    pub async fn shutdown(&self) {
        self.cancel.cancel();
        self.uploads.shutdown().await;
    }
}

impl Drop for Dashboard {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
