//! Upload flow: queue files and submit each one independently.
//!
//! Every queued file gets its own task keyed by the entry id. A task only
//! ever settles its own entry, so completions can land in any order
//! without clobbering each other. Nothing is retried: a failed entry stays
//! failed until the user queues the file again.

use std::sync::Arc;

use azstat_client::{ReportBackend, UploadPayload};
use azstat_core::i18n::{dictionary, fill_name};
use azstat_core::locale::Locale;
use azstat_core::upload::{Completion, UploadQueue, UploadedFile};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use uuid::Uuid;

use crate::notifications::{NotificationBus, Toast};
use crate::scope::{scoped, FlowError};

pub struct UploadFlow {
    backend: Arc<dyn ReportBackend>,
    queue: Arc<RwLock<UploadQueue>>,
    notifications: Arc<NotificationBus>,
    cancel: CancellationToken,
    tracker: TaskTracker,
}

impl UploadFlow {
    pub fn new(
        backend: Arc<dyn ReportBackend>,
        notifications: Arc<NotificationBus>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            backend,
            queue: Arc::new(RwLock::new(UploadQueue::new())),
            notifications,
            cancel,
            tracker: TaskTracker::new(),
        }
    }

    /// Queue `files` as `uploading` and start one upload task per file.
    ///
    /// Returns the queued entries in input order. Toasts are phrased in `locale`.
    pub async fn add_files(&self, locale: Locale, files: Vec<UploadPayload>) -> Vec<UploadedFile> {
        let queued: Vec<UploadedFile> = {
            let mut queue = self.queue.write().await;
            files
                .iter()
                .map(|f| queue.enqueue(f.name.clone(), f.size(), f.content_type.clone()))
                .collect()
        };

        for (entry, file) in queued.iter().zip(files) {
            tracing::info!(upload_id = %entry.id, file = %entry.name, size = entry.size, "Upload queued");
            self.spawn_upload(locale, entry.id, file);
        }
        queued
    }

    fn spawn_upload(&self, locale: Locale, id: Uuid, file: UploadPayload) {
        let backend = Arc::clone(&self.backend);
        let queue = Arc::clone(&self.queue);
        let notifications = Arc::clone(&self.notifications);
        let cancel = self.cancel.clone();

        self.tracker.spawn(async move {
            let name = file.name.clone();
            let outcome = match scoped(&cancel, backend.upload_report(file)).await {
                Ok(report) => Ok(report),
                Err(FlowError::Cancelled) => {
                    tracing::debug!(upload_id = %id, file = %name, "Upload abandoned on teardown");
                    return;
                }
                Err(FlowError::Backend(e)) => {
                    tracing::warn!(upload_id = %id, file = %name, error = %e, "Upload failed");
                    Err(e.to_string())
                }
            };

            let completion = queue
                .write()
                .await
                .complete(id, outcome.as_ref().map(|_| ()).map_err(Clone::clone));
            if completion == Completion::Removed {
                tracing::debug!(upload_id = %id, "Upload finished after entry was removed");
            }

            let text = &dictionary(locale).upload;
            let toast = match &outcome {
                Ok(report) => {
                    tracing::info!(upload_id = %id, report_id = %report.id, "Upload succeeded");
                    Toast::success(fill_name(text.success_toast, &name))
                }
                Err(_) => Toast::error(fill_name(text.failure_toast, &name)),
            };
            notifications.publish(toast);
        });
    }

    /// Remove an entry from the list. An in-flight upload keeps running
    /// server-side; its completion no longer updates the list.
    pub async fn remove(&self, id: Uuid) -> Option<UploadedFile> {
        self.queue.write().await.remove(id)
    }

    pub async fn get(&self, id: Uuid) -> Option<UploadedFile> {
        self.queue.read().await.get(id).cloned()
    }

    /// Current queue, in insertion order.
    pub async fn files(&self) -> Vec<UploadedFile> {
        self.queue.read().await.entries()
    }

    /// Stop accepting work, cancel in-flight uploads, and wait for their tasks.
    pub async fn shutdown(&self) {
        self.tracker.close();
        self.cancel.cancel();
        self.tracker.wait().await;
        tracing::info!("Upload flow shut down");
    }
}

impl Drop for UploadFlow {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
