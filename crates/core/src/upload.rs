//! Client-side upload queue.
//!
//! Each queued file is keyed by a client-generated id and moves through a
//! one-way state machine: `uploading -> success | error`. Completions for
//! different files never touch each other's entries, and an entry removed
//! from the queue ignores any late completion.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// File extensions the picker suggests. The backend decides acceptance.
pub const ACCEPTED_EXTENSIONS: &[&str] = &[".html", ".htm"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadStatus {
    Uploading,
    Success,
    Error,
}

impl UploadStatus {
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Uploading)
    }
}

/// One entry in the upload queue. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadedFile {
    pub id: Uuid,
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub content_type: String,
    pub status: UploadStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Whether the name carries one of [`ACCEPTED_EXTENSIONS`]. Informational only.
    pub accepted_extension: bool,
}

/// Result of applying a completion to the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The entry moved from `uploading` to the given status.
    Applied(UploadStatus),
    /// The entry was removed before the upload finished.
    Removed,
    /// The entry had already settled; nothing changed.
    AlreadySettled(UploadStatus),
}

/// Default number of entries kept before settled ones are evicted.
pub const UPLOAD_QUEUE_LIMIT: usize = 100;

/// Insertion-ordered set of queued files.
///
/// Holds at most `limit` entries once uploads settle: past the limit the
/// oldest settled entries are dropped. Entries still `uploading` are never
/// evicted, so the queue can exceed the limit while a large batch is in flight.
#[derive(Debug)]
pub struct UploadQueue {
    entries: IndexMap<Uuid, UploadedFile>,
    limit: usize,
}

impl Default for UploadQueue {
    fn default() -> Self {
        Self::with_limit(UPLOAD_QUEUE_LIMIT)
    }
}

impl UploadQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: IndexMap::new(),
            limit,
        }
    }

    /// Queue a file in the `uploading` state and return its entry.
    pub fn enqueue(
        &mut self,
        name: impl Into<String>,
        size: u64,
        content_type: impl Into<String>,
    ) -> UploadedFile {
        let name = name.into();
        let entry = UploadedFile {
            id: Uuid::new_v4(),
            accepted_extension: is_accepted_extension(&name),
            name,
            size,
            content_type: content_type.into(),
            status: UploadStatus::Uploading,
            error: None,
        };
        self.entries.insert(entry.id, entry.clone());
        self.evict_settled();
        entry
    }

    /// Settle an `uploading` entry. `Err` carries the message kept for display.
    pub fn complete(&mut self, id: Uuid, outcome: Result<(), String>) -> Completion {
        let Some(entry) = self.entries.get_mut(&id) else {
            return Completion::Removed;
        };
        if entry.status.is_settled() {
            return Completion::AlreadySettled(entry.status);
        }

        match outcome {
            Ok(()) => entry.status = UploadStatus::Success,
            Err(message) => {
                entry.status = UploadStatus::Error;
                entry.error = Some(message);
            }
        }
        let status = entry.status;
        self.evict_settled();
        Completion::Applied(status)
    }

    /// Drop the oldest settled entries until the queue fits its limit.
    fn evict_settled(&mut self) {
        while self.entries.len() > self.limit {
            let Some(index) = self.entries.values().position(|e| e.status.is_settled()) else {
                break;
            };
            self.entries.shift_remove_index(index);
        }
    }

    /// Drop an entry from the list. Does not touch anything server-side.
    pub fn remove(&mut self, id: Uuid) -> Option<UploadedFile> {
        self.entries.shift_remove(&id)
    }

    pub fn get(&self, id: Uuid) -> Option<&UploadedFile> {
        self.entries.get(&id)
    }

    pub fn entries(&self) -> Vec<UploadedFile> {
        self.entries.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Case-insensitive check against [`ACCEPTED_EXTENSIONS`].
pub fn is_accepted_extension(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    ACCEPTED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Human-readable size using base-1024 units, at most two decimals.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let mut number = format!("{value:.2}");
    if number.contains('.') {
        number = number.trim_end_matches('0').trim_end_matches('.').to_string();
    }
    format!("{number} {}", UNITS[unit])
}
