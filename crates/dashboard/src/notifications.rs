//! Transient toast notifications raised by page flows.
//!
//! [`NotificationBus`] fans toasts out over a [`broadcast`] channel and
//! keeps the most recent ones so a page render can show them.

use std::collections::VecDeque;
use std::sync::Mutex;

use azstat_core::types::Timestamp;
use chrono::Utc;
use serde::Serialize;
use tokio::sync::broadcast;

/// Number of toasts retained for display.
const RECENT_CAPACITY: usize = 50;

/// Broadcast buffer capacity.
const CHANNEL_CAPACITY: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub created_at: Timestamp,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }

    fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            created_at: Utc::now(),
        }
    }
}

pub struct NotificationBus {
    sender: broadcast::Sender<Toast>,
    recent: Mutex<VecDeque<Toast>>,
}

impl NotificationBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            sender,
            recent: Mutex::new(VecDeque::with_capacity(RECENT_CAPACITY)),
        }
    }

    /// Record and broadcast a toast. Having no subscribers is fine.
    pub fn publish(&self, toast: Toast) {
        match toast.kind {
            ToastKind::Success => tracing::info!(message = %toast.message, "Toast"),
            ToastKind::Error => tracing::warn!(message = %toast.message, "Toast"),
        }

        {
            let mut recent = self.recent.lock().unwrap_or_else(|e| e.into_inner());
            if recent.len() == RECENT_CAPACITY {
                recent.pop_front();
            }
            recent.push_back(toast.clone());
        }

        let _ = self.sender.send(toast);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Toast> {
        self.sender.subscribe()
    }

    /// Retained toasts, oldest first.
    pub fn recent(&self) -> Vec<Toast> {
        self.recent
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .cloned()
            .collect()
    }
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new()
    }
}
