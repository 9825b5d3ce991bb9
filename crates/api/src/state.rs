use std::sync::Arc;

use azstat_core::settings::Settings;
use azstat_dashboard::Dashboard;
use tokio::sync::RwLock;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Page flows and the long-lived upload queue.
    pub dashboard: Arc<Dashboard>,
    /// Dashboard preferences. Kept in memory, never sent to the backend.
    pub settings: Arc<RwLock<Settings>>,
}

impl AppState {
    pub fn new(config: ServerConfig, dashboard: Arc<Dashboard>) -> Self {
        Self {
            config: Arc::new(config),
            dashboard,
            settings: Arc::new(RwLock::new(Settings::default())),
        }
    }
}
