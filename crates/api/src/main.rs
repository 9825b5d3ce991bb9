use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use azstat_client::ReportApi;
use azstat_dashboard::Dashboard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use azstat_api::config::ServerConfig;
use azstat_api::router::build_app_router;
use azstat_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "azstat_api=debug,azstat_dashboard=debug,azstat_client=debug,tower_http=debug"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Validation backend ---
    let backend = Arc::new(ReportApi::new(config.report_api_url.clone()));
    tracing::info!(api_url = %backend.api_url(), "Report API client created");

    // --- Dashboard flows ---
    let dashboard = Arc::new(Dashboard::new(backend));

    // --- App state / router ---
    let state = AppState::new(config.clone(), Arc::clone(&dashboard));
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    // In-flight uploads are cancelled and their entries left untouched.
    let drain = Duration::from_secs(config.shutdown_timeout_secs);
    if tokio::time::timeout(drain, dashboard.shutdown()).await.is_err() {
        tracing::warn!(timeout_secs = config.shutdown_timeout_secs, "Dashboard shutdown timed out");
    }

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl-C, starting graceful shutdown"),
        _ = terminate => tracing::info!("Received SIGTERM, starting graceful shutdown"),
    }
}
