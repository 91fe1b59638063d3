use custdna_classifiers::InteractionClassifier;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};

use crate::config::ServerConfig;
use crate::routes::build_app;
use crate::state::AppState;
use crate::store::JsonFileStore;

/// Build state from configuration
pub fn build_state(config: &ServerConfig, metrics: PrometheusHandle) -> anyhow::Result<AppState> {
    let store = JsonFileStore::open(&config.data_path)?;
    let classifier = InteractionClassifier::with_config(config.classifier.clone())?;

    Ok(AppState::new(
        Arc::new(store),
        classifier,
        config.profile.clone(),
        metrics,
    ))
}

/// Run the server until SIGINT or SIGTERM
pub async fn run_server(config: ServerConfig, metrics: PrometheusHandle) -> anyhow::Result<()> {
    let state = build_state(&config, metrics)?;
    let app = build_app(state, &config.cors);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Customer DNA listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    warn!("Shutdown signal received, stopping server...");
}
