mod domain;
mod clients;
mod config;
mod http;
mod predictor;

mod app_system;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;

mod actor_framework;
mod user_actor;
mod item_actor;
mod order_actor;

use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use crate::app_system::{RecordSystem, setup_tracing};
use crate::config::Settings;
use crate::http::{build_router, AppState};
use crate::predictor::HttpPricePredictor;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let settings = Settings::from_env()?;
    info!(
        predictor_url = %settings.predictor_url,
        predictor_timeout = ?settings.predictor_timeout,
        bind_addr = %settings.bind_addr,
        "Starting record service"
    );

    let predictor = HttpPricePredictor::new(settings.predictor_url.clone(), settings.predictor_timeout)
        .context("failed to build price predictor client")?;
    let system = RecordSystem::new(settings.actor_buffer_size, Arc::new(predictor));

    let app = build_router(AppState::from(&system));
    let listener = tokio::net::TcpListener::bind(settings.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr))?;
    info!(addr = %listener.local_addr()?, "Listening");

    // The router (and its client clones) is dropped when serve returns.
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    system.shutdown().await?;

    info!("Record service stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
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

    info!("Shutdown signal received");
}
