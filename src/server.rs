//! HTTP server initialization and runtime setup.
//!
//! Loads the classifier and reference tables, wires the detection service and
//! runs the Axum server until a shutdown signal arrives.

use crate::application::services::DetectionService;
use crate::config::Config;
use crate::domain::{Classifier, ReferenceStore};
use crate::infrastructure::model::LogisticModel;
use crate::infrastructure::references::load_reference_tables;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Classifier from `MODEL_PATH`
/// - Trusted domain and TLD tables (with fallbacks)
/// - Detection service
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The model file is missing or invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let model = LogisticModel::from_path(&config.model_path)
        .with_context(|| format!("Failed to load model from {}", config.model_path.display()))?;
    tracing::info!("Model loaded: {}", model.describe());

    let sources = config.reference_sources();
    let references = Arc::new(ReferenceStore::new(load_reference_tables(&sources)));

    let detection_service = Arc::new(DetectionService::new(
        Arc::new(model),
        references,
        config.threshold,
    ));

    let state = AppState::new(detection_service, sources);

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
