//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /predict?url=`   - Classify a single URL
//! - `GET  /explain?url=`   - Heuristic explanation of a single URL
//! - `GET  /health`         - Health check: model, reference tables
//! - `/api/*`               - Batch prediction and reference table reload
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin, method and header
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{explain_handler, health_handler, predict_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/predict", get(predict_handler))
        .route("/explain", get(explain_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
