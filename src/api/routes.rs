//! API route configuration.

use crate::api::handlers::{batch_predict_handler, reload_references_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /predict`            - Classify up to 100 URLs in one request
/// - `POST /references/reload`  - Rebuild and publish the reference tables
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/predict", post(batch_predict_handler))
        .route("/references/reload", post(reload_references_handler))
}
