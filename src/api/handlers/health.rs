//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Model**: Classifier loaded, with a short description
/// 2. **References**: Sizes of the current trusted domain and TLD tables
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "model": {
///       "status": "ok",
///       "message": "logistic regression (14 features, 120 tokens)"
///     },
///     "references": {
///       "status": "ok",
///       "message": "12 trusted domains, 1440 TLDs"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let model_check = check_model(&state);

    let references_check = check_references(&state);

    let all_healthy = model_check.status == "ok" && references_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            model: model_check,
            references: references_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Reports the loaded classifier.
fn check_model(state: &AppState) -> CheckStatus {
    CheckStatus {
        status: "ok".to_string(),
        message: Some(state.detection_service.classifier_description()),
    }
}

/// Checks that a usable TLD table is published.
///
/// An empty trusted domain list is valid; an empty TLD table would reject
/// every URL.
fn check_references(state: &AppState) -> CheckStatus {
    let tables = state.references.snapshot();
    let message = format!(
        "{} trusted domains, {} TLDs",
        tables.trusted.len(),
        tables.tlds.len()
    );

    if tables.tlds.is_empty() {
        CheckStatus {
            status: "error".to_string(),
            message: Some(format!("No valid TLDs loaded ({message})")),
        }
    } else {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(message),
        }
    }
}
