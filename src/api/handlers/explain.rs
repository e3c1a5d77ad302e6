//! Handler for the explanation endpoint.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::explain::ExplainResponse;
use crate::api::dto::predict::UrlQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Returns color-coded heuristic signals for a URL.
///
/// # Endpoint
///
/// `GET /explain?url=<url>`
///
/// The eleven rows always come in the same order. The classifier is not
/// consulted.
///
/// # Errors
///
/// Returns 400 Bad Request for empty, malformed or implausible URLs.
pub async fn explain_handler(
    State(state): State<AppState>,
    Query(query): Query<UrlQuery>,
) -> Result<Json<ExplainResponse>, AppError> {
    let explanation = state.detection_service.explain(query.url.as_deref())?;
    Ok(Json(explanation.into()))
}
