//! Handler for reloading the reference tables.

use axum::{Json, extract::State};
use serde_json::json;
use tracing::info;

use crate::api::dto::references::ReloadResponse;
use crate::error::AppError;
use crate::infrastructure::references::load_reference_tables;
use crate::state::AppState;

/// Rebuilds the trusted domain and TLD tables from their configured sources.
///
/// # Endpoint
///
/// `POST /api/references/reload`
///
/// The new tables are built completely before being published; requests
/// already in flight finish with the tables they started with. Unreadable
/// sources fall back exactly as at start-up.
///
/// # Errors
///
/// Returns 500 Internal Server Error if the loader task panics.
pub async fn reload_references_handler(
    State(state): State<AppState>,
) -> Result<Json<ReloadResponse>, AppError> {
    let sources = state.reference_sources.clone();
    let tables = tokio::task::spawn_blocking(move || load_reference_tables(&sources))
        .await
        .map_err(|e| {
            AppError::internal(
                "Failed to reload reference tables",
                json!({ "reason": e.to_string() }),
            )
        })?;

    let response = ReloadResponse {
        trusted_domains: tables.trusted.len(),
        valid_tlds: tables.tlds.len(),
    };

    state.references.replace(tables);
    info!(
        "Reference tables reloaded: {} trusted domains, {} TLDs",
        response.trusted_domains, response.valid_tlds
    );

    Ok(Json(response))
}
