//! Handlers for the prediction endpoints.

use axum::{
    Json,
    extract::{Query, State},
};
use validator::Validate;

use crate::api::dto::predict::{
    BatchPredictRequest, BatchPredictResponse, BatchResultItem, BatchSummary, PredictResponse,
    UrlQuery,
};
use crate::error::AppError;
use crate::state::AppState;

/// Classifies a single URL.
///
/// # Endpoint
///
/// `GET /predict?url=<url>`
///
/// # Response
///
/// ```json
/// {
///   "url": "http://secure-login.example.tk",
///   "prediction": 1,
///   "class_name": "phishing",
///   "probability": 0.91,
///   "threshold": 0.7,
///   "trusted": false
/// }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: empty, malformed or implausible URL
/// - **500 Internal Server Error**: classifier failure
pub async fn predict_handler(
    State(state): State<AppState>,
    Query(query): Query<UrlQuery>,
) -> Result<Json<PredictResponse>, AppError> {
    let prediction = state.detection_service.predict(query.url.as_deref())?;
    Ok(Json(prediction.into()))
}

/// Classifies one or more URLs.
///
/// # Endpoint
///
/// `POST /api/predict`
///
/// # Batch Processing
///
/// Processes URLs independently. If one fails, others continue processing.
/// Each result includes either the verdict or error information.
///
/// # Request Body
///
/// ```json
/// { "urls": ["https://example.com", "secure-login.example.tk"] }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "summary": { "total": 2, "successful": 2, "failed": 0 },
///   "items": [
///     { "input": "https://example.com", "url": "https://example.com", "prediction": 0, ... }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the list is empty or holds more than 100 items.
/// Individual URL errors are returned in the response items array.
pub async fn batch_predict_handler(
    State(state): State<AppState>,
    Json(payload): Json<BatchPredictRequest>,
) -> Result<Json<BatchPredictResponse>, AppError> {
    payload.validate()?;

    let batch = state.detection_service.predict_batch(payload.urls);

    let items = batch
        .items
        .into_iter()
        .map(|item| match item.result {
            Ok(prediction) => BatchResultItem::Success {
                input: item.input,
                result: prediction.into(),
            },
            Err(err) => BatchResultItem::Error {
                input: item.input,
                error: err.to_error_info(),
            },
        })
        .collect();

    Ok(Json(BatchPredictResponse {
        summary: BatchSummary {
            total: batch.total,
            successful: batch.successful,
            failed: batch.failed,
        },
        items,
    }))
}
