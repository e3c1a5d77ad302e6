//! DTOs for the prediction endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::application::services::Prediction;
use crate::domain::entities::ClassName;
use crate::error::ErrorInfo;

/// Query string of `GET /predict` and `GET /explain`.
///
/// `url` is optional so a missing parameter is reported as an empty URL.
#[derive(Debug, Deserialize)]
pub struct UrlQuery {
    pub url: Option<String>,
}

/// Verdict for one URL.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub url: String,
    pub prediction: u8,
    pub class_name: ClassName,
    pub probability: f64,
    pub threshold: f64,
    pub trusted: bool,
}

impl From<Prediction> for PredictResponse {
    fn from(p: Prediction) -> Self {
        Self {
            url: p.url,
            prediction: p.decision.predicted_label,
            class_name: p.decision.class_name,
            probability: p.decision.probability,
            threshold: p.decision.threshold,
            trusted: p.decision.trusted,
        }
    }
}

/// Request to classify several URLs at once.
///
/// Items are kept as raw JSON: a non-string item is reported as an empty URL
/// instead of failing the whole request.
#[derive(Debug, Deserialize, Validate)]
pub struct BatchPredictRequest {
    #[validate(length(min = 1, max = 100, message = "Between 1 and 100 URLs per request"))]
    pub urls: Vec<Value>,
}

/// Response containing batch processing results.
#[derive(Debug, Serialize)]
pub struct BatchPredictResponse {
    pub summary: BatchSummary,
    pub items: Vec<BatchResultItem>,
}

/// Individual result for a URL in the batch.
///
/// Uses untagged enum for cleaner JSON structure (no discriminator field).
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum BatchResultItem {
    Success {
        input: Value,
        #[serde(flatten)]
        result: PredictResponse,
    },
    Error {
        input: Value,
        error: ErrorInfo,
    },
}

/// Summary statistics for batch processing.
#[derive(Debug, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
}
