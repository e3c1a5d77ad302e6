//! HTTP-facing error type.
//!
//! Every error leaves the service as
//! `{"error": {"code": ..., "message": ..., "details": ...}}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::analysis::GuardRejection;
use crate::domain::ClassifierError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error description, also embedded in batch items.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts into the serializable body without consuming a response.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };
        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Request validation failed", details)
    }
}

impl From<GuardRejection> for AppError {
    fn from(rejection: GuardRejection) -> Self {
        AppError::bad_request(rejection.to_string(), json!({}))
    }
}

impl From<ClassifierError> for AppError {
    fn from(e: ClassifierError) -> Self {
        AppError::internal("Failed to classify URL", json!({ "reason": e.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_rejection_is_bad_request() {
        let err = AppError::from(GuardRejection::InvalidFormat);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let info = err.to_error_info();
        assert_eq!(info.code, "validation_error");
        assert_eq!(info.message, "Invalid URL or IP format");
    }

    #[test]
    fn test_classifier_error_is_internal() {
        let err = AppError::from(ClassifierError::Unavailable("model offline".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let info = err.to_error_info();
        assert_eq!(info.code, "internal_error");
        assert_eq!(info.details["reason"], "Classifier unavailable: model offline");
    }

    #[test]
    fn test_display_is_message() {
        let err = AppError::from(GuardRejection::Implausible);
        assert_eq!(err.to_string(), "Invalid or non-existent domain");

        let err = AppError::internal("Failed to classify URL", json!({}));
        assert_eq!(err.to_string(), "Failed to classify URL");
    }

    #[test]
    fn test_error_info_serialization() {
        let info = AppError::bad_request("bad", json!({"field": "url"})).to_error_info();
        let value = serde_json::to_value(info).unwrap();
        assert_eq!(
            value,
            json!({"code": "validation_error", "message": "bad", "details": {"field": "url"}})
        );
    }
}
