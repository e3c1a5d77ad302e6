//! Business logic services for the application layer.

pub mod detection_service;

pub use detection_service::{
    BatchItem, BatchPrediction, DetectionService, EXPLANATION_DETAIL, Explanation, Prediction,
};
