//! Application layer services implementing the detection workflow.
//!
//! Services combine the pure analysis core with the injected classifier and
//! reference tables, and translate rejections into [`crate::error::AppError`].
//!
//! # Available Services
//!
//! - [`services::detection_service::DetectionService`] - Prediction, explanation and batch prediction

pub mod services;
