//! # Phishing Detector
//!
//! URL analysis engine and HTTP service for phishing detection, built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Analysis Core** ([`analysis`]) - Pure normalization, parsing, features, heuristics and decision
//! - **Domain Layer** ([`domain`]) - Entities, reference tables and the classifier trait
//! - **Application Layer** ([`application`]) - Detection workflow orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Model and reference table loading
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Tolerant URL normalization that never fails
//! - 14-feature numeric vector plus domain tokens for the classifier
//! - Eleven color-coded heuristic signals for human review
//! - Trusted domain whitelist that overrides the model
//! - Boundary guards rejecting malformed and implausible URLs
//! - Hot reload of reference tables without restarting
//!
//! ## Quick Start
//!
//! ```bash
//! export MODEL_PATH=model/phishing_model.json
//! export TRUSTED_DOMAINS_PATH=config/trusted_domains.json
//!
//! cargo run
//! curl 'http://localhost:8000/predict?url=secure-login.example.tk'
//! ```
//!
//! ## Library Use
//!
//! ```
//! use phishing_detector::analysis::{extract_features, parse_url, tokenize};
//!
//! let components = parse_url("login.example.com/account?id=1");
//! assert_eq!(components.host, "login.example.com");
//!
//! let features = extract_features("http://192.168.0.1");
//! assert_eq!(features.has_ip, 1);
//!
//! assert_eq!(tokenize("http://b-site.org"), "b site org");
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod analysis;
pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::analysis::{
        decide, explain, extract_features, normalize_url, parse_url, tokenize,
    };
    pub use crate::application::services::DetectionService;
    pub use crate::domain::entities::{
        ClassificationDecision, FeatureVector, HeuristicReport, UrlComponents,
    };
    pub use crate::domain::{
        Classifier, ClassifierError, ReferenceStore, ReferenceTables, TrustedDomains, ValidTlds,
    };
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
