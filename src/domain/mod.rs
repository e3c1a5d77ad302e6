//! Domain layer containing data types, reference tables and the model seam.
//!
//! # Architecture
//!
//! - [`entities`] - Data produced by the analysis pipeline
//! - [`reference`] - Immutable trusted-domain and TLD tables
//! - [`classifier`] - Trait implemented by probability-producing models
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - The classifier trait defines the contract implemented by the infrastructure layer
//! - Orchestration lives in services (see [`crate::application::services`])

pub mod classifier;
pub mod entities;
pub mod reference;

pub use classifier::{Classifier, ClassifierError};
pub use reference::{ReferenceStore, ReferenceTables, TrustedDomains, ValidTlds};

#[cfg(test)]
pub use classifier::MockClassifier;
