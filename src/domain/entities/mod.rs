//! Core data types produced by the analysis pipeline.
//!
//! Entities are plain data structures created fresh for every request; none of
//! them outlive the call that produced it.
//!
//! # Entity Types
//!
//! - [`UrlComponents`] - A URL decomposed into scheme, host, path and query
//! - [`FeatureVector`] - Fixed-order numeric encoding for the classifier
//! - [`HeuristicReport`] - Color-coded human-readable signals
//! - [`ClassificationDecision`] - Final verdict

pub mod components;
pub mod features;
pub mod report;
pub mod verdict;

pub use components::UrlComponents;
pub use features::{FEATURE_COUNT, FEATURE_NAMES, FeatureVector};
pub use report::{HeuristicEntry, HeuristicReport, HeuristicValue, Severity};
pub use verdict::{ClassName, ClassificationDecision};
