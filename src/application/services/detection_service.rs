//! Phishing detection orchestration.

use std::sync::Arc;

use serde_json::{Value, json};
use tracing::{debug, info};

use crate::analysis::{self, RawInput};
use crate::domain::entities::{ClassificationDecision, HeuristicReport};
use crate::domain::{Classifier, ReferenceStore};
use crate::error::AppError;

/// Human-readable description attached to every explanation.
pub const EXPLANATION_DETAIL: &str = "Heuristic URL signals with color-coded severity";

/// Result of classifying one URL.
#[derive(Debug, Clone)]
pub struct Prediction {
    /// The normalized URL that was analysed.
    pub url: String,
    pub decision: ClassificationDecision,
}

/// Heuristic explanation for one URL.
#[derive(Debug, Clone)]
pub struct Explanation {
    pub url: String,
    pub report: HeuristicReport,
    pub detail: &'static str,
    pub trusted: bool,
}

/// Outcome of a single item within a batch.
#[derive(Debug)]
pub struct BatchItem {
    /// The input exactly as received.
    pub input: Value,
    pub result: Result<Prediction, AppError>,
}

/// Per-item outcomes plus counters.
#[derive(Debug)]
pub struct BatchPrediction {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub items: Vec<BatchItem>,
}

/// Service running the full detection pipeline for one request.
///
/// Each call captures one [`ReferenceStore::snapshot`] and uses it for every
/// step, so a concurrent reload never mixes old and new tables in a single
/// verdict.
///
/// # Pipeline
///
/// 1. Normalize the raw input
/// 2. Run the boundary guards (empty, format, plausibility)
/// 3. Extract features and domain tokens
/// 4. Ask the [`Classifier`] for a probability
/// 5. Combine probability, threshold and trust status
pub struct DetectionService {
    classifier: Arc<dyn Classifier>,
    references: Arc<ReferenceStore>,
    threshold: f64,
}

impl DetectionService {
    pub fn new(
        classifier: Arc<dyn Classifier>,
        references: Arc<ReferenceStore>,
        threshold: f64,
    ) -> Self {
        Self {
            classifier,
            references,
            threshold,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn references(&self) -> &Arc<ReferenceStore> {
        &self.references
    }

    pub fn classifier_description(&self) -> String {
        self.classifier.describe()
    }

    /// Classifies a single URL.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if a boundary guard rejects the input
    /// - [`AppError::Internal`] if the classifier fails
    pub fn predict<'a>(&self, raw: impl Into<RawInput<'a>>) -> Result<Prediction, AppError> {
        let url = analysis::normalize_raw(raw.into());
        let tables = self.references.snapshot();

        analysis::guard(&url, &tables.tlds).inspect_err(|rejection| {
            debug!("Rejected {:?}: {}", url, rejection);
        })?;

        let features = analysis::extract_features(&url);
        let tokens = analysis::tokenize(&url);
        let probability = self.classifier.predict_proba(&features, &tokens)?;

        if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
            return Err(AppError::internal(
                "Failed to classify URL",
                json!({ "reason": format!("probability out of range: {probability}") }),
            ));
        }

        let decision = analysis::decide(&url, probability, self.threshold, &tables.trusted);

        info!(
            "[PREDICT] url={}, probability={:.4}, prediction={} ({}), trusted={}",
            url,
            decision.probability,
            decision.predicted_label,
            decision.class_name.as_str(),
            decision.trusted
        );

        Ok(Prediction { url, decision })
    }

    /// Builds the heuristic explanation for a single URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a boundary guard rejects the input.
    pub fn explain<'a>(&self, raw: impl Into<RawInput<'a>>) -> Result<Explanation, AppError> {
        let url = analysis::normalize_raw(raw.into());
        let tables = self.references.snapshot();

        analysis::guard(&url, &tables.tlds)?;

        let report = analysis::explain(&url, &tables.trusted);
        let trusted = report
            .get("is_trusted_domain")
            .is_some_and(|entry| entry.value.is_truthy());

        info!(
            "[EXPLAIN] url={}, trusted={}, heuristics_count={}",
            url,
            trusted,
            report.len()
        );

        Ok(Explanation {
            url,
            report,
            detail: EXPLANATION_DETAIL,
            trusted,
        })
    }

    /// Classifies every item independently.
    ///
    /// A failing item is recorded as an error entry; it never aborts the batch.
    pub fn predict_batch(&self, inputs: Vec<Value>) -> BatchPrediction {
        let total = inputs.len();
        let mut successful = 0;
        let mut failed = 0;

        let items = inputs
            .into_iter()
            .map(|input| {
                let result = self.predict(&input);
                if result.is_ok() {
                    successful += 1;
                } else {
                    failed += 1;
                }
                BatchItem { input, result }
            })
            .collect();

        BatchPrediction {
            total,
            successful,
            failed,
            items,
        }
    }
}
