//! Classifier trait: the seam to the statistical model.

use crate::domain::entities::FeatureVector;

/// Errors a classifier may report.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("Classifier produced an invalid probability: {0}")]
    InvalidProbability(f64),

    #[error("Classifier unavailable: {0}")]
    Unavailable(String),
}

/// Opaque probability-producing model.
///
/// Receives the numeric [`FeatureVector`] and the whitespace-delimited domain
/// token string produced by [`crate::analysis::tokenize`], and returns the
/// probability that the URL is phishing.
///
/// # Implementations
///
/// - [`crate::infrastructure::model::LogisticModel`] - weights loaded from JSON
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait Classifier: Send + Sync {
    /// Returns the phishing-class probability in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError`] if the model cannot produce a probability.
    fn predict_proba(&self, features: &FeatureVector, tokens: &str) -> Result<f64, ClassifierError>;

    /// Short description for health reporting.
    fn describe(&self) -> String {
        "classifier".to_string()
    }
}
