//! Logistic regression classifier loaded from a JSON weights file.
//!
//! # File format
//!
//! ```json
//! {
//!   "intercept": -2.5,
//!   "feature_weights": { "url_length": 0.02, "has_ip": 1.8 },
//!   "token_weights": { "login": 1.1, "paypal": 0.9 }
//! }
//! ```
//!
//! Features absent from `feature_weights` weigh `0`. Each whitespace-separated
//! domain token adds its weight (unknown tokens add nothing), so a token that
//! appears twice counts twice.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::classifier::{Classifier, ClassifierError};
use crate::domain::entities::{FEATURE_COUNT, FEATURE_NAMES, FeatureVector};

/// Errors raised while loading a model.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Failed to read model {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid model JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown feature in model: {0}")]
    UnknownFeature(String),

    #[error("Non-finite weight for {0}")]
    NonFiniteWeight(String),
}

#[derive(Debug, Deserialize)]
struct ModelFile {
    intercept: f64,
    #[serde(default)]
    feature_weights: HashMap<String, f64>,
    #[serde(default)]
    token_weights: HashMap<String, f64>,
}

/// Linear model over the feature vector and domain tokens.
#[derive(Debug, Clone)]
pub struct LogisticModel {
    intercept: f64,
    feature_weights: [f64; FEATURE_COUNT],
    token_weights: HashMap<String, f64>,
}

impl LogisticModel {
    /// Loads a model from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] if the file cannot be read or fails validation.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Parses and validates a model from JSON text.
    ///
    /// # Errors
    ///
    /// - [`ModelError::Json`] on malformed JSON
    /// - [`ModelError::UnknownFeature`] if a weight names no known feature
    /// - [`ModelError::NonFiniteWeight`] if any weight or the intercept is NaN/infinite
    pub fn from_json(text: &str) -> Result<Self, ModelError> {
        let file: ModelFile = serde_json::from_str(text)?;

        if !file.intercept.is_finite() {
            return Err(ModelError::NonFiniteWeight("intercept".to_string()));
        }

        let mut feature_weights = [0.0; FEATURE_COUNT];
        for (name, weight) in file.feature_weights {
            let Some(index) = FEATURE_NAMES.iter().position(|n| *n == name) else {
                return Err(ModelError::UnknownFeature(name));
            };
            if !weight.is_finite() {
                return Err(ModelError::NonFiniteWeight(name));
            }
            feature_weights[index] = weight;
        }

        if let Some((token, _)) = file.token_weights.iter().find(|(_, w)| !w.is_finite()) {
            return Err(ModelError::NonFiniteWeight(format!("token '{token}'")));
        }

        Ok(Self {
            intercept: file.intercept,
            feature_weights,
            token_weights: file.token_weights,
        })
    }

    /// Raw linear score before the sigmoid.
    pub fn score(&self, features: &FeatureVector, tokens: &str) -> f64 {
        let linear: f64 = self
            .feature_weights
            .iter()
            .zip(features.to_array())
            .map(|(w, x)| w * x)
            .sum();

        let lexical: f64 = tokens
            .split_whitespace()
            .filter_map(|t| self.token_weights.get(t))
            .sum();

        self.intercept + linear + lexical
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl Classifier for LogisticModel {
    fn predict_proba(&self, features: &FeatureVector, tokens: &str) -> Result<f64, ClassifierError> {
        let p = sigmoid(self.score(features, tokens));
        if !(0.0..=1.0).contains(&p) {
            return Err(ClassifierError::InvalidProbability(p));
        }
        Ok(p)
    }

    fn describe(&self) -> String {
        format!(
            "logistic regression ({} features, {} tokens)",
            self.feature_weights.iter().filter(|w| **w != 0.0).count(),
            self.token_weights.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_intercept_only() {
        let model = LogisticModel::from_json(r#"{"intercept": 0.0}"#).unwrap();
        let p = model
            .predict_proba(&FeatureVector::default(), "")
            .unwrap();
        assert!(approx(p, 0.5));
    }

    #[test]
    fn test_feature_and_token_weights() {
        let model = LogisticModel::from_json(
            r#"{
                "intercept": -1.0,
                "feature_weights": {"has_ip": 2.0, "url_length": 0.1},
                "token_weights": {"login": 0.5}
            }"#,
        )
        .unwrap();

        let features = FeatureVector {
            has_ip: 1,
            url_length: 10,
            ..Default::default()
        };

        // -1 + 2*1 + 0.1*10 + 0.5 + 0.5
        assert!(approx(model.score(&features, "login x login"), 3.0));
        let p = model.predict_proba(&features, "login x login").unwrap();
        assert!(approx(p, sigmoid(3.0)));
    }

    #[test]
    fn test_probability_stays_in_range() {
        let model = LogisticModel::from_json(
            r#"{"intercept": 0.0, "feature_weights": {"url_length": 1000.0}}"#,
        )
        .unwrap();
        let features = FeatureVector {
            url_length: 10_000,
            ..Default::default()
        };
        let p = model.predict_proba(&features, "").unwrap();
        assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn test_unknown_feature_rejected() {
        let err = LogisticModel::from_json(
            r#"{"intercept": 0.0, "feature_weights": {"num_emojis": 1.0}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::UnknownFeature(name) if name == "num_emojis"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            LogisticModel::from_json("{not json"),
            Err(ModelError::Json(_))
        ));
        assert!(matches!(
            LogisticModel::from_json(r#"{"feature_weights": {}}"#),
            Err(ModelError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            LogisticModel::from_path("/nonexistent/model.json"),
            Err(ModelError::Io { .. })
        ));
    }

    #[test]
    fn test_describe() {
        let model = LogisticModel::from_json(
            r#"{"intercept": 0.0, "feature_weights": {"has_ip": 1.0}, "token_weights": {"a": 1.0, "b": 1.0}}"#,
        )
        .unwrap();
        assert_eq!(model.describe(), "logistic regression (1 features, 2 tokens)");
    }
}
