#![allow(dead_code)]

use std::io::Write;
use std::sync::Arc;

use phishing_detector::application::services::DetectionService;
use phishing_detector::domain::entities::FeatureVector;
use phishing_detector::domain::{
    Classifier, ClassifierError, ReferenceStore, ReferenceTables, TrustedDomains, ValidTlds,
};
use phishing_detector::infrastructure::references::{ReferenceSources, load_reference_tables};
use phishing_detector::state::AppState;
use tempfile::NamedTempFile;

/// Classifier that always returns the same probability.
pub struct FixedClassifier(pub f64);

impl Classifier for FixedClassifier {
    fn predict_proba(&self, _: &FeatureVector, _: &str) -> Result<f64, ClassifierError> {
        Ok(self.0)
    }

    fn describe(&self) -> String {
        format!("fixed ({})", self.0)
    }
}

/// Classifier that always fails.
pub struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn predict_proba(&self, _: &FeatureVector, _: &str) -> Result<f64, ClassifierError> {
        Err(ClassifierError::Unavailable("test classifier offline".to_string()))
    }
}

pub fn create_test_state(classifier: impl Classifier + 'static, trusted: &[&str]) -> AppState {
    let tables = ReferenceTables::new(
        TrustedDomains::new(trusted.iter().copied()),
        ValidTlds::fallback(),
    );
    build_state(classifier, tables, ReferenceSources::default())
}

pub fn create_state_from_sources(
    classifier: impl Classifier + 'static,
    sources: ReferenceSources,
) -> AppState {
    let tables = load_reference_tables(&sources);
    build_state(classifier, tables, sources)
}

fn build_state(
    classifier: impl Classifier + 'static,
    tables: ReferenceTables,
    sources: ReferenceSources,
) -> AppState {
    let references = Arc::new(ReferenceStore::new(tables));
    let service = Arc::new(DetectionService::new(Arc::new(classifier), references, 0.7));
    AppState::new(service, sources)
}

pub fn write_temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}
