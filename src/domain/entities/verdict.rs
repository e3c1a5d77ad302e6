//! Final classification verdict.

use serde::Serialize;

/// Human-readable class of a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassName {
    Safe,
    Phishing,
}

impl ClassName {
    /// Numeric label: `0` for safe, `1` for phishing.
    pub fn label(&self) -> u8 {
        match self {
            ClassName::Safe => 0,
            ClassName::Phishing => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassName::Safe => "safe",
            ClassName::Phishing => "phishing",
        }
    }
}

/// Classifier output merged with threshold and trust status.
///
/// `probability` is always the classifier's value, even when a trusted domain
/// forces the verdict to safe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationDecision {
    pub predicted_label: u8,
    pub class_name: ClassName,
    pub probability: f64,
    pub threshold: f64,
    pub trusted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_labels() {
        assert_eq!(ClassName::Safe.label(), 0);
        assert_eq!(ClassName::Phishing.label(), 1);
        assert_eq!(
            serde_json::to_value(ClassName::Phishing).unwrap(),
            serde_json::json!("phishing")
        );
    }
}
