//! Heuristic report entries with severity colors.

use serde::Serialize;

/// Three-level severity shown next to each heuristic signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Green,
    Yellow,
    Red,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Green => "green",
            Severity::Yellow => "yellow",
            Severity::Red => "red",
        }
    }

    /// `Red` when `flagged`, `Green` otherwise.
    pub fn red_if(flagged: bool) -> Self {
        if flagged { Severity::Red } else { Severity::Green }
    }
}

/// Value of a heuristic signal.
///
/// Serialized untagged, so JSON carries the plain number, boolean, list or
/// string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HeuristicValue {
    Count(usize),
    Score(f64),
    Flag(bool),
    Matches(Vec<String>),
    Text(String),
}

impl HeuristicValue {
    /// Truthiness used by the flag-style color rules: non-zero numbers,
    /// `true`, non-empty lists and non-empty text.
    pub fn is_truthy(&self) -> bool {
        match self {
            HeuristicValue::Count(n) => *n != 0,
            HeuristicValue::Score(x) => *x != 0.0,
            HeuristicValue::Flag(b) => *b,
            HeuristicValue::Matches(items) => !items.is_empty(),
            HeuristicValue::Text(s) => !s.is_empty(),
        }
    }

    /// Numeric view for threshold rules; `None` for lists and text.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            HeuristicValue::Count(n) => Some(*n as f64),
            HeuristicValue::Score(x) => Some(*x),
            HeuristicValue::Flag(b) => Some(if *b { 1.0 } else { 0.0 }),
            HeuristicValue::Matches(_) | HeuristicValue::Text(_) => None,
        }
    }
}

/// One row of a [`HeuristicReport`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeuristicEntry {
    pub feature: &'static str,
    pub value: HeuristicValue,
    pub color: Severity,
}

/// Ordered heuristic rows in presentation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct HeuristicReport {
    pub entries: Vec<HeuristicEntry>,
}

impl HeuristicReport {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds a row by feature name.
    pub fn get(&self, feature: &str) -> Option<&HeuristicEntry> {
        self.entries.iter().find(|e| e.feature == feature)
    }

    /// Counts rows with the given color.
    pub fn count(&self, color: Severity) -> usize {
        self.entries.iter().filter(|e| e.color == color).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_severity_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Severity::Yellow).unwrap(), json!("yellow"));
        assert_eq!(Severity::Red.as_str(), "red");
    }

    #[test]
    fn test_value_serializes_untagged() {
        assert_eq!(serde_json::to_value(HeuristicValue::Count(3)).unwrap(), json!(3));
        assert_eq!(serde_json::to_value(HeuristicValue::Flag(true)).unwrap(), json!(true));
        assert_eq!(
            serde_json::to_value(HeuristicValue::Matches(vec!["login".into()])).unwrap(),
            json!(["login"])
        );
        assert_eq!(
            serde_json::to_value(HeuristicValue::Text("tk".into())).unwrap(),
            json!("tk")
        );
    }

    #[test]
    fn test_truthiness() {
        assert!(!HeuristicValue::Matches(vec![]).is_truthy());
        assert!(HeuristicValue::Count(1).is_truthy());
        assert!(!HeuristicValue::Flag(false).is_truthy());
    }

    #[test]
    fn test_report_serializes_as_list() {
        let report = HeuristicReport {
            entries: vec![HeuristicEntry {
                feature: "url_length",
                value: HeuristicValue::Count(10),
                color: Severity::Green,
            }],
        };

        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!([{"feature": "url_length", "value": 10, "color": "green"}])
        );
    }
}
