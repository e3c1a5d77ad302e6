//! Final verdict from classifier probability, threshold and trust status.

use crate::analysis::normalizer::normalize_url;
use crate::analysis::parser::split_uri;
use crate::analysis::trust::is_trusted;
use crate::domain::entities::{ClassName, ClassificationDecision};
use crate::domain::reference::TrustedDomains;

/// Default decision threshold.
pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// Combines the classifier `probability` with `threshold` and trust status.
///
/// A trusted host (see [`is_trusted`]) is always `safe` with label `0`; the
/// probability is still reported unchanged. Otherwise the URL is `phishing`
/// when `probability >= threshold`.
pub fn decide(
    url: &str,
    probability: f64,
    threshold: f64,
    trusted_domains: &TrustedDomains,
) -> ClassificationDecision {
    let url = normalize_url(url);
    let host = split_uri(&url).map(|p| p.netloc).unwrap_or_default();
    let trusted = is_trusted(&host, trusted_domains);

    let class_name = if trusted || probability < threshold {
        ClassName::Safe
    } else {
        ClassName::Phishing
    };

    ClassificationDecision {
        predicted_label: class_name.label(),
        class_name,
        probability,
        threshold,
        trusted,
    }
}
