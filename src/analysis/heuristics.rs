//! Human-interpretable heuristic signals with severity colors.
//!
//! These signals are computed independently of the classifier features in
//! [`crate::analysis::features`]: special characters, entropy scope and
//! keyword lists intentionally differ and must not be unified.

use crate::analysis::entropy::shannon_entropy;
use crate::analysis::normalizer::normalize_url;
use crate::analysis::parser::split_uri;
use crate::analysis::trust::{canonical_host, is_trusted};
use crate::domain::entities::{HeuristicEntry, HeuristicReport, HeuristicValue, Severity};
use crate::domain::reference::TrustedDomains;

/// Keywords searched in the whole lower-cased URL.
pub const URL_KEYWORDS: [&str; 5] = ["login", "secure", "update", "verify", "account"];

/// Keywords searched in the lower-cased path.
pub const PATH_KEYWORDS: [&str; 6] = ["claim", "bonus", "free", "gift", "win", "prize"];

/// TLDs reported as suspicious.
pub const SUSPICIOUS_TLDS: [&str; 5] = ["tk", "xyz", "top", "gq", "cf"];

/// Characters summed by the `num_special_chars` signal.
const SPECIAL_CHARS: [char; 6] = ['@', '-', '_', '=', '?', '%'];

/// Maps a signal to its severity.
///
/// Threshold rules apply to numeric signals, flag rules to booleans and
/// keyword lists. Any feature without a rule is [`Severity::Yellow`].
pub fn colorize(feature: &str, value: &HeuristicValue) -> Severity {
    let number = value.as_f64();
    match (feature, number) {
        ("url_length", Some(n)) => {
            if n < 30.0 {
                Severity::Green
            } else if n < 60.0 {
                Severity::Yellow
            } else {
                Severity::Red
            }
        }
        ("num_dots" | "num_special_chars" | "num_subdomains", Some(n)) => {
            if n <= 2.0 { Severity::Green } else { Severity::Red }
        }
        ("entropy", Some(n)) => {
            if n < 4.0 { Severity::Green } else { Severity::Red }
        }
        (
            "is_ip_address" | "suspicious_keywords" | "suspicious_path_keywords"
            | "is_suspicious_tld",
            _,
        ) => Severity::red_if(value.is_truthy()),
        _ => Severity::Yellow,
    }
}

fn row(feature: &'static str, value: HeuristicValue) -> HeuristicEntry {
    let color = colorize(feature, &value);
    HeuristicEntry {
        feature,
        value,
        color,
    }
}

fn matches_in(haystack: &str, keywords: &[&str]) -> Vec<String> {
    keywords
        .iter()
        .filter(|kw| haystack.contains(*kw))
        .map(|kw| kw.to_string())
        .collect()
}

/// Computes the eleven-row heuristic report for `url`.
///
/// The URL is normalized first. The host is the lower-cased network location
/// with a leading `www.` removed; a URL that cannot be split is analysed with
/// an empty host and path.
///
/// # Rows
///
/// | feature | color |
/// |---|---|
/// | `url_length` | green <30, yellow <60, else red |
/// | `num_dots` | green ≤2 else red |
/// | `num_special_chars` | green ≤2 else red |
/// | `entropy` (whole URL) | green <4.0 else red |
/// | `is_ip_address` | red if true |
/// | `num_subdomains` | green ≤2 else red |
/// | `suspicious_keywords` | red if any |
/// | `suspicious_path_keywords` | red if any |
/// | `tld` | red if suspicious |
/// | `is_suspicious_tld` | red if true |
/// | `is_trusted_domain` | green if true else red |
pub fn explain(url: &str, trusted: &TrustedDomains) -> HeuristicReport {
    let url = normalize_url(url);
    let parts = split_uri(&url).unwrap_or_default();

    let domain = canonical_host(&parts.netloc);
    let path = parts.path.to_lowercase();
    let lowered_url = url.to_lowercase();

    let trusted_domain = is_trusted(&parts.netloc, trusted);

    let num_special = url.chars().filter(|c| SPECIAL_CHARS.contains(c)).count();

    let digits_only = domain.replace('.', "");
    let is_ip = !digits_only.is_empty() && digits_only.chars().all(|c| c.is_ascii_digit());

    let num_subdomains = if domain.contains('.') {
        domain.split('.').count().saturating_sub(2)
    } else {
        0
    };

    let tld = if domain.contains('.') {
        domain.rsplit('.').next().unwrap_or_default().to_string()
    } else {
        String::new()
    };
    let is_bad_tld = SUSPICIOUS_TLDS.contains(&tld.as_str());

    let entries = vec![
        row("url_length", HeuristicValue::Count(url.chars().count())),
        row("num_dots", HeuristicValue::Count(url.matches('.').count())),
        row("num_special_chars", HeuristicValue::Count(num_special)),
        row("entropy", HeuristicValue::Score(shannon_entropy(&url))),
        row("is_ip_address", HeuristicValue::Flag(is_ip)),
        row("num_subdomains", HeuristicValue::Count(num_subdomains)),
        row(
            "suspicious_keywords",
            HeuristicValue::Matches(matches_in(&lowered_url, &URL_KEYWORDS)),
        ),
        row(
            "suspicious_path_keywords",
            HeuristicValue::Matches(matches_in(&path, &PATH_KEYWORDS)),
        ),
        HeuristicEntry {
            feature: "tld",
            value: HeuristicValue::Text(tld),
            color: Severity::red_if(is_bad_tld),
        },
        row("is_suspicious_tld", HeuristicValue::Flag(is_bad_tld)),
        HeuristicEntry {
            feature: "is_trusted_domain",
            value: HeuristicValue::Flag(trusted_domain),
            color: if trusted_domain {
                Severity::Green
            } else {
                Severity::Red
            },
        },
    ];

    HeuristicReport { entries }
}
