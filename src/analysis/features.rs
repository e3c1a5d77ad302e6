//! Feature vector extraction for the classifier.
//!
//! Every URL is processed independently. Extraction is total: a URL that
//! cannot be decomposed produces zero-valued host/path/query features, never
//! an error for the batch.

use crate::analysis::entropy::shannon_entropy;
use crate::analysis::normalizer::normalize_url;
use crate::analysis::parser::{is_ip_address, parse_url};
use crate::domain::entities::FeatureVector;

/// Keywords that raise `has_suspicious_keyword` when found in host or path.
pub const SUSPICIOUS_KEYWORDS: [&str; 10] = [
    "login", "secure", "verify", "update", "bank", "account", "free", "bonus", "click", "win",
];

/// Host suffixes that raise `has_suspicious_tld`.
pub const SUSPICIOUS_TLD_SUFFIXES: [&str; 7] = [".xyz", ".top", ".gq", ".tk", ".ml", ".icu", ".cn"];

/// Characters counted by `num_special_chars`.
const SPECIAL_CHARS: [char; 5] = ['@', '?', '=', '&', '%'];

fn flag(value: bool) -> u8 {
    u8::from(value)
}

/// Extracts the [`FeatureVector`] for one URL.
///
/// The input is normalized first; since normalization is idempotent,
/// already-normalized URLs pass through unchanged. Host, path and scheme come
/// from [`parse_url`]; host and path are lower-cased for keyword and TLD
/// checks.
///
/// # Examples
///
/// ```
/// use phishing_detector::analysis::extract_features;
///
/// let features = extract_features("http://example.com/login?x=1&y=2");
/// assert_eq!(features.has_https, 0);
/// assert_eq!(features.num_query_params, 2);
/// assert_eq!(features.has_suspicious_keyword, 1);
/// ```
pub fn extract_features(url: &str) -> FeatureVector {
    let url = normalize_url(url);
    let parsed = parse_url(&url);

    let domain = parsed.host.to_lowercase();
    let path = parsed.path.to_lowercase();
    let query = parsed.query.as_str();
    let host_and_path = format!("{domain}{path}");

    FeatureVector {
        url_length: url.chars().count(),
        num_digits: url.chars().filter(char::is_ascii_digit).count(),
        num_special_chars: url.chars().filter(|c| SPECIAL_CHARS.contains(c)).count(),
        num_subdomains: domain.matches('.').count().saturating_sub(1),
        has_ip: flag(is_ip_address(&domain)),
        num_slashes: url.matches('/').count(),
        domain_length: domain.chars().count(),
        has_suspicious_keyword: flag(
            SUSPICIOUS_KEYWORDS
                .iter()
                .any(|kw| host_and_path.contains(kw)),
        ),
        has_suspicious_tld: flag(
            SUSPICIOUS_TLD_SUFFIXES
                .iter()
                .any(|suffix| domain.ends_with(suffix)),
        ),
        domain_entropy: shannon_entropy(&domain),
        num_query_params: query.matches('=').count(),
        query_length: query.chars().count(),
        has_https: flag(parsed.scheme == "https"),
        has_at_symbol: flag(url.contains('@')),
    }
}

/// Extracts features for every URL in `urls`, preserving order.
///
/// Accepts any iterable of string-like items: slices, vectors, iterators of
/// `String` or `&str`.
pub fn extract_features_batch<I>(urls: I) -> Vec<FeatureVector>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    urls.into_iter()
        .map(|url| extract_features(url.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_url_features() {
        let f = extract_features("http://example.com/login?x=1&y=2");
        assert_eq!(f.has_https, 0);
        assert_eq!(f.has_at_symbol, 0);
        assert_eq!(f.num_query_params, 2);
        assert_eq!(f.has_suspicious_keyword, 1);
        assert_eq!(f.url_length, "http://example.com/login?x=1&y=2".len());
        assert_eq!(f.num_digits, 2);
        assert_eq!(f.num_special_chars, 4);
        assert_eq!(f.num_subdomains, 0);
        assert_eq!(f.has_ip, 0);
        assert_eq!(f.num_slashes, 3);
        assert_eq!(f.domain_length, 11);
        assert_eq!(f.query_length, 7);
        assert_eq!(f.has_suspicious_tld, 0);
    }

    #[test]
    fn test_only_decimal_digits_are_counted() {
        let f = extract_features("http://a\u{00BD}\u{216B}.com/page2");
        assert_eq!(f.num_digits, 1);
    }

    #[test]
    fn test_ip_host() {
        let f = extract_features("http://192.168.0.1");
        assert_eq!(f.has_ip, 1);
        assert_eq!(f.num_subdomains, 2);
    }

    #[test]
    fn test_ipv6_host() {
        let f = extract_features("2001:db8::1");
        assert_eq!(f.has_ip, 1);
        assert_eq!(f.domain_length, "[2001:db8::1]".len());
    }

    #[test]
    fn test_https_and_at_symbol() {
        let f = extract_features("https://user@secure-paypal.xyz/");
        assert_eq!(f.has_https, 1);
        assert_eq!(f.has_at_symbol, 1);
        assert_eq!(f.has_suspicious_tld, 1);
        assert_eq!(f.has_suspicious_keyword, 1);
    }

    #[test]
    fn test_keyword_check_is_case_insensitive() {
        let f = extract_features("http://EXAMPLE.com/LOGIN");
        assert_eq!(f.has_suspicious_keyword, 1);
    }

    #[test]
    fn test_keyword_in_query_is_ignored() {
        let f = extract_features("http://example.com/?next=login");
        assert_eq!(f.has_suspicious_keyword, 0);
    }

    #[test]
    fn test_subdomain_count() {
        assert_eq!(extract_features("http://a.b.example.com").num_subdomains, 2);
        assert_eq!(extract_features("http://localhost").num_subdomains, 0);
    }

    #[test]
    fn test_domain_entropy_uses_host_only() {
        let f = extract_features("http://aaaa/bcdefgh");
        assert_eq!(f.domain_entropy, 0.0);
    }

    #[test]
    fn test_malformed_url_degrades_to_defaults() {
        let f = extract_features("http://exa[mple.com/login?a=1");
        assert_eq!(f.domain_length, 0);
        assert_eq!(f.has_ip, 0);
        assert_eq!(f.num_query_params, 0);
        assert_eq!(f.has_suspicious_keyword, 0);
        // URL-level counts still come from the full string
        assert_eq!(f.url_length, "http://exa[mple.com/login?a=1".len());
        assert_eq!(f.num_special_chars, 2);
    }

    #[test]
    fn test_empty_url() {
        assert_eq!(extract_features(""), FeatureVector::default());
    }

    #[test]
    fn test_batch_preserves_order() {
        let urls = vec!["http://192.168.0.1".to_string(), "https://example.com".to_string()];
        let features = extract_features_batch(&urls);
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].has_ip, 1);
        assert_eq!(features[1].has_https, 1);
    }

    #[test]
    fn test_batch_accepts_str_slices() {
        let features = extract_features_batch(["a.com", "", "b.tk"]);
        assert_eq!(features.len(), 3);
        assert_eq!(features[1], FeatureVector::default());
        assert_eq!(features[2].has_suspicious_tld, 1);
    }
}
