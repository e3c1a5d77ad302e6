//! Fixed-order numeric feature vector consumed by the classifier.

use serde::Serialize;

/// Number of features in a [`FeatureVector`].
pub const FEATURE_COUNT: usize = 14;

/// Feature names in positional order. The classifier depends on this order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "url_length",
    "num_digits",
    "num_special_chars",
    "num_subdomains",
    "has_ip",
    "num_slashes",
    "domain_length",
    "has_suspicious_keyword",
    "has_suspicious_tld",
    "domain_entropy",
    "num_query_params",
    "query_length",
    "has_https",
    "has_at_symbol",
];

/// Numeric encoding of a single URL.
///
/// Field declaration order matches [`FEATURE_NAMES`], so serialized JSON keeps
/// the positional contract. Flags are `0` or `1`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeatureVector {
    pub url_length: usize,
    pub num_digits: usize,
    pub num_special_chars: usize,
    pub num_subdomains: usize,
    pub has_ip: u8,
    pub num_slashes: usize,
    pub domain_length: usize,
    pub has_suspicious_keyword: u8,
    pub has_suspicious_tld: u8,
    pub domain_entropy: f64,
    pub num_query_params: usize,
    pub query_length: usize,
    pub has_https: u8,
    pub has_at_symbol: u8,
}

impl FeatureVector {
    /// Returns the values in [`FEATURE_NAMES`] order.
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.url_length as f64,
            self.num_digits as f64,
            self.num_special_chars as f64,
            self.num_subdomains as f64,
            f64::from(self.has_ip),
            self.num_slashes as f64,
            self.domain_length as f64,
            f64::from(self.has_suspicious_keyword),
            f64::from(self.has_suspicious_tld),
            self.domain_entropy,
            self.num_query_params as f64,
            self.query_length as f64,
            f64::from(self.has_https),
            f64::from(self.has_at_symbol),
        ]
    }

    /// Iterates over `(name, value)` pairs in positional order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
        FEATURE_NAMES.into_iter().zip(self.to_array())
    }

    /// Looks up a feature value by name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }
}
