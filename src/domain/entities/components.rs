//! Decomposed URL components.

use serde::Serialize;

/// A URL split into the parts the analysis pipeline works with.
///
/// `host` is the raw network location exactly as it appeared in the input
/// (user info and port included, case preserved). IPv6 literals are always
/// bracket-wrapped (`[::1]`). A value with every field empty is the sentinel
/// produced for input that could not be decomposed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UrlComponents {
    pub scheme: String,
    pub host: String,
    pub path: String,
    pub query: String,
    pub is_ip_literal: bool,
}

impl UrlComponents {
    /// The all-empty value returned for malformed input.
    pub fn sentinel() -> Self {
        Self::default()
    }

    /// Returns `true` if this is the malformed-input sentinel.
    pub fn is_sentinel(&self) -> bool {
        *self == Self::sentinel()
    }
}
