//! Boundary guards run before the analysis pipeline.
//!
//! Guards are predicates: they never fail, they only say whether input may
//! proceed. Rejected input never reaches feature extraction or the classifier.

use regex::Regex;
use std::sync::LazyLock;

use crate::analysis::normalizer::{SCHEME_PREFIX, trim_blank};
use crate::analysis::parser::{is_ip_address, split_uri};
use crate::domain::reference::ValidTlds;

/// Compiled regex for the characters allowed in a network location.
static NETLOC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9.\-\[\]:]+$").unwrap());

/// Why a guard rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GuardRejection {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL or IP format")]
    InvalidFormat,

    #[error("Invalid or non-existent domain")]
    Implausible,
}

/// Checks that `input` is a syntactically acceptable URL or bare IP address.
///
/// # Rules
///
/// - Empty or whitespace-only input is invalid
/// - A bare IPv4/IPv6 address (optionally bracketed) is valid
/// - Otherwise, after adding `http://` when no scheme is present:
///   - scheme must be `http` or `https`
///   - network location must be non-empty
///   - network location may only contain ASCII letters, digits, `.`, `-`,
///     `[`, `]` and `:`
pub fn is_valid_url_or_ip(input: &str) -> bool {
    let input = trim_blank(input);
    if input.is_empty() {
        return false;
    }

    if is_ip_address(input) {
        return true;
    }

    let url = if SCHEME_PREFIX.is_match(input) {
        input.to_string()
    } else {
        format!("http://{input}")
    };

    let Ok(parts) = split_uri(&url) else {
        return false;
    };

    matches!(parts.scheme.as_str(), "http" | "https")
        && !parts.netloc.is_empty()
        && !parts.netloc.contains(' ')
        && NETLOC_REGEX.is_match(&parts.netloc)
}

/// Checks that `url` looks like a real domain rather than a random string.
///
/// The lower-cased network location must contain a dot, end in a TLD from
/// `tlds`, and contain at least one ASCII letter.
pub fn is_plausible_url(url: &str, tlds: &ValidTlds) -> bool {
    let Ok(parts) = split_uri(url) else {
        return false;
    };

    let domain = parts.netloc.to_lowercase();
    if domain.is_empty() || !domain.contains('.') {
        return false;
    }

    let tld = domain.rsplit('.').next().unwrap_or_default();
    tlds.contains(tld) && domain.chars().any(|c| c.is_ascii_alphabetic())
}

/// Runs every guard in order on a normalized URL.
///
/// # Errors
///
/// Returns the first [`GuardRejection`] that applies.
pub fn guard(url: &str, tlds: &ValidTlds) -> Result<(), GuardRejection> {
    if trim_blank(url).is_empty() {
        return Err(GuardRejection::Empty);
    }
    if !is_valid_url_or_ip(url) {
        return Err(GuardRejection::InvalidFormat);
    }
    if !is_plausible_url(url, tlds) {
        return Err(GuardRejection::Implausible);
    }
    Ok(())
}
