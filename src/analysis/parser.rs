//! URL decomposition with IP-literal detection.
//!
//! Two layers:
//!
//! - [`split_uri`] - generic RFC 3986-style split into scheme, netloc, path,
//!   query and fragment. Fails only on malformed bracketed hosts.
//! - [`parse_url`] - normalizes first, short-circuits IP-literal hosts, and
//!   falls back to [`split_uri`]. Never fails: malformed input yields
//!   [`UrlComponents::sentinel`].

use std::net::{IpAddr, Ipv6Addr};

use crate::analysis::normalizer::normalize_url;
use crate::domain::entities::UrlComponents;

/// Schemes whose last path segment may carry `;params`.
const SCHEMES_WITH_PARAMS: [&str; 16] = [
    "", "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtsps", "rtspu",
    "sip", "sips", "mms", "sftp", "tel",
];

/// Errors raised by [`split_uri`] for structurally invalid network locations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedUrl {
    #[error("Unbalanced brackets in network location")]
    UnbalancedBrackets,

    #[error("Bracketed host is not an IPv6 address: {0}")]
    InvalidBracketedHost(String),
}

/// Result of the generic split. Borrowed pieces of the cleaned input are
/// copied out so the value can outlive it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UriParts {
    pub scheme: String,
    pub netloc: String,
    pub path: String,
    pub params: String,
    pub query: String,
    pub fragment: String,
}

/// Splits a URL into its syntactic parts.
///
/// The scheme is recognised only when it starts with an ASCII letter and
/// contains ASCII alphanumerics or `+-.`; it is lower-cased. The network
/// location is whatever follows `//` up to the first `/`, `?` or `#` and is
/// kept verbatim (user info and port included). Tabs and line breaks are
/// removed and leading control characters or spaces are skipped first.
///
/// # Errors
///
/// Returns [`MalformedUrl`] if the network location has unbalanced `[`/`]` or
/// a bracketed host that is not an IPv6 address.
pub fn split_uri(input: &str) -> Result<UriParts, MalformedUrl> {
    let cleaned: String = input
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();

    let mut rest = cleaned.as_str();
    let mut scheme = String::new();

    if let Some(colon) = rest.find(':')
        && colon > 0
        && is_valid_scheme(&rest[..colon])
    {
        scheme = rest[..colon].to_ascii_lowercase();
        rest = &rest[colon + 1..];
    }

    let mut netloc = "";
    if let Some(after) = rest.strip_prefix("//") {
        let end = after.find(['/', '?', '#']).unwrap_or(after.len());
        netloc = &after[..end];
        rest = &after[end..];
        check_netloc(netloc)?;
    }

    let (rest, fragment) = rest.split_once('#').unwrap_or((rest, ""));
    let (path, query) = rest.split_once('?').unwrap_or((rest, ""));

    let (path, params) = if SCHEMES_WITH_PARAMS.contains(&scheme.as_str()) {
        split_params(path)
    } else {
        (path, "")
    };

    Ok(UriParts {
        scheme,
        netloc: netloc.to_string(),
        path: path.to_string(),
        params: params.to_string(),
        query: query.to_string(),
        fragment: fragment.to_string(),
    })
}

fn is_valid_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn check_netloc(netloc: &str) -> Result<(), MalformedUrl> {
    let opens = netloc.contains('[');
    let closes = netloc.contains(']');
    if opens != closes {
        return Err(MalformedUrl::UnbalancedBrackets);
    }

    if opens {
        let after_open = netloc.split_once('[').map_or("", |(_, r)| r);
        let host = after_open.split_once(']').map_or(after_open, |(h, _)| h);
        if host.parse::<Ipv6Addr>().is_err() {
            return Err(MalformedUrl::InvalidBracketedHost(host.to_string()));
        }
    }

    Ok(())
}

/// Separates `;params` from the last path segment.
fn split_params(path: &str) -> (&str, &str) {
    let search_from = path.rfind('/').unwrap_or(0);
    match path[search_from..].find(';') {
        Some(offset) => {
            let i = search_from + offset;
            (&path[..i], &path[i + 1..])
        }
        None => (path, ""),
    }
}

/// Strips every leading and trailing `[` or `]`.
pub(crate) fn strip_brackets(host: &str) -> &str {
    host.trim_matches(['[', ']'])
}

/// Returns `true` if `host` (brackets stripped) is an IPv4 or IPv6 address.
pub fn is_ip_address(host: &str) -> bool {
    strip_brackets(host).parse::<IpAddr>().is_ok()
}

/// Parses raw or normalized input into [`UrlComponents`].
///
/// # Algorithm
///
/// 1. Normalize the input (see [`normalize_url`])
/// 2. Take the text between `://` and the next `/` as candidate host
/// 3. If the candidate (brackets stripped) is an IP address, return it as the
///    host, bracket-wrapped when it contains `:`, with empty path and query
/// 4. Otherwise decompose generically with [`split_uri`]
///
/// Empty input or a malformed network location yields the sentinel.
///
/// # Examples
///
/// ```
/// use phishing_detector::analysis::parse_url;
///
/// let parsed = parse_url("2001:db8::1");
/// assert_eq!(parsed.scheme, "http");
/// assert_eq!(parsed.host, "[2001:db8::1]");
/// assert!(parsed.is_ip_literal);
/// ```
pub fn parse_url(input: &str) -> UrlComponents {
    let url = normalize_url(input);

    let Some((scheme, after_scheme)) = url.split_once("://") else {
        return UrlComponents::sentinel();
    };
    let candidate = after_scheme.split('/').next().unwrap_or_default();

    if is_ip_address(candidate) {
        let host = if candidate.contains(':') && !candidate.starts_with('[') {
            format!("[{candidate}]")
        } else {
            candidate.to_string()
        };

        return UrlComponents {
            scheme: scheme.to_string(),
            host,
            path: String::new(),
            query: String::new(),
            is_ip_literal: true,
        };
    }

    match split_uri(&url) {
        Ok(parts) => UrlComponents {
            is_ip_literal: is_ip_address(&parts.netloc),
            scheme: parts.scheme,
            host: parts.netloc,
            path: parts.path,
            query: parts.query,
        },
        Err(e) => {
            tracing::debug!(url = %url, error = %e, "URL decomposition failed");
            UrlComponents::sentinel()
        }
    }
}
