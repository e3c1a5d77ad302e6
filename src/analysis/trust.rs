//! Trusted-domain membership checks.

use crate::domain::reference::TrustedDomains;

/// Lower-cases `host` and removes one leading `www.`.
pub fn canonical_host(host: &str) -> String {
    let host = host.to_lowercase();
    match host.strip_prefix("www.") {
        Some(stripped) => stripped.to_string(),
        None => host,
    }
}

/// Returns `true` if `host` is a trusted domain or a subdomain of one.
///
/// The host is compared after [`canonical_host`]. `x.bank.com` and `bank.com`
/// match the entry `bank.com`; `evilbank.com` does not.
pub fn is_trusted(host: &str, trusted: &TrustedDomains) -> bool {
    let host = canonical_host(host);
    if host.is_empty() {
        return false;
    }

    trusted.contains(&host)
        || trusted.iter().any(|entry| {
            host.len() > entry.len()
                && host.ends_with(entry)
                && host.as_bytes()[host.len() - entry.len() - 1] == b'.'
        })
}
