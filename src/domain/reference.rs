//! Immutable reference tables injected into the analysis pipeline.
//!
//! The tables are built once by a loader (see
//! [`crate::infrastructure::references`]) and shared read-only. A refresh
//! builds a complete new [`ReferenceTables`] and publishes it through
//! [`ReferenceStore::replace`]; requests that already took a
//! [`ReferenceStore::snapshot`] keep the tables they captured.

use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};

/// TLDs assumed valid when no authoritative list could be loaded.
pub const FALLBACK_TLDS: [&str; 9] = ["com", "org", "net", "ru", "xyz", "tk", "io", "dev", "info"];

/// Whitelisted domains that bypass probabilistic classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrustedDomains {
    entries: HashSet<String>,
}

impl TrustedDomains {
    /// Builds the set, lower-casing and trimming entries and skipping blanks.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries }
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.entries.contains(domain)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Known top-level domains, lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidTlds {
    entries: HashSet<String>,
}

impl ValidTlds {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries }
    }

    /// The hard-coded minimal set, see [`FALLBACK_TLDS`].
    pub fn fallback() -> Self {
        Self::new(FALLBACK_TLDS)
    }

    pub fn contains(&self, tld: &str) -> bool {
        self.entries.contains(tld)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ValidTlds {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Both reference tables, always published together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceTables {
    pub trusted: TrustedDomains,
    pub tlds: ValidTlds,
}

impl ReferenceTables {
    pub fn new(trusted: TrustedDomains, tlds: ValidTlds) -> Self {
        Self { trusted, tlds }
    }
}

/// Holder that publishes the current [`ReferenceTables`].
///
/// Readers clone the inner `Arc` and release the lock immediately, so a
/// [`replace`](Self::replace) never waits for in-flight analysis.
#[derive(Debug, Default)]
pub struct ReferenceStore {
    current: RwLock<Arc<ReferenceTables>>,
}

impl ReferenceStore {
    pub fn new(tables: ReferenceTables) -> Self {
        Self {
            current: RwLock::new(Arc::new(tables)),
        }
    }

    /// Returns the tables in effect right now.
    pub fn snapshot(&self) -> Arc<ReferenceTables> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Atomically publishes new tables, returning the previous ones.
    pub fn replace(&self, tables: ReferenceTables) -> Arc<ReferenceTables> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(tables))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trusted_domains_are_case_normalized() {
        let trusted = TrustedDomains::new([" Bank.COM ", "", "example.org"]);
        assert_eq!(trusted.len(), 2);
        assert!(trusted.contains("bank.com"));
        assert!(trusted.contains("example.org"));
    }

    #[test]
    fn test_fallback_tlds() {
        let tlds = ValidTlds::fallback();
        for tld in FALLBACK_TLDS {
            assert!(tlds.contains(tld));
        }
        assert!(!tlds.contains("zz"));
    }

    #[test]
    fn test_snapshot_survives_replace() {
        let store = ReferenceStore::new(ReferenceTables::new(
            TrustedDomains::new(["old.com"]),
            ValidTlds::fallback(),
        ));

        let captured = store.snapshot();
        let previous = store.replace(ReferenceTables::new(
            TrustedDomains::new(["new.com"]),
            ValidTlds::fallback(),
        ));

        assert!(captured.trusted.contains("old.com"));
        assert!(previous.trusted.contains("old.com"));
        assert!(store.snapshot().trusted.contains("new.com"));
        assert!(!store.snapshot().trusted.contains("old.com"));
    }

    #[test]
    fn test_default_store_is_empty_trust() {
        let store = ReferenceStore::default();
        assert!(store.snapshot().trusted.is_empty());
        assert!(store.snapshot().tlds.contains("com"));
    }
}
