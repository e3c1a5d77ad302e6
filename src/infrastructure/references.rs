//! File loaders for the reference tables.
//!
//! Loading never aborts start-up: a missing or broken trusted-domains file
//! yields an empty set, and a missing or broken TLD list yields
//! [`ValidTlds::fallback`]. Both cases are logged at `WARN`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::reference::{ReferenceTables, TrustedDomains, ValidTlds};

/// Errors raised while reading a reference file.
#[derive(Debug, thiserror::Error)]
pub enum ReferenceError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} contains no entries")]
    Empty(PathBuf),
}

/// Where the reference tables come from.
#[derive(Debug, Clone, Default)]
pub struct ReferenceSources {
    pub trusted_path: PathBuf,
    pub tlds_path: Option<PathBuf>,
}

#[derive(Deserialize)]
struct TrustedDomainsFile {
    trusted_domains: Vec<String>,
}

/// Reads a `{"trusted_domains": [...]}` file.
///
/// # Errors
///
/// Returns [`ReferenceError::Io`] or [`ReferenceError::Json`].
pub fn read_trusted_domains(path: &Path) -> Result<TrustedDomains, ReferenceError> {
    let text = fs::read_to_string(path).map_err(|source| ReferenceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let file: TrustedDomainsFile =
        serde_json::from_str(&text).map_err(|source| ReferenceError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(TrustedDomains::new(file.trusted_domains))
}

/// Loads the trusted domains, falling back to an empty set.
pub fn load_trusted_domains(path: &Path) -> TrustedDomains {
    match read_trusted_domains(path) {
        Ok(trusted) => {
            info!("Loaded {} trusted domains from {}", trusted.len(), path.display());
            trusted
        }
        Err(e) => {
            warn!("{e}. Trusted domain list is empty.");
            TrustedDomains::default()
        }
    }
}

/// Parses an IANA-style TLD list.
///
/// Lines starting with `#` are comments; entries are trimmed and lower-cased,
/// blank lines are skipped.
pub fn parse_tld_list(text: &str) -> ValidTlds {
    ValidTlds::new(
        text.lines()
            .filter(|line| !line.starts_with('#'))
            .map(str::trim)
            .filter(|line| !line.is_empty()),
    )
}

/// Reads and parses a TLD list file.
///
/// # Errors
///
/// Returns [`ReferenceError::Io`] if the file cannot be read and
/// [`ReferenceError::Empty`] if it holds no entries.
pub fn read_valid_tlds(path: &Path) -> Result<ValidTlds, ReferenceError> {
    let text = fs::read_to_string(path).map_err(|source| ReferenceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let tlds = parse_tld_list(&text);
    if tlds.is_empty() {
        return Err(ReferenceError::Empty(path.to_path_buf()));
    }
    Ok(tlds)
}

/// Loads the valid TLD set, falling back to [`ValidTlds::fallback`].
pub fn load_valid_tlds(path: Option<&Path>) -> ValidTlds {
    let Some(path) = path else {
        warn!("No TLD list configured. Using fallback TLD set.");
        return ValidTlds::fallback();
    };

    match read_valid_tlds(path) {
        Ok(tlds) => {
            info!("Loaded {} TLDs from {}", tlds.len(), path.display());
            tlds
        }
        Err(e) => {
            warn!("{e}. Using fallback TLD set.");
            ValidTlds::fallback()
        }
    }
}

/// Builds a complete [`ReferenceTables`] from `sources`.
pub fn load_reference_tables(sources: &ReferenceSources) -> ReferenceTables {
    ReferenceTables::new(
        load_trusted_domains(&sources.trusted_path),
        load_valid_tlds(sources.tlds_path.as_deref()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_trusted_domains() {
        let file = temp_file(r#"{"trusted_domains": ["Google.com", "bank.com", " "]}"#);
        let trusted = load_trusted_domains(file.path());

        assert_eq!(trusted.len(), 2);
        assert!(trusted.contains("google.com"));
        assert!(trusted.contains("bank.com"));
    }

    #[test]
    fn test_trusted_domains_missing_file_is_empty() {
        let trusted = load_trusted_domains(Path::new("/nonexistent/trusted_domains.json"));
        assert!(trusted.is_empty());
    }

    #[test]
    fn test_trusted_domains_bad_json() {
        let file = temp_file(r#"{"domains": ["a.com"]}"#);
        assert!(matches!(
            read_trusted_domains(file.path()),
            Err(ReferenceError::Json { .. })
        ));
        assert!(load_trusted_domains(file.path()).is_empty());
    }

    #[test]
    fn test_parse_tld_list() {
        let text = "# Version 2024010100, Last Updated Mon Jan  1 07:07:01 2024 UTC\nCOM\nORG\n\n  Net  \nXN--P1AI\n";
        let tlds = parse_tld_list(text);

        assert_eq!(tlds.len(), 4);
        assert!(tlds.contains("com"));
        assert!(tlds.contains("net"));
        assert!(tlds.contains("xn--p1ai"));
        assert!(!tlds.contains("# version 2024010100, last updated mon jan  1 07:07:01 2024 utc"));
    }

    #[test]
    fn test_load_valid_tlds_from_file() {
        let file = temp_file("# header\nCOM\nSHOP\n");
        let tlds = load_valid_tlds(Some(file.path()));

        assert_eq!(tlds.len(), 2);
        assert!(tlds.contains("shop"));
        assert!(!tlds.contains("xyz"));
    }

    #[test]
    fn test_load_valid_tlds_fallback() {
        assert_eq!(load_valid_tlds(None), ValidTlds::fallback());
        assert_eq!(
            load_valid_tlds(Some(Path::new("/nonexistent/tlds.txt"))),
            ValidTlds::fallback()
        );

        let empty = temp_file("# only a comment\n");
        assert!(matches!(
            read_valid_tlds(empty.path()),
            Err(ReferenceError::Empty(_))
        ));
        assert_eq!(load_valid_tlds(Some(empty.path())), ValidTlds::fallback());
    }

    #[test]
    fn test_load_reference_tables() {
        let trusted = temp_file(r#"{"trusted_domains": ["bank.com"]}"#);
        let sources = ReferenceSources {
            trusted_path: trusted.path().to_path_buf(),
            tlds_path: None,
        };

        let tables = load_reference_tables(&sources);
        assert!(tables.trusted.contains("bank.com"));
        assert!(tables.tlds.contains("com"));
    }
}
