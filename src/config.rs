//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `PHISHING_THRESHOLD` - Decision threshold in `[0, 1]` (default: `0.7`)
//! - `MODEL_PATH` - Classifier weights (default: `model/phishing_model.json`)
//! - `TRUSTED_DOMAINS_PATH` - Trusted domain list (default: `config/trusted_domains.json`)
//! - `VALID_TLDS_PATH` - IANA TLD list; the built-in fallback set is used when unset
//!
//! ```bash
//! export PHISHING_THRESHOLD=0.8
//! export VALID_TLDS_PATH=config/tlds-alpha-by-domain.txt
//! ```

use anyhow::Result;
use std::env;
use std::path::PathBuf;

use crate::analysis::DEFAULT_THRESHOLD;
use crate::infrastructure::references::ReferenceSources;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Probability at or above which a non-trusted URL is phishing.
    pub threshold: f64,
    pub model_path: PathBuf,
    pub trusted_domains_path: PathBuf,
    pub valid_tlds_path: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let threshold = env::var("PHISHING_THRESHOLD")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_THRESHOLD);

        let model_path = env::var("MODEL_PATH")
            .unwrap_or_else(|_| "model/phishing_model.json".to_string())
            .into();

        let trusted_domains_path = env::var("TRUSTED_DOMAINS_PATH")
            .unwrap_or_else(|_| "config/trusted_domains.json".to_string())
            .into();

        let valid_tlds_path = env::var("VALID_TLDS_PATH")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            threshold,
            model_path,
            trusted_domains_path,
            valid_tlds_path,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `threshold` is outside `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !(0.0..=1.0).contains(&self.threshold) {
            anyhow::bail!(
                "PHISHING_THRESHOLD must be between 0 and 1, got {}",
                self.threshold
            );
        }

        Ok(())
    }

    /// Where the reference tables are loaded from.
    pub fn reference_sources(&self) -> ReferenceSources {
        ReferenceSources {
            trusted_path: self.trusted_domains_path.clone(),
            tlds_path: self.valid_tlds_path.clone(),
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Threshold: {}", self.threshold);
        tracing::info!("  Model: {}", self.model_path.display());
        tracing::info!("  Trusted domains: {}", self.trusted_domains_path.display());
        match &self.valid_tlds_path {
            Some(path) => tracing::info!("  TLD list: {}", path.display()),
            None => tracing::info!("  TLD list: built-in fallback"),
        }
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
