//! DTOs for reference table management.

use serde::Serialize;

/// Sizes of the freshly published reference tables.
#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub trusted_domains: usize,
    pub valid_tlds: usize,
}
