//! DTOs for the explanation endpoint.

use serde::Serialize;

use crate::application::services::Explanation;
use crate::domain::entities::HeuristicReport;

/// Color-coded heuristic signals for one URL.
#[derive(Debug, Serialize)]
pub struct ExplainResponse {
    pub url: String,
    pub explanations: HeuristicReport,
    pub detail: &'static str,
    pub trusted: bool,
}

impl From<Explanation> for ExplainResponse {
    fn from(e: Explanation) -> Self {
        Self {
            url: e.url,
            explanations: e.report,
            detail: e.detail,
            trusted: e.trusted,
        }
    }
}
