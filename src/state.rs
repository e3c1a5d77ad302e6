//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::DetectionService;
use crate::domain::ReferenceStore;
use crate::infrastructure::references::ReferenceSources;

#[derive(Clone)]
pub struct AppState {
    pub detection_service: Arc<DetectionService>,
    /// Same store the detection service reads from; reloads publish here.
    pub references: Arc<ReferenceStore>,
    pub reference_sources: Arc<ReferenceSources>,
}

impl AppState {
    pub fn new(detection_service: Arc<DetectionService>, sources: ReferenceSources) -> Self {
        let references = detection_service.references().clone();
        Self {
            detection_service,
            references,
            reference_sources: Arc::new(sources),
        }
    }
}
