//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod explain;
pub mod health;
pub mod predict;
pub mod references;

pub use explain::explain_handler;
pub use health::health_handler;
pub use predict::{batch_predict_handler, predict_handler};
pub use references::reload_references_handler;
