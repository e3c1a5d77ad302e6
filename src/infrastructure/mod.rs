//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer against files on
//! disk.
//!
//! # Modules
//!
//! - [`model`] - [`LogisticModel`], a [`crate::domain::Classifier`] loaded from JSON
//! - [`references`] - loaders for the trusted domain and TLD tables

pub mod model;
pub mod references;

pub use model::{LogisticModel, ModelError};
pub use references::{
    ReferenceError, ReferenceSources, load_reference_tables, load_trusted_domains,
    load_valid_tlds, parse_tld_list,
};
