//! Deterministic URL analysis core.
//!
//! Turns a raw string into a normalized URL, its components, a fixed-order
//! feature vector for the classifier, a domain token string, and an
//! independent color-coded heuristic report. Every function here is pure and
//! total: no I/O, no shared mutable state, no errors for malformed input.
//!
//! # Pipeline
//!
//! ```text
//! raw ─► normalizer ─► parser ─┬─► features + tokenizer ─► classifier ─┐
//!                              └─► heuristics (trust) ─────────────────┴─► decision
//! ```
//!
//! Reference tables are passed in by reference; see [`crate::domain::reference`].

pub mod decision;
pub mod entropy;
pub mod features;
pub mod heuristics;
pub mod normalizer;
pub mod parser;
pub mod tokenizer;
pub mod trust;
pub mod validation;

pub use decision::{DEFAULT_THRESHOLD, decide};
pub use entropy::shannon_entropy;
pub use features::{extract_features, extract_features_batch};
pub use heuristics::{colorize, explain};
pub use normalizer::{RawInput, normalize_raw, normalize_url};
pub use parser::{MalformedUrl, UriParts, is_ip_address, parse_url, split_uri};
pub use tokenizer::{tokenize, tokenize_batch};
pub use trust::{canonical_host, is_trusted};
pub use validation::{GuardRejection, guard, is_plausible_url, is_valid_url_or_ip};
