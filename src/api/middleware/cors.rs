//! Cross-origin resource sharing policy.

use tower_http::cors::{Any, CorsLayer};

/// Creates a CORS layer allowing any origin, method and header.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
