//! Cross-origin resource sharing configuration.

use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

/// Builds the CORS layer from the configured origin allowlist.
///
/// A `*` entry allows any origin (the default, matching a frontend served
/// from a separate dev host). Entries that do not parse as header values are
/// skipped with a warning rather than aborting startup.
pub fn layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.iter().any(|origin| origin == "*") {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(origins)
}
