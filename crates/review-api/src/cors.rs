use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Local dev frontends allowed when no origins are configured.
pub const DEFAULT_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://localhost:5173"];

/// CORS for the reviewer frontend: listed origins only, any method and header,
/// credentials allowed. Wildcards are not permitted alongside credentials, so
/// methods and headers mirror the preflight request instead.
pub fn cors_layer(origins: &[HeaderValue]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins.iter().cloned()))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn default_origins() -> Vec<HeaderValue> {
    DEFAULT_ORIGINS.into_iter().map(HeaderValue::from_static).collect()
}
