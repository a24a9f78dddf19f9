use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Origins the local frontend is served from.
pub const ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost",
    "http://localhost:5500",
    "http://127.0.0.1",
    "http://127.0.0.1:5500",
];

/// Allow-listed origins with credentials. Credentialed CORS forbids
/// wildcards, so methods and headers mirror the request instead.
pub fn layer() -> CorsLayer {
    let origins = ALLOWED_ORIGINS.into_iter().map(HeaderValue::from_static);

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
