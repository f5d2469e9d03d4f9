//! HTTP API route definitions.

use axum::{middleware, routing::get, Router};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use super::handlers::{health, media_index, not_found};
use super::middleware::{handle_panic, log_request};

/// Mount prefix of the health group.
pub const HEALTH_PREFIX: &str = "/api/health";
/// Mount prefix of the media group.
pub const MEDIA_PREFIX: &str = "/api/media";

/// Create the API router.
pub fn create_router() -> Router {
    app(
        Router::new()
            .nest(HEALTH_PREFIX, health_routes())
            .nest(MEDIA_PREFIX, media_routes()),
    )
}

/// Health group, mounted at [`HEALTH_PREFIX`].
pub fn health_routes() -> Router {
    Router::new().route("/", get(health).fallback(not_found))
}

/// Media group, mounted at [`MEDIA_PREFIX`].
pub fn media_routes() -> Router {
    Router::new().route("/", get(media_index).fallback(not_found))
}

/// Wrap routes in the application shell: 404 fallback, panic boundary,
/// CORS and request logging.
///
/// Layers run outermost first: trace span, access log, CORS, panic boundary.
pub fn app(routes: Router) -> Router {
    routes
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(log_request))
        .layer(TraceLayer::new_for_http())
}
