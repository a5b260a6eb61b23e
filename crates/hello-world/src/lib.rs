//! Greeting server: a single route on `/`.

use axum::Router;
use tower_http::trace::TraceLayer;

/// Creates the application router: `/` plus the not-found fallback.
pub fn create_app() -> Router {
    common::routes::base_router().layer(TraceLayer::new_for_http())
}
