//! Handlers shared by both servers.

pub mod greeting;
pub mod not_found;

use axum::Router;
use axum::routing::any;

/// Router with the greeting on `/` and the not-found fallback.
///
/// Paths match exactly; anything else falls through to
/// [`not_found::fallback`]. Callers add their own routes on top.
pub fn base_router() -> Router {
    Router::new()
        .route("/", any(greeting::hello))
        .fallback(not_found::fallback)
}
