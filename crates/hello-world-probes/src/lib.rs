//! Greeting server with orchestrator probe endpoints.
//!
//! Adds `/health` (liveness) and `/ready` (readiness) on top of the shared
//! greeting router. Both probes log one line per hit and answer `OK\n`.

pub mod routes;

use axum::Router;
use axum::routing::any;
use tower_http::trace::TraceLayer;

/// Creates the application router with the greeting and both probes.
pub fn create_app() -> Router {
    common::routes::base_router()
        .route("/health", any(routes::probes::liveness))
        .route("/ready", any(routes::probes::readiness))
        .layer(TraceLayer::new_for_http())
}
