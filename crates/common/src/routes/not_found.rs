//! Fallback for unregistered paths.

use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Body returned with every 404.
pub const NOT_FOUND_BODY: &str = "404 page not found\n";

pub async fn fallback() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}
