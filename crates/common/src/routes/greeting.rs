//! Root greeting endpoint.

/// Response body for `/`. No trailing newline.
pub const GREETING: &str = "Hello World";

/// ANY / — returns the greeting, whatever the method or body.
pub async fn hello() -> &'static str {
    GREETING
}
