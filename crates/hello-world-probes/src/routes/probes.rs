//! Liveness and readiness probe endpoints.
//!
//! Both always succeed. Readiness performs no dependency checks: once the
//! process answers HTTP it is ready for traffic.

/// Body returned by both probes.
pub const PROBE_OK: &str = "OK\n";

/// ANY /health — liveness probe.
pub async fn liveness() -> &'static str {
    tracing::info!(probe = "liveness", "Liveness probe hit");
    PROBE_OK
}

/// ANY /ready — readiness probe.
pub async fn readiness() -> &'static str {
    tracing::info!(probe = "readiness", "Readiness probe hit");
    PROBE_OK
}
