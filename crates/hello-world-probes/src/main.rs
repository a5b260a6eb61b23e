//! Probe-enabled greeting server entry point.
//!
//! A listener failure is fatal: the error is logged and the process exits
//! so the orchestrator can restart it.

use common::{FailurePolicy, ServerConfig, server, telemetry};

#[tokio::main]
async fn main() {
    telemetry::init_tracing();

    let config = ServerConfig::default();
    let app = hello_world_probes::create_app();

    tracing::info!(addr = %config.addr(), "Starting server");

    if let Err(err) = server::run(&config, app).await {
        server::handle_failure(err, FailurePolicy::Exit).await;
    }
}
