//! Greeting server entry point.
//!
//! If the listener cannot be started the error is logged and the process
//! stays up without serving.

use common::{FailurePolicy, ServerConfig, server, telemetry};

#[tokio::main]
async fn main() {
    telemetry::init_tracing();

    let config = ServerConfig::default();
    let app = hello_world::create_app();

    tracing::info!(addr = %config.addr(), "Starting webserver...");

    if let Err(err) = server::run(&config, app).await {
        server::handle_failure(err, FailurePolicy::Linger).await;
    }
}
