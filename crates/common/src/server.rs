//! Listener bootstrap and bind-failure handling.

use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// What a binary does once its listener has failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log the error and keep the process alive with no listener.
    Linger,
    /// Log the error and terminate the process.
    Exit,
}

impl FailurePolicy {
    /// Process exit code for this policy, `None` if the process stays up.
    pub fn exit_code(self) -> Option<i32> {
        match self {
            FailurePolicy::Linger => None,
            FailurePolicy::Exit => Some(1),
        }
    }
}

/// Binds a TCP listener on the configured address.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener, ServerError> {
    let addr = config.addr();
    let bound = TcpListener::bind(addr.as_str()).await;
    bound.map_err(|source| ServerError::Bind { addr, source })
}

/// Serves `app` on `listener` until the process dies.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    if let Ok(local) = listener.local_addr() {
        tracing::debug!(addr = %local, "accepting connections");
    }
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}

/// Binds the configured address and serves `app` on it.
pub async fn run(config: &ServerConfig, app: Router) -> Result<(), ServerError> {
    let listener = bind(config).await?;
    serve(listener, app).await
}

/// Reports a listener failure and applies `policy`.
///
/// With [`FailurePolicy::Linger`] this never returns; the process stays up
/// without serving anything.
pub async fn handle_failure(err: ServerError, policy: FailurePolicy) {
    tracing::error!(error = %err, "Error starting server");
    match policy.exit_code() {
        Some(code) => std::process::exit(code),
        None => std::future::pending::<()>().await,
    }
}
