//! Listener error types.

use thiserror::Error;

/// Failure to start or keep running the HTTP listener.
///
/// This is the only error category in the servers: request handlers cannot
/// fail.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The TCP listener could not be bound, e.g. the port is already in use.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The accept loop stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
