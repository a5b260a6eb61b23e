//! Shared plumbing for the greeting servers.
//!
//! Both binaries build an explicit [`axum::Router`] on top of
//! [`routes::base_router`] and hand it to [`server::run`]. What happens when
//! the listener cannot be started is decided per binary through
//! [`server::FailurePolicy`].

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod telemetry;

pub use config::ServerConfig;
pub use error::ServerError;
pub use server::FailurePolicy;
