//! Listen address configuration.

/// Default bind host: all interfaces.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8080;

/// Where the server listens.
///
/// The binaries always run with [`ServerConfig::default`]; the address is
/// fixed at `0.0.0.0:8080` and no environment variable or flag overrides it.
/// Tests build their own values to bind loopback or ephemeral ports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}
