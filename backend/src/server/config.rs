//! Listener settings loaded via OrthoConfig.

use std::net::{IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Network settings for the HTTP listener.
///
/// Values merge from CLI flags, `RENTALS_*` environment variables, and an
/// optional configuration file.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "RENTALS")]
pub struct ServerSettings {
    /// Interface to bind; defaults to all interfaces.
    pub host: Option<String>,
    /// TCP port to listen on.
    #[ortho_config(default = 8080)]
    pub port: u16,
}

impl ServerSettings {
    /// Return the configured host, falling back to the default.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Resolve the socket address the server binds to.
    ///
    /// # Errors
    /// Returns [`std::io::Error`] with kind `InvalidInput` when `host` is not
    /// an IP address.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let host = self.host();
        let ip: IpAddr = host.parse().map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid host {host:?}: {err}"),
            )
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
