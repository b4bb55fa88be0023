// Transport configuration for building the reqwest::Client.
//
// TLS trust, optional timeout, and user agent. Auth headers are not set
// here: the client attaches them per request so a caller-supplied
// `reqwest::Client` gets them too.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::Error;

const USER_AGENT: &str = concat!("rancher-api/", env!("CARGO_PKG_VERSION"));

/// TLS verification mode.
#[derive(Debug, Clone, Default)]
pub enum TlsMode {
    /// Use the system certificate store.
    #[default]
    System,
    /// Trust an additional CA certificate from the given PEM file.
    CustomCa(PathBuf),
    /// Accept any certificate (self-signed Rancher servers).
    DangerAcceptInvalid,
}

/// Transport settings shared by every request a client makes.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub tls: TlsMode,
    /// Whole-request timeout. `None` leaves reqwest's default (no timeout).
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            tls: TlsMode::System,
            timeout: None,
            user_agent: USER_AGENT.to_owned(),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut builder = reqwest::Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        match &self.tls {
            TlsMode::System => {}
            TlsMode::CustomCa(path) => {
                let cert_pem = std::fs::read(path).map_err(|e| Error::Configuration {
                    field: "tls",
                    reason: format!("failed to read CA cert {}: {e}", path.display()),
                })?;
                let cert =
                    reqwest::Certificate::from_pem(&cert_pem).map_err(|e| Error::Configuration {
                        field: "tls",
                        reason: format!("invalid CA cert: {e}"),
                    })?;
                builder = builder.add_root_certificate(cert);
            }
            TlsMode::DangerAcceptInvalid => {
                builder = builder.danger_accept_invalid_certs(true);
            }
        }

        builder.build().map_err(|e| Error::Configuration {
            field: "transport",
            reason: format!("failed to build HTTP client: {e}"),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_tls(mut self, tls: TlsMode) -> Self {
        self.tls = tls;
        self
    }
}
