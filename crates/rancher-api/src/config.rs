// Client configuration
//
// Endpoint URL plus the API key pair. Validated once, eagerly, when a
// `RancherClient` is built; the derived auth header never changes afterwards.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

use crate::error::Error;

/// Connection settings for a Rancher server.
///
/// Deserializes from snake_case (`access_key`) or camelCase (`accessKey`)
/// field names, so it can be embedded in whatever config format the caller
/// already uses.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// API endpoint, e.g. `https://rancher.example.com/v2-beta/projects/1a5`.
    pub url: String,

    #[serde(alias = "accessKey")]
    pub access_key: String,

    #[serde(alias = "secretKey")]
    pub secret_key: SecretString,
}

impl ClientConfig {
    pub fn new(
        url: impl Into<String>,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            access_key: access_key.into(),
            secret_key: SecretString::from(secret_key.into()),
        }
    }

    /// Check every field and return the base URL all request paths are
    /// appended to (trailing `/` stripped).
    pub fn validate(&self) -> Result<String, Error> {
        if self.url.trim().is_empty() {
            return Err(Error::Configuration {
                field: "url",
                reason: "must be a non-empty string".into(),
            });
        }

        let parsed = Url::parse(&self.url).map_err(|e| Error::Configuration {
            field: "url",
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Configuration {
                field: "url",
                reason: format!("unsupported scheme `{}`", parsed.scheme()),
            });
        }

        if self.access_key.is_empty() {
            return Err(Error::Configuration {
                field: "access_key",
                reason: "must be a non-empty string".into(),
            });
        }
        if self.secret_key.expose_secret().is_empty() {
            return Err(Error::Configuration {
                field: "secret_key",
                reason: "must be a non-empty string".into(),
            });
        }

        Ok(self.url.trim_end_matches('/').to_owned())
    }

    /// `Authorization` header value: `Basic base64(access_key:secret_key)`.
    pub fn authorization(&self) -> String {
        let pair = format!("{}:{}", self.access_key, self.secret_key.expose_secret());
        format!("Basic {}", STANDARD.encode(pair))
    }
}
