use reqwest::header::HeaderMap;
use thiserror::Error;

/// Top-level error type for the `rancher-api` crate.
///
/// Construction problems and missing identifiers are reported before any
/// request leaves the process. Everything else comes back from the wire:
/// transport failures, non-2xx statuses, and bodies that are not JSON.
#[derive(Debug, Error)]
pub enum Error {
    // ── Construction ────────────────────────────────────────────────
    /// A required configuration field is missing or unusable.
    #[error("Invalid configuration for `{field}`: {reason}")]
    Configuration { field: &'static str, reason: String },

    // ── Input ───────────────────────────────────────────────────────
    /// A required resource identifier was empty.
    #[error("Must specify {parameter}")]
    Validation { parameter: &'static str },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The joined request URL did not parse.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Server ──────────────────────────────────────────────────────
    /// The server answered with a status outside `200..300`.
    #[error("Invalid response code: {status}")]
    HttpStatus {
        status: u16,
        headers: HeaderMap,
        body: String,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// The response body was not valid JSON (or lacked a required field).
    #[error("Parse error: {message}")]
    Parse { message: String, body: String },

    /// A request body could not be encoded as JSON.
    #[error("Failed to serialize request body: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl Error {
    /// The HTTP status code, for errors that carry one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(u16::from),
            _ => None,
        }
    }

    /// Response headers of a non-2xx answer.
    pub fn headers(&self) -> Option<&HeaderMap> {
        match self {
            Self::HttpStatus { headers, .. } => Some(headers),
            _ => None,
        }
    }

    /// Returns `true` if the server answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns `true` for a rejected resource identifier.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http_status(status: u16) -> Error {
        Error::HttpStatus {
            status,
            headers: HeaderMap::new(),
            body: String::new(),
        }
    }

    #[test]
    fn status_error_message_names_the_code() {
        assert_eq!(http_status(500).to_string(), "Invalid response code: 500");
    }

    #[test]
    fn validation_message_names_the_parameter() {
        let err = Error::Validation {
            parameter: "container id",
        };
        assert_eq!(err.to_string(), "Must specify container id");
        assert!(err.is_validation());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn configuration_is_not_a_validation_error() {
        let err = Error::Configuration {
            field: "url",
            reason: "must be a non-empty string".into(),
        };
        assert!(!err.is_validation());
    }

    #[test]
    fn not_found_only_for_404() {
        assert!(http_status(404).is_not_found());
        assert!(!http_status(403).is_not_found());
        assert!(
            !Error::Parse {
                message: "eof".into(),
                body: String::new(),
            }
            .is_not_found()
        );
    }
}
