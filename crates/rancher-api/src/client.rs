// Rancher API HTTP client
//
// Wraps `reqwest::Client` with the configured base URL, the Basic auth and
// JSON content-type headers, and one request executor that every endpoint
// funnels through. Endpoint groups (containers, stacks, etc.) are inherent
// methods in separate files to keep this module focused on transport
// mechanics.

use reqwest::Method;
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace};
use url::Url;

use crate::config::ClientConfig;
use crate::error::Error;
use crate::transport::TransportConfig;

const BODY_PREVIEW_CHARS: usize = 200;

// ── Request descriptor ───────────────────────────────────────────────

/// One HTTP call against the Rancher API, relative to the client's base URL.
///
/// `path` is trusted text appended to the base URL as-is (it may carry its
/// own query string). Resource ids go through [`segment`](Self::segment),
/// which escapes them so `/`, `?`, `#` and `..` stay inside the id.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    segments: Vec<String>,
    query: Option<String>,
    body: Option<Value>,
    headers: HeaderMap,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        let mut path = path.into();
        if !path.starts_with('/') {
            path.insert(0, '/');
        }
        Self {
            method,
            path,
            segments: Vec::new(),
            query: None,
            body: None,
            headers: HeaderMap::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append one percent-encoded path segment after `path`.
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Rancher action call: `{path}/{segments}/?action={name}`.
    pub fn action(self, name: &str) -> Self {
        self.segment("").query(format!("action={name}"))
    }

    /// Set the raw query string (a leading `?` is dropped, empty clears it).
    ///
    /// Replaces any query embedded in `path`.
    pub fn query(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        let query = query.trim_start_matches('?');
        self.query = (!query.is_empty()).then(|| query.to_owned());
        self
    }

    /// Attach a JSON body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, Error> {
        self.body = Some(serde_json::to_value(body).map_err(Error::Serialization)?);
        Ok(self)
    }

    /// Add a per-request header. Overrides a configured header of the same name.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for a Rancher server's REST API.
///
/// Holds only immutable state after construction, so a single instance can
/// serve any number of concurrent calls. Responses are returned as loosely
/// typed JSON; list endpoints strip the `{ data: [...] }` envelope.
#[derive(Debug, Clone)]
pub struct RancherClient {
    http: reqwest::Client,
    base_url: String,
    headers: HeaderMap,
}

impl RancherClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Validate `config` and build a client with the default transport.
    ///
    /// Performs no network I/O.
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        Self::with_transport(config, &TransportConfig::default())
    }

    /// Validate `config` and build a client with custom transport settings.
    pub fn with_transport(config: &ClientConfig, transport: &TransportConfig) -> Result<Self, Error> {
        let (base_url, headers) = Self::prepare(config)?;
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            headers,
        })
    }

    /// Wrap an existing `reqwest::Client`. Auth headers are still attached
    /// to every request.
    pub fn from_reqwest(config: &ClientConfig, http: reqwest::Client) -> Result<Self, Error> {
        let (base_url, headers) = Self::prepare(config)?;
        Ok(Self {
            http,
            base_url,
            headers,
        })
    }

    fn prepare(config: &ClientConfig) -> Result<(String, HeaderMap), Error> {
        let base_url = config.validate()?;

        let mut auth =
            HeaderValue::from_str(&config.authorization()).map_err(|e| Error::Configuration {
                field: "access_key",
                reason: format!("invalid header value: {e}"),
            })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        Ok((base_url, headers))
    }

    /// The configured endpoint, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The underlying HTTP client.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// `{base_url}{path}`, then each id segment escaped, then the query.
    pub(crate) fn url(&self, request: &ApiRequest) -> Result<Url, Error> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, request.path))?;

        if !request.segments.is_empty() {
            url.path_segments_mut()
                .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
                .pop_if_empty()
                .extend(&request.segments);
        }
        if let Some(query) = &request.query {
            url.set_query(Some(query));
        }

        Ok(url)
    }

    // ── Executor ─────────────────────────────────────────────────────

    /// Issue an arbitrary request and return the parsed JSON body.
    ///
    /// For Rancher endpoints without a dedicated method.
    pub async fn send(&self, request: ApiRequest) -> Result<Value, Error> {
        self.execute(request).await
    }

    /// Issue exactly one HTTP request and settle it.
    ///
    /// 2xx bodies are parsed as JSON (an empty body reads as `null`); any
    /// other status becomes [`Error::HttpStatus`]. Transport failures are
    /// returned as-is.
    pub(crate) async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, Error> {
        let url = self.url(&request)?;
        let ApiRequest {
            method,
            body,
            headers,
            ..
        } = request;
        debug!("{method} {url}");

        let mut merged = self.headers.clone();
        merged.extend(headers);

        let mut builder = self.http.request(method, url).headers(merged);
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let resp = builder.send().await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        trace!(status = status.as_u16(), "response received");

        if !status.is_success() {
            let headers = resp.headers().clone();
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                headers,
                body,
            });
        }

        let body = resp.text().await?;
        parse_body(body)
    }
}

// ── Helpers ──────────────────────────────────────────────────────────

/// Parse a 2xx body. Blank bodies (204 and friends) read as JSON `null`.
pub(crate) fn parse_body<T: DeserializeOwned>(body: String) -> Result<T, Error> {
    let parsed = if body.trim().is_empty() {
        serde_json::from_value(Value::Null)
    } else {
        serde_json::from_str(&body)
    };

    parsed.map_err(|e| {
        let preview: String = body.chars().take(BODY_PREVIEW_CHARS).collect();
        Error::Parse {
            message: format!("{e} (body preview: {preview:?})"),
            body,
        }
    })
}

/// Reject a resource identifier that cannot name a single path segment:
/// empty, or a dot segment (`.`/`..`, also in `%2e` form).
pub(crate) fn require_id<'a>(id: &'a str, parameter: &'static str) -> Result<&'a str, Error> {
    let unescaped = id.to_ascii_lowercase().replace("%2e", ".");
    if matches!(unescaped.as_str(), "" | "." | "..") {
        Err(Error::Validation { parameter })
    } else {
        Ok(id)
    }
}

/// `GET {path}` with an optional raw, caller-supplied query string.
pub(crate) fn list_request(path: &str, query: Option<&str>) -> ApiRequest {
    let request = ApiRequest::get(path);
    match query {
        Some(query) => request.query(query),
        None => request,
    }
}
