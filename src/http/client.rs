//! Shared HTTP client
//!
//! Wraps `reqwest::Client` with:
//! - Endpoint resolution against the API base URL
//! - Session cookie injection for authenticated calls
//! - Rate limiting to stay polite with the upstream API
//! - Decoding of the API's `{error, message}` failure payload

use super::rate_limit::{RateLimiterConfig, Throttle};
use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, COOKIE, SET_COOKIE};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://dab.yeet.su/api/";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL all endpoints are resolved against
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Rate limiter configuration
    pub rate_limit: Option<RateLimiterConfig>,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            rate_limit: Some(RateLimiterConfig::default()),
            default_headers: HashMap::new(),
            user_agent: format!("dab-feed/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set rate limiter
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.config.rate_limit = Some(config);
        self
    }

    /// Disable rate limiting
    pub fn no_rate_limit(mut self) -> Self {
        self.config.rate_limit = None;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Configuration for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Query parameters, sent in insertion order
    pub query: Vec<(String, String)>,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Request body (JSON)
    pub body: Option<Value>,
    /// Session cookie sent as the `Cookie` header
    pub session: Option<String>,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach a session cookie
    #[must_use]
    pub fn session(mut self, session: impl Into<String>) -> Self {
        self.session = Some(session.into());
        self
    }
}

/// Failure payload returned by the API on non-success statuses
#[derive(Debug, Default, Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ErrorPayload {
    fn into_message(self) -> String {
        self.error
            .or(self.message)
            .unwrap_or_else(|| "Unknown error".to_string())
    }
}

/// HTTP client shared by every API call
///
/// Cloning is cheap: the underlying connection pool and rate limiter are shared.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    base_url: Url,
    throttle: Option<Throttle>,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let base_url = parse_base_url(&config.base_url)?;
        let throttle = config.rate_limit.as_ref().map(Throttle::new);

        Ok(Self {
            client,
            config,
            base_url,
            throttle,
        })
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// The resolved API root
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Make a GET request
    pub async fn get(&self, endpoint: &str, config: RequestConfig) -> Result<Response> {
        self.request(Method::GET, endpoint, config).await
    }

    /// Make a POST request
    pub async fn post(&self, endpoint: &str, config: RequestConfig) -> Result<Response> {
        self.request(Method::POST, endpoint, config).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, endpoint: &str, config: RequestConfig) -> Result<Response> {
        self.request(Method::DELETE, endpoint, config).await
    }

    /// Make a generic request.
    ///
    /// Returns the response only for success statuses; anything else becomes
    /// `Error::RemoteApi` carrying the decoded failure message.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        config: RequestConfig,
    ) -> Result<Response> {
        let url = self.build_url(endpoint)?;

        if let Some(ref throttle) = self.throttle {
            throttle.acquire(endpoint).await;
        }

        let mut req = self.client.request(method.clone(), url.clone());

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        for (key, value) in &config.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if let Some(ref session) = config.session {
            req = req.header(COOKIE, session.as_str());
        }

        if !config.query.is_empty() {
            req = req.query(&config.query);
        }

        if let Some(ref body) = config.body {
            req = req.json(body);
        }

        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = decode_error_message(&body);
            warn!("{} {} failed with {}: {}", method, url, status.as_u16(), message);
            return Err(Error::remote_api(status.as_u16(), message));
        }

        debug!("Request succeeded: {} {}", method, url);
        Ok(response)
    }

    /// Make a request and decode the JSON response body
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        config: RequestConfig,
    ) -> Result<T> {
        let response = self.request(method, endpoint, config).await?;
        decode_json(response).await
    }

    /// Make a GET request and decode the JSON response body
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        config: RequestConfig,
    ) -> Result<T> {
        self.request_json(Method::GET, endpoint, config).await
    }

    /// Whether requests are throttled
    pub fn is_throttled(&self) -> bool {
        self.throttle.is_some()
    }

    /// Resolve an endpoint against the base URL
    pub fn build_url(&self, endpoint: &str) -> Result<Url> {
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            return Ok(Url::parse(endpoint)?);
        }
        Ok(self.base_url.join(endpoint.trim_start_matches('/'))?)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.config.timeout)
            .field("is_throttled", &self.throttle.is_some())
            .finish_non_exhaustive()
    }
}

/// Decode a response body as JSON, ignoring unknown keys
pub async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(Error::from)
}

/// All `Set-Cookie` header values of a response
pub fn set_cookie_values(headers: &HeaderMap) -> Vec<String> {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(str::to_string)
        .collect()
}

/// Parse the base URL, making sure relative joins stay under it
fn parse_base_url(raw: &str) -> Result<Url> {
    if raw.ends_with('/') {
        Ok(Url::parse(raw)?)
    } else {
        Ok(Url::parse(&format!("{raw}/"))?)
    }
}

/// Turn a failure body into a human-readable message
fn decode_error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorPayload>(body) {
        Ok(payload) => payload.into_message(),
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body.to_string(),
    }
}
