//! HTTP access to the controller's status pages
//!
//! This module handles:
//! - Normalizing the configured device address into a base URL
//! - Building the HTTP client with the configured user agent and timeout
//! - Fetching one page per request and classifying failures

use crate::device::Endpoint;
use crate::TelemetryError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default user agent sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("rain3-telemetry/", env!("CARGO_PKG_VERSION"));

/// Why a single page could not be fetched
///
/// A fetch failure only ever empties the record of the affected endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    #[error("request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("request failed: {0}")]
    Request(String),
}

/// Source of raw page HTML, one endpoint at a time
///
/// Implementations must not retry; retry policy belongs to whoever schedules
/// poll cycles.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches the page behind `endpoint` and returns its body as text
    async fn fetch(&self, endpoint: Endpoint) -> Result<String, FetchFailure>;
}

/// Fetcher that talks to the device over plain HTTP
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl HttpFetcher {
    /// Creates a fetcher for the device at `address`
    ///
    /// # Arguments
    ///
    /// * `address` - Host or `host:port`, optionally prefixed with `http://`
    /// * `timeout` - Per-request timeout
    /// * `user_agent` - User agent header value
    ///
    /// # Returns
    ///
    /// * `Ok(HttpFetcher)` - Ready to fetch
    /// * `Err(TelemetryError)` - The address is invalid or the client could not be built
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rain3_telemetry::HttpFetcher;
    /// use std::time::Duration;
    ///
    /// let timeout = Duration::from_secs(10);
    /// let fetcher = HttpFetcher::new("192.168.178.40", timeout, "rain3-telemetry").unwrap();
    /// assert_eq!(fetcher.base_url().as_str(), "http://192.168.178.40/");
    /// ```
    pub fn new(address: &str, timeout: Duration, user_agent: &str) -> Result<Self, TelemetryError> {
        let base_url = device_base_url(address).map_err(TelemetryError::InvalidAddress)?;
        let client = build_http_client(user_agent, timeout)?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    /// Root URL of the device, always ending in `/`
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL of one endpoint
    pub fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url, FetchFailure> {
        self.base_url
            .join(endpoint.path())
            .map_err(|e| FetchFailure::Request(e.to_string()))
    }

    fn classify(&self, error: reqwest::Error) -> FetchFailure {
        if error.is_timeout() {
            FetchFailure::Timeout {
                seconds: self.timeout.as_secs(),
            }
        } else if error.is_connect() {
            FetchFailure::Connection(error.to_string())
        } else {
            FetchFailure::Request(error.to_string())
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, endpoint: Endpoint) -> Result<String, FetchFailure> {
        let url = self.endpoint_url(endpoint)?;
        tracing::trace!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchFailure::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                self.classify(e)
            } else {
                FetchFailure::Body(e.to_string())
            }
        })?;

        tracing::trace!("Fetched {} ({} bytes)", endpoint, body.len());
        Ok(body)
    }
}

/// Builds the HTTP client used for every page request
///
/// The controller only speaks plain HTTP, so unlike a general purpose client
/// this one never enforces HTTPS.
pub fn build_http_client(user_agent: &str, timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .connect_timeout(timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Normalizes a configured device address into the device's root URL
///
/// Accepts `host`, `host:port` and the same with an `http://` prefix. Paths,
/// queries and other schemes are rejected.
///
/// # Example
///
/// ```
/// use rain3_telemetry::device::device_base_url;
///
/// let url = device_base_url("192.168.178.40:8080").unwrap();
/// assert_eq!(url.as_str(), "http://192.168.178.40:8080/");
/// assert!(device_base_url("https://pump.local").is_err());
/// ```
pub fn device_base_url(address: &str) -> Result<Url, String> {
    let address = address.trim();
    if address.is_empty() {
        return Err("device address cannot be empty".to_string());
    }

    let candidate = if address.contains("://") {
        address.to_string()
    } else {
        format!("http://{}", address)
    };

    let url = Url::parse(&candidate).map_err(|e| format!("'{}': {}", address, e))?;

    if url.scheme() != "http" {
        return Err(format!("'{}' must use the http scheme", address));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(format!("'{}' has no host", address));
    }

    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
        return Err(format!("'{}' must not contain a path or query", address));
    }

    Ok(url)
}
