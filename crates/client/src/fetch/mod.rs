//! HTTP transport for lyrics page fetches.
//!
//! `Transport` is the seam between the fetch routine and the network:
//! benchmarks and tests substitute an in-process implementation with a
//! canned body, the CLI uses the reqwest-backed `HttpTransport`.
//!
//! The transport reports the status alongside the body instead of failing
//! on non-2xx responses; the fetch routine owns the status branch. The body
//! is only read when the status is a success, so a 404 costs one round trip
//! and nothing more.

pub mod url;

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url, header};

pub use url::{UrlError, lyrics_url};

use versebench_core::Error;

/// Configuration for the HTTP transport.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// User agent string (default: "versebench/0.1")
    pub user_agent: String,

    /// Maximum response body size in bytes (default: 5MB)
    pub max_bytes: usize,

    /// Request timeout (default: 20s)
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "versebench/0.1".to_string(),
            max_bytes: 5 * 1024 * 1024,
            timeout: Duration::from_millis(20000),
        }
    }
}

impl From<&versebench_core::AppConfig> for FetchConfig {
    fn from(config: &versebench_core::AppConfig) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            max_bytes: config.max_bytes,
            timeout: config.timeout(),
        }
    }
}

/// Response from one GET, status and body together.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response body text; empty when the status is not a success
    pub body: String,
    /// Time taken to fetch in milliseconds
    pub fetch_ms: u64,
}

/// One-shot GET abstraction over the network.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a single GET for the given address.
    ///
    /// Implementations return `Ok` for any HTTP status; `Err` is reserved
    /// for transport-level failures (DNS, connect, timeout, body read).
    async fn get(&self, url: &Url) -> Result<FetchResponse, Error>;
}

/// reqwest-backed transport.
pub struct HttpTransport {
    http: Client,
    config: FetchConfig,
}

impl HttpTransport {
    /// Create a new transport with the given configuration.
    pub fn new(config: FetchConfig) -> Result<Self, Error> {
        let http = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .map_err(|e| Error::TransportFailed(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// Get reference to the configuration.
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<FetchResponse, Error> {
        let start = Instant::now();

        let response = self
            .http
            .get(url.as_str())
            .header(
                header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .send()
            .await
            .map_err(|e| Error::TransportFailed(format!("network error: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let fetch_ms = start.elapsed().as_millis() as u64;
            tracing::debug!(%url, %status, fetch_ms, "non-success response, skipping body");
            return Ok(FetchResponse { status, body: String::new(), fetch_ms });
        }

        if let Some(len) = response.content_length()
            && len as usize > self.config.max_bytes
        {
            return Err(Error::FetchTooLarge(format!("{} bytes exceeds {}", len, self.config.max_bytes)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::TransportFailed(format!("failed to read response: {}", e)))?;

        if body.len() > self.config.max_bytes {
            return Err(Error::FetchTooLarge(format!("{} bytes exceeds {}", body.len(), self.config.max_bytes)));
        }

        let fetch_ms = start.elapsed().as_millis() as u64;

        tracing::debug!(%url, %status, fetch_ms, bytes = body.len(), "fetched lyrics page");

        Ok(FetchResponse { status, body, fetch_ms })
    }
}
