//! HTTP client trait and implementations.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::config::ApiConfig;
use crate::error::FetchError;

use super::rate_limiter::RateLimiter;

/// Trait for HTTP clients, enabling mockability in tests.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// GET a URL and return the body as text. Non-2xx statuses are errors.
    async fn get_text(&self, url: &str) -> Result<String, FetchError>;
}

/// Configuration for [`ReqwestClient`].
#[derive(Clone)]
pub struct ReqwestClientBuilder {
    rate_limit_ms: u64,
    timeout: Duration,
    user_agent: String,
}

impl Default for ReqwestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReqwestClientBuilder {
    pub fn new() -> Self {
        Self {
            // The Rakuten API allows roughly one call per second per application.
            rate_limit_ms: 1000,
            timeout: Duration::from_secs(10),
            user_agent: concat!("kondate/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Set the rate limit delay in milliseconds. 0 disables rate limiting.
    pub fn rate_limit_ms(mut self, ms: u64) -> Self {
        self.rate_limit_ms = ms;
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }

    pub fn build(self) -> Result<ReqwestClient, reqwest::Error> {
        let inner = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .build()?;

        Ok(ReqwestClient {
            inner,
            rate_limiter: Arc::new(RateLimiter::new(Duration::from_millis(self.rate_limit_ms))),
        })
    }
}

/// Production HTTP client with per-host rate limiting.
///
/// Clones share the connection pool and the rate limiter.
#[derive(Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    rate_limiter: Arc<RateLimiter>,
}

impl ReqwestClient {
    pub fn builder() -> ReqwestClientBuilder {
        ReqwestClientBuilder::new()
    }

    /// Build a client using the timeout from `config`.
    pub fn from_config(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        Self::builder().timeout(config.timeout).build()
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let parsed = reqwest::Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

        if let Some(host) = parsed.host_str() {
            self.rate_limiter.wait(host).await;
        }

        tracing::debug!(host = parsed.host_str(), path = parsed.path(), "network: GET");
        let response = self.inner.get(parsed).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(%status, "network: request failed");
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        String::from_utf8(bytes.to_vec())
            .map_err(|e| FetchError::InvalidEncoding(format!("Invalid UTF-8 in response: {}", e)))
    }
}

/// Mock response for testing.
#[derive(Clone)]
pub enum MockResponse {
    Body(String),
    Status(u16, String),
    /// Simulated transport failure (refused connection, reset, ...).
    ConnectionError(String),
}

/// Mock HTTP client for testing.
///
/// Responses are looked up by exact URL first, then by the URL without its
/// query string, then the fallback. Every requested URL is recorded.
pub struct MockClient {
    responses: HashMap<String, MockResponse>,
    fallback: Option<MockResponse>,
    requests: Mutex<Vec<String>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            fallback: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(mut self, url: &str, response: MockResponse) -> Self {
        self.responses.insert(url.to_string(), response);
        self
    }

    pub fn with_body(self, url: &str, body: &str) -> Self {
        self.with_response(url, MockResponse::Body(body.to_string()))
    }

    pub fn with_connection_error(self, url: &str, error: &str) -> Self {
        self.with_response(url, MockResponse::ConnectionError(error.to_string()))
    }

    /// Response for any URL without a registered entry.
    pub fn with_fallback(mut self, response: MockResponse) -> Self {
        self.fallback = Some(response);
        self
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for MockClient {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }

        let without_query = url.split('?').next().unwrap_or(url);
        let response = self
            .responses
            .get(url)
            .or_else(|| self.responses.get(without_query))
            .or(self.fallback.as_ref());

        match response {
            Some(MockResponse::Body(body)) => Ok(body.clone()),
            Some(MockResponse::Status(status, body)) => Err(FetchError::Status {
                status: *status,
                body: body.clone(),
            }),
            Some(MockResponse::ConnectionError(e)) => Err(FetchError::Connection(e.clone())),
            None => Err(FetchError::InvalidUrl(format!(
                "No mock response for URL: {}",
                url
            ))),
        }
    }
}
