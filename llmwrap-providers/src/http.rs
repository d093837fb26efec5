//! HTTP client abstraction and utilities

use crate::constants::DEFAULT_TIMEOUT;
use crate::error;
use llmwrap_core::Error;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, RETRY_AFTER};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, trace, warn};

/// A raw HTTP response, before any status handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Parsed `Retry-After` header (delay in seconds form only)
    pub retry_after: Option<Duration>,
    /// Response body as text
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client abstraction
///
/// Implementations only move bytes; status handling lives in [`post_json`],
/// so a custom client (or a test double) gets the same error mapping.
#[async_trait::async_trait]
pub trait HttpClient: Send + Sync {
    /// Send a JSON POST request
    async fn post(&self, url: &str, headers: HeaderMap, body: &Value) -> Result<HttpResponse, Error>;
}

/// Default HTTP client implementation using reqwest
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Create a new HTTP client with the default timeout
    pub fn new() -> Result<Self, Error> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a new HTTP client with a request timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(error::network_error)?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl HttpClient for ReqwestClient {
    async fn post(&self, url: &str, headers: HeaderMap, body: &Value) -> Result<HttpResponse, Error> {
        let response = self
            .client
            .post(url)
            .headers(headers)
            .json(body)
            .send()
            .await
            .map_err(error::network_error)?;

        let status = response.status().as_u16();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_secs);
        let body = response.text().await.map_err(error::network_error)?;

        Ok(HttpResponse {
            status,
            retry_after,
            body,
        })
    }
}

/// POST a JSON body and decode the JSON answer
///
/// Non-success statuses are turned into errors with [`error::status_error`].
pub async fn post_json(
    client: &dyn HttpClient,
    provider: &str,
    url: &str,
    headers: HeaderMap,
    body: Value,
) -> Result<Value, Error> {
    debug!(provider, url, "Sending completion request");
    trace!(provider, body = %body, "Request body");

    let response = client.post(url, headers, &body).await?;

    if !response.is_success() {
        warn!(provider, status = response.status, "Completion request failed");
        return Err(error::status_error(provider, &response));
    }

    debug!(
        provider,
        status = response.status,
        bytes = response.body.len(),
        "Received completion response"
    );
    serde_json::from_str(&response.body).map_err(error::serialization_error)
}

/// Headers for bearer-token authenticated JSON APIs
///
/// No `Authorization` header is added when `api_key` is `None`, for local
/// servers that run without authentication.
pub fn bearer_headers(api_key: Option<&str>) -> Result<HeaderMap, Error> {
    let mut headers = json_headers();

    if let Some(api_key) = api_key {
        headers.insert(AUTHORIZATION, header_value(&format!("Bearer {api_key}"), "API key")?);
    }

    Ok(headers)
}

/// Headers with only the JSON content type
pub fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

/// Build a header value, reporting `what` on failure
pub fn header_value(value: &str, what: &str) -> Result<HeaderValue, Error> {
    HeaderValue::from_str(value).map_err(|e| Error::Configuration(format!("Invalid {what}: {e}")))
}

/// Join a base URL and a path with exactly one slash
pub fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
