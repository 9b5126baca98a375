//! A single bounded network exchange.

use crate::classify::{classify, Classification};
use crate::descriptor::Method;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use tripadvisor_core::TransportError;
use url::Url;

/// Headers sent with every request unless the caller overrides them
pub const DEFAULT_HEADERS: [(&str, &str); 2] = [
    ("Accept", "application/json"),
    ("Content-Type", "application/json"),
];

/// Everything needed for one attempt
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method
    pub method: Method,
    /// Fully-qualified URL, API key included
    pub url: Url,
    /// Request headers
    pub headers: Vec<(String, String)>,
    /// Upper bound for the whole exchange
    pub timeout: Duration,
    /// Aborts the exchange when cancelled
    pub cancel: CancellationToken,
}

/// A 2xx response with a parsed JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Parsed body; `Null` for an empty body
    pub body: Value,
}

/// Performs one network exchange.
///
/// Implementations report non-2xx statuses, timeouts and connection failures
/// as [`TransportError`]s with the retryable flag already decided.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and wait for its response
    async fn send(&self, request: TransportRequest) -> Result<RawResponse, TransportError>;
}

/// [`Transport`] backed by a pooled `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Wrap an existing `reqwest` client
    #[must_use]
    pub const fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Build a transport with the given User-Agent
    pub fn with_user_agent(user_agent: &str) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .gzip(true)
            .build()
            .map_err(|e| TransportError::request(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::new(http))
    }

    async fn exchange(&self, request: &TransportRequest) -> Result<RawResponse, TransportError> {
        let headers = header_map(&request.headers)?;
        let response = self
            .http
            .request(request.method.to_reqwest(), request.url.clone())
            .headers(headers)
            .send()
            .await
            .map_err(|e| from_reqwest(&e, request.timeout))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| from_reqwest(&e, request.timeout))?;
        debug!(status = status.as_u16(), bytes = text.len(), "response received");

        if !status.is_success() {
            return Err(TransportError::status(status.as_u16(), error_message(&text)));
        }

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).map_err(|e| TransportError::invalid_body(e.to_string()))?
        };

        Ok(RawResponse {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<RawResponse, TransportError> {
        tokio::select! {
            biased;
            () = request.cancel.cancelled() => Err(TransportError::cancelled()),
            outcome = tokio::time::timeout(request.timeout, self.exchange(&request)) => {
                outcome.unwrap_or_else(|_| Err(TransportError::timeout(request.timeout)))
            }
        }
    }
}

/// Apply caller headers over the defaults; names compare case-insensitively
pub fn merge_headers(overrides: &[(String, String)]) -> Vec<(String, String)> {
    let mut merged: Vec<(String, String)> = DEFAULT_HEADERS
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();

    for (name, value) in overrides {
        match merged.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(name)) {
            Some(existing) => existing.1.clone_from(value),
            None => merged.push((name.clone(), value.clone())),
        }
    }
    merged
}

fn header_map(headers: &[(String, String)]) -> Result<HeaderMap, TransportError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let name = HeaderName::try_from(name.as_str())
            .map_err(|e| TransportError::request(format!("invalid header name {name:?}: {e}")))?;
        let value = HeaderValue::try_from(value.as_str())
            .map_err(|e| TransportError::request(format!("invalid header value for {name}: {e}")))?;
        map.insert(name, value);
    }
    Ok(map)
}

fn from_reqwest(err: &reqwest::Error, timeout: Duration) -> TransportError {
    if err.is_timeout() {
        TransportError::timeout(timeout)
    } else if err.is_builder() {
        TransportError::request(err.to_string())
    } else {
        TransportError::connection(err.to_string())
    }
}

/// Best-effort message from a non-2xx body
fn error_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body).map(classify) {
        Ok(Classification::ApiError(descriptor)) => descriptor.message,
        _ if body.trim().is_empty() => "empty response body".to_string(),
        _ => body.chars().take(512).collect(),
    }
}
