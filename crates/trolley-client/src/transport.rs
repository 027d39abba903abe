//! Transport seam between the gateway and whatever performs network I/O.
//!
//! The crate ships no HTTP client of its own. Applications implement
//! [`Transport`] over their platform's client (reqwest, a WASM fetch
//! shim, a test double) and inject it into the gateway. Requests and
//! responses carry JSON bodies as `serde_json::Value` so the gateway can
//! decode heterogeneous envelopes without committing to a shape here.

use async_trait::async_trait;
use http::{Method, StatusCode};
use serde_json::Value;
use std::time::Duration;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport configuration.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Base URL prepended to every request path.
    pub base_url: String,
    /// Per-request timeout. Expired requests must surface as
    /// [`TransportError::Timeout`], not as a server failure.
    pub timeout: Duration,
}

impl TransportConfig {
    /// Create a configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// An outbound request, transport-agnostic.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method.
    pub method: Method,
    /// Path relative to the configured base URL.
    pub path: String,
    /// Query string pairs.
    pub query: Vec<(String, String)>,
    /// Optional JSON body.
    pub body: Option<Value>,
}

impl TransportRequest {
    /// Create a request with no query and no body.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Append a query pair.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Set the JSON body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// A response as the gateway sees it.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Parsed JSON body, if the response carried one.
    pub body: Option<Value>,
}

impl TransportResponse {
    /// Create a response.
    pub fn new(status: StatusCode, body: Option<Value>) -> Self {
        Self { status, body }
    }

    /// A 200 response with a JSON body.
    pub fn ok(body: Value) -> Self {
        Self::new(StatusCode::OK, Some(body))
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Error type for transport operations.
///
/// Every variant is a network-class failure: the server either never saw
/// the request or never answered it. Server-returned failure statuses are
/// not transport errors; the gateway maps those separately.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("request error: {0}")]
    Request(String),
}

/// Asynchronous request execution.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute a request and return the response.
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = TransportConfig::new("https://api.example.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_config_timeout_override() {
        let config =
            TransportConfig::new("https://api.example.com").with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_request_builder() {
        let request = TransportRequest::new(Method::GET, "/cart")
            .with_query("userId", "u1")
            .with_query("page", "1");

        assert_eq!(request.path, "/cart");
        assert_eq!(request.query.len(), 2);
        assert!(request.body.is_none());
    }

    #[test]
    fn test_response_success() {
        assert!(TransportResponse::ok(serde_json::json!([])).is_success());
        assert!(!TransportResponse::new(StatusCode::INTERNAL_SERVER_ERROR, None).is_success());
    }
}
