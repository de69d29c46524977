//! DID backend proxy.
//!
//! DESIGN
//! ======
//! The browser talks to `/api/enhanced-did/*` on this server; requests are
//! forwarded to `DID_BACKEND_URL` with body and `content-type` untouched, so
//! multipart uploads pass through without being parsed here. The backend's
//! status, `content-type` and body come back unchanged.

use std::time::Duration;

use async_trait::async_trait;
use axum::body::Bytes;
use axum::http::Method;

use crate::config::UpstreamTimeouts;
use crate::error::UpstreamError;

const SERVICE: &str = "DID backend";

/// A request bound for the DID backend, relative to its base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyRequest {
    pub method: Method,
    /// Path and query, starting with `/`.
    pub path: String,
    pub content_type: Option<String>,
    pub body: Bytes,
}

/// What the backend answered, forwarded verbatim to the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

/// Forwarding seam for the DID backend. Enables mocking in tests.
#[async_trait]
pub trait DidBackend: Send + Sync {
    /// Forward `request` and return the backend's raw answer.
    ///
    /// # Errors
    ///
    /// Returns an [`UpstreamError`] only when no answer was received.
    async fn forward(&self, request: ProxyRequest) -> Result<ProxyResponse, UpstreamError>;
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

pub struct HttpDidBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpDidBackend {
    /// # Errors
    ///
    /// Returns [`UpstreamError::HttpClientBuild`] if reqwest rejects the settings.
    pub fn new(base_url: String, timeouts: UpstreamTimeouts) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| UpstreamError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url })
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl DidBackend for HttpDidBackend {
    async fn forward(&self, request: ProxyRequest) -> Result<ProxyResponse, UpstreamError> {
        let method = reqwest::Method::from_bytes(request.method.as_str().as_bytes())
            .map_err(|e| UpstreamError::Unreachable { service: SERVICE, message: e.to_string() })?;
        let url = self.url_for(&request.path);

        let mut builder = self.http.request(method, &url);
        if let Some(content_type) = &request.content_type {
            builder = builder.header(reqwest::header::CONTENT_TYPE, content_type);
        }
        if !request.body.is_empty() {
            builder = builder.body(request.body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| UpstreamError::Unreachable { service: SERVICE, message: e.to_string() })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::Unreachable { service: SERVICE, message: e.to_string() })?;

        tracing::debug!(%url, status, "DID backend answered");
        Ok(ProxyResponse { status, content_type, body })
    }
}

#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;
