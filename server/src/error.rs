//! Server error types and their HTTP mapping.
//!
//! DESIGN
//! ======
//! Every API failure reaches the browser as `{ "success": false, "error": … }`
//! so the client banner can show the message verbatim. Upstream non-2xx
//! responses are not errors here; they are passed through by the proxy.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use did_console::net::types::ApiErrorBody;

/// Invalid startup configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

/// Failures talking to the DID backend or Dataverse.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The upstream URL is not configured.
    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    /// The HTTP client could not be built.
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),

    /// The upstream could not be reached or the transfer failed.
    #[error("{service} unreachable: {message}")]
    Unreachable { service: &'static str, message: String },

    /// The upstream answered with an unexpected status.
    #[error("{service} returned {status}")]
    Status { service: &'static str, status: u16 },

    /// The upstream body could not be parsed.
    #[error("{service} response malformed: {message}")]
    Malformed { service: &'static str, message: String },
}

impl UpstreamError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unreachable { .. } | Self::Status { .. } | Self::Malformed { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::warn!(error = %self, %status, "upstream request failed");
        (status, Json(ApiErrorBody { success: false, error: self.to_string() })).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
