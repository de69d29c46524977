//! `/api/enhanced-did/*` handlers: forward to the DID backend.

use axum::body::{Body, Bytes};
use axum::extract::{Path, State};
use axum::http::{HeaderMap, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};

use did_console::net::api::encode_path_segment;

use crate::backend::{ProxyRequest, ProxyResponse};
use crate::error::UpstreamError;
use crate::state::AppState;

/// `GET /api/enhanced-did/list`
pub async fn list(State(state): State<AppState>) -> Response {
    forward(&state, Method::GET, "/api/enhanced-did/list".to_owned(), &HeaderMap::new(), Bytes::new()).await
}

/// `POST /api/enhanced-did/create` (multipart, forwarded as-is)
pub async fn create(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    forward(&state, Method::POST, "/api/enhanced-did/create".to_owned(), &headers, body).await
}

/// `DELETE /api/enhanced-did/revoke/{did}`
pub async fn revoke(
    State(state): State<AppState>,
    Path(did): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = format!("/api/enhanced-did/revoke/{}", encode_path_segment(&did));
    forward(&state, Method::DELETE, path, &headers, body).await
}

async fn forward(state: &AppState, method: Method, path: String, headers: &HeaderMap, body: Bytes) -> Response {
    let Some(backend) = state.backend.as_ref() else {
        return UpstreamError::NotConfigured("DID_BACKEND_URL").into_response();
    };

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let request = ProxyRequest { method, path, content_type, body };

    match backend.forward(request).await {
        Ok(response) => into_passthrough(response),
        Err(e) => e.into_response(),
    }
}

/// Rebuild the backend's answer with its status and `content-type` intact.
pub fn into_passthrough(response: ProxyResponse) -> Response {
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut builder = Response::builder().status(status);
    if let Some(content_type) = &response.content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    builder
        .body(Body::from(response.body))
        .unwrap_or_else(|e| {
            UpstreamError::Malformed { service: "DID backend", message: e.to_string() }.into_response()
        })
}

#[cfg(test)]
#[path = "enhanced_did_test.rs"]
mod tests;
