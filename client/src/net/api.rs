//! REST helpers for the enhanced-DID backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses into one human-readable `String` that the calling
//! panel shows in its banner. Nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{EnhancedDid, ListDidsResponse, RevokeDidRequest};
#[cfg(feature = "hydrate")]
use super::types::{CreateDidResponse, RevokeDidResponse};
#[cfg(any(test, feature = "hydrate"))]
use crate::state::dids::CreateDidPayload;

pub const LIST_ENDPOINT: &str = "/api/enhanced-did/list";
pub const CREATE_ENDPOINT: &str = "/api/enhanced-did/create";

#[cfg(any(test, feature = "hydrate"))]
fn revoke_endpoint(did: &str) -> String {
    format!("/api/enhanced-did/revoke/{}", encode_path_segment(did))
}

/// Percent-encode a DID for use as a single path segment.
///
/// DIDs contain `:` and may contain `/` or `%`, which must not split or
/// re-interpret the route.
pub fn encode_path_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~' | b':') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(action: &str, status: u16) -> String {
    format!("{action} failed: {status}")
}

/// Pick the most useful message from a failing response body.
#[cfg(any(test, feature = "hydrate"))]
fn error_from_body(action: &str, status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .or_else(|| v.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_owned)
        })
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| request_failed_message(action, status))
}

/// Multipart text fields for a create request, in submission order.
#[cfg(any(test, feature = "hydrate"))]
fn create_form_fields(payload: &CreateDidPayload) -> Vec<(&'static str, String)> {
    vec![
        ("method", payload.method.clone()),
        ("network", payload.network.clone()),
        ("metadata", payload.metadata.to_string()),
        ("gdprConsent", payload.gdpr_consent.to_string()),
    ]
}

/// Fetch all DIDs via `GET /api/enhanced-did/list`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the backend reports `success: false`.
pub async fn list_dids() -> Result<Vec<EnhancedDid>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(LIST_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(error_from_body("list DIDs", status, &body));
        }
        let body: ListDidsResponse = resp.json().await.map_err(|e| e.to_string())?;
        list_result(body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Reduce a list envelope to its records or its error.
///
/// # Errors
///
/// Returns the backend error when `success` is false.
pub fn list_result(body: ListDidsResponse) -> Result<Vec<EnhancedDid>, String> {
    if body.success {
        Ok(body.dids)
    } else {
        Err(body.error.unwrap_or_else(|| "list DIDs failed".to_owned()))
    }
}

/// Create a DID via multipart `POST /api/enhanced-did/create`.
///
/// # Errors
///
/// Returns an error string if the form cannot be built, the request fails,
/// or the backend rejects the creation.
#[cfg(feature = "hydrate")]
pub async fn create_did(payload: &CreateDidPayload, files: &[web_sys::File]) -> Result<EnhancedDid, String> {
    let form = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
    for (name, value) in create_form_fields(payload) {
        form.append_with_str(name, &value).map_err(|e| format!("{e:?}"))?;
    }
    for file in files {
        form.append_with_blob_and_filename("files", file, &file.name())
            .map_err(|e| format!("{e:?}"))?;
    }

    let resp = gloo_net::http::Request::post(CREATE_ENDPOINT)
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(error_from_body("create DID", status, &body));
    }
    let body: CreateDidResponse = resp.json().await.map_err(|e| e.to_string())?;
    body.into_result()
}

/// Revoke a DID via `DELETE /api/enhanced-did/revoke/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the backend reports
/// `success: false`.
pub async fn revoke_did(did: &str, request: &RevokeDidRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&revoke_endpoint(did))
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(error_from_body("revoke DID", status, &body));
        }
        let body: RevokeDidResponse = resp.json().await.map_err(|e| e.to_string())?;
        if !body.success {
            return Err(body.error.unwrap_or_else(|| "revoke DID failed".to_owned()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (did, request);
        Err("not available on server".to_owned())
    }
}
