//! Read-only Dataverse calls, routed through the host server.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server owns the upstream Dataverse client (base URL, token, timeouts);
//! the browser only sees `/api/dataverse/*` on its own origin.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "dataverse_test.rs"]
mod dataverse_test;

use super::types::{DataverseDataset, DataverseStatus, RecentDatasetsResponse};

pub const STATUS_ENDPOINT: &str = "/api/dataverse/status";
pub const DEFAULT_RECENT_LIMIT: u32 = 10;

#[cfg(any(test, feature = "hydrate"))]
fn recent_endpoint(limit: u32) -> String {
    format!("/api/dataverse/datasets/recent?limit={limit}")
}

/// Probe Dataverse reachability. Unreachable or SSR yields `reachable: false`.
pub async fn fetch_status() -> DataverseStatus {
    #[cfg(feature = "hydrate")]
    {
        let Ok(resp) = gloo_net::http::Request::get(STATUS_ENDPOINT).send().await else {
            return DataverseStatus::default();
        };
        if !resp.ok() {
            return DataverseStatus::default();
        }
        resp.json::<DataverseStatus>().await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        DataverseStatus::default()
    }
}

/// Fetch the most recently published datasets.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the envelope reports failure.
pub async fn fetch_recent_datasets(limit: u32) -> Result<Vec<DataverseDataset>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&recent_endpoint(limit))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("dataset fetch failed: {}", resp.status()));
        }
        let body: RecentDatasetsResponse = resp.json().await.map_err(|e| e.to_string())?;
        recent_result(body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = limit;
        Err("not available on server".to_owned())
    }
}

/// Reduce the recent-datasets envelope to its records or its error.
///
/// # Errors
///
/// Returns the server error when `success` is false.
pub fn recent_result(body: RecentDatasetsResponse) -> Result<Vec<DataverseDataset>, String> {
    if body.success {
        Ok(body.datasets)
    } else {
        Err(body.error.unwrap_or_else(|| "dataset fetch failed".to_owned()))
    }
}
