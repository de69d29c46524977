//! Read-only Dataverse client.
//!
//! Thin HTTP wrapper for `/api/info/version` and `/api/search`. Pure parsing
//! in `parse_version_response` / `parse_search_response` for testability.

use std::time::Duration;

use async_trait::async_trait;
use did_console::net::types::{DataverseDataset, DataverseStatus};
use serde::Deserialize;

use crate::config::{DataverseConfig, UpstreamTimeouts};
use crate::error::UpstreamError;

const SERVICE: &str = "Dataverse";
const API_KEY_HEADER: &str = "X-Dataverse-key";

/// Upper bound for `per_page` on the recent-datasets search.
pub const MAX_RECENT_LIMIT: u32 = 50;

/// Read-only Dataverse operations. Enables mocking in tests.
#[async_trait]
pub trait DataverseApi: Send + Sync {
    /// Probe the installation. Never fails; an unreachable server is reported
    /// through `reachable = false`.
    async fn status(&self) -> DataverseStatus;

    /// Most recently published datasets, newest first.
    ///
    /// # Errors
    ///
    /// Returns an [`UpstreamError`] if the search cannot be fetched or parsed.
    async fn recent_datasets(&self, limit: u32) -> Result<Vec<DataverseDataset>, UpstreamError>;
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct DataverseClient {
    http: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl DataverseClient {
    /// # Errors
    ///
    /// Returns [`UpstreamError::HttpClientBuild`] if reqwest rejects the settings.
    pub fn new(config: DataverseConfig, timeouts: UpstreamTimeouts) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| UpstreamError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url, api_token: config.api_token })
    }

    pub fn version_url(&self) -> String {
        format!("{}/api/info/version", self.base_url)
    }

    pub fn search_url(&self, limit: u32) -> String {
        format!(
            "{}/api/search?q=*&type=dataset&sort=date&order=desc&per_page={}",
            self.base_url,
            limit.clamp(1, MAX_RECENT_LIMIT)
        )
    }

    async fn get_text(&self, url: &str) -> Result<String, UpstreamError> {
        let mut request = self.http.get(url);
        if let Some(token) = &self.api_token {
            request = request.header(API_KEY_HEADER, token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| UpstreamError::Unreachable { service: SERVICE, message: e.to_string() })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| UpstreamError::Unreachable { service: SERVICE, message: e.to_string() })?;

        if !(200..300).contains(&status) {
            return Err(UpstreamError::Status { service: SERVICE, status });
        }
        Ok(text)
    }
}

#[async_trait]
impl DataverseApi for DataverseClient {
    async fn status(&self) -> DataverseStatus {
        let version = match self.get_text(&self.version_url()).await {
            Ok(text) => parse_version_response(&text),
            Err(e) => {
                tracing::warn!(error = %e, base_url = %self.base_url, "dataverse probe failed");
                return DataverseStatus { reachable: false, version: None, base_url: self.base_url.clone() };
            }
        };
        DataverseStatus { reachable: true, version, base_url: self.base_url.clone() }
    }

    async fn recent_datasets(&self, limit: u32) -> Result<Vec<DataverseDataset>, UpstreamError> {
        let text = self.get_text(&self.search_url(limit)).await?;
        let datasets = parse_search_response(&text)?;
        tracing::info!(count = datasets.len(), "fetched recent dataverse datasets");
        Ok(datasets)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    status: String,
    data: Option<T>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Deserialize)]
struct VersionData {
    version: Option<String>,
}

#[derive(Deserialize)]
struct SearchData {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Deserialize)]
struct SearchItem {
    #[serde(default, rename = "type")]
    kind: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    global_id: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    published_at: String,
    #[serde(default)]
    authors: Vec<String>,
    #[serde(default)]
    subjects: Vec<String>,
}

/// Extract the version string from `/api/info/version`. A body that does not
/// parse still counts as reachable, just without a version.
pub fn parse_version_response(text: &str) -> Option<String> {
    serde_json::from_str::<Envelope<VersionData>>(text)
        .ok()
        .and_then(|env| env.data)
        .and_then(|data| data.version)
}

/// Parse a `/api/search` response into dataset records. Non-dataset items are
/// skipped; `didLinked` always starts `false`.
///
/// # Errors
///
/// Returns [`UpstreamError::Malformed`] if the JSON is invalid or the envelope
/// reports an error.
pub fn parse_search_response(text: &str) -> Result<Vec<DataverseDataset>, UpstreamError> {
    let envelope: Envelope<SearchData> = serde_json::from_str(text)
        .map_err(|e| UpstreamError::Malformed { service: SERVICE, message: e.to_string() })?;

    if envelope.status != "OK" {
        let message = envelope.message.unwrap_or_else(|| format!("status {}", envelope.status));
        return Err(UpstreamError::Malformed { service: SERVICE, message });
    }

    let items = envelope.data.map(|d| d.items).unwrap_or_default();
    Ok(items
        .into_iter()
        .filter(|item| item.kind == "dataset")
        .map(|item| DataverseDataset {
            persistent_id: item.global_id,
            title: item.name,
            authors: item.authors,
            description: item.description,
            published_at: item.published_at,
            subjects: item.subjects,
            url: item.url,
            did_linked: false,
        })
        .collect())
}

#[cfg(test)]
#[path = "dataverse_test.rs"]
mod tests;
