//! `/api/dataverse/*` handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use did_console::net::types::{DataverseStatus, RecentDatasetsResponse};
use serde::Deserialize;

use crate::dataverse::MAX_RECENT_LIMIT;
use crate::error::UpstreamError;
use crate::state::AppState;

pub const DEFAULT_RECENT_LIMIT: u32 = 10;

#[derive(Debug, Default, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<u32>,
}

impl RecentQuery {
    pub fn effective_limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_RECENT_LIMIT).clamp(1, MAX_RECENT_LIMIT)
    }
}

/// `GET /api/dataverse/status`
pub async fn status(State(state): State<AppState>) -> Json<DataverseStatus> {
    match state.dataverse.as_ref() {
        Some(client) => Json(client.status().await),
        None => Json(DataverseStatus::default()),
    }
}

/// `GET /api/dataverse/datasets/recent?limit=N`
pub async fn recent(State(state): State<AppState>, Query(query): Query<RecentQuery>) -> Response {
    let Some(client) = state.dataverse.as_ref() else {
        return UpstreamError::NotConfigured("DATAVERSE_URL").into_response();
    };

    match client.recent_datasets(query.effective_limit()).await {
        Ok(datasets) => Json(RecentDatasetsResponse { success: true, datasets, error: None }).into_response(),
        Err(e) => e.into_response(),
    }
}

#[cfg(test)]
#[path = "dataverse_test.rs"]
mod tests;
