use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::http::StatusCode;
use did_console::net::types::{ApiErrorBody, DataverseDataset};

use super::*;
use crate::dataverse::DataverseApi;

struct MockDataverse {
    reachable: bool,
    datasets: Option<Vec<DataverseDataset>>,
    requested_limits: Mutex<Vec<u32>>,
}

impl MockDataverse {
    fn new(reachable: bool, datasets: Option<Vec<DataverseDataset>>) -> Arc<Self> {
        Arc::new(Self { reachable, datasets, requested_limits: Mutex::new(Vec::new()) })
    }
}

#[async_trait]
impl DataverseApi for MockDataverse {
    async fn status(&self) -> DataverseStatus {
        DataverseStatus {
            reachable: self.reachable,
            version: self.reachable.then(|| "6.2".to_owned()),
            base_url: "https://dataverse.test".into(),
        }
    }

    async fn recent_datasets(&self, limit: u32) -> Result<Vec<DataverseDataset>, UpstreamError> {
        self.requested_limits.lock().unwrap().push(limit);
        self.datasets
            .clone()
            .ok_or(UpstreamError::Status { service: "Dataverse", status: 500 })
    }
}

fn state_with(mock: Arc<MockDataverse>) -> AppState {
    AppState { backend: None, dataverse: Some(mock) }
}

fn dataset(pid: &str) -> DataverseDataset {
    DataverseDataset { persistent_id: pid.into(), title: format!("Dataset {pid}"), ..DataverseDataset::default() }
}

async fn json_body<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[test]
fn recent_query_defaults_and_clamps() {
    assert_eq!(RecentQuery::default().effective_limit(), DEFAULT_RECENT_LIMIT);
    assert_eq!(RecentQuery { limit: Some(0) }.effective_limit(), 1);
    assert_eq!(RecentQuery { limit: Some(99) }.effective_limit(), MAX_RECENT_LIMIT);
    assert_eq!(RecentQuery { limit: Some(25) }.effective_limit(), 25);
}

#[tokio::test]
async fn status_without_dataverse_reports_unreachable() {
    let Json(status) = status(State(AppState::default())).await;
    assert!(!status.reachable);
    assert!(status.version.is_none());
}

#[tokio::test]
async fn status_reports_probe_result() {
    let Json(status) = status(State(state_with(MockDataverse::new(true, None)))).await;
    assert!(status.reachable);
    assert_eq!(status.version.as_deref(), Some("6.2"));
}

#[tokio::test]
async fn recent_without_dataverse_is_service_unavailable() {
    let response = recent(State(AppState::default()), Query(RecentQuery::default())).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: ApiErrorBody = json_body(response).await;
    assert!(body.error.contains("DATAVERSE_URL"));
}

#[tokio::test]
async fn recent_wraps_datasets_and_passes_clamped_limit() {
    let mock = MockDataverse::new(true, Some(vec![dataset("doi:1"), dataset("doi:2")]));
    let response = recent(State(state_with(mock.clone())), Query(RecentQuery { limit: Some(500) })).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: RecentDatasetsResponse = json_body(response).await;
    assert!(body.success);
    assert_eq!(body.datasets.len(), 2);
    assert_eq!(*mock.requested_limits.lock().unwrap(), vec![MAX_RECENT_LIMIT]);
}

#[tokio::test]
async fn recent_upstream_failure_is_bad_gateway() {
    let response = recent(State(state_with(MockDataverse::new(false, None))), Query(RecentQuery::default())).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body: ApiErrorBody = json_body(response).await;
    assert!(!body.success);
}
