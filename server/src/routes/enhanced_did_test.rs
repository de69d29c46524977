use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use did_console::net::types::ApiErrorBody;

use super::*;
use crate::backend::DidBackend;

/// Records every forwarded request and answers with a canned response.
struct RecordingBackend {
    seen: Mutex<Vec<ProxyRequest>>,
    answer: Result<ProxyResponse, fn() -> UpstreamError>,
}

impl RecordingBackend {
    fn answering(status: u16, content_type: &str, body: &'static str) -> Arc<Self> {
        Arc::new(Self {
            seen: Mutex::new(Vec::new()),
            answer: Ok(ProxyResponse {
                status,
                content_type: Some(content_type.to_owned()),
                body: Bytes::from_static(body.as_bytes()),
            }),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            seen: Mutex::new(Vec::new()),
            answer: Err(|| UpstreamError::Unreachable { service: "DID backend", message: "connection refused".into() }),
        })
    }

    fn last(&self) -> ProxyRequest {
        self.seen.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl DidBackend for RecordingBackend {
    async fn forward(&self, request: ProxyRequest) -> Result<ProxyResponse, UpstreamError> {
        self.seen.lock().unwrap().push(request);
        match &self.answer {
            Ok(response) => Ok(response.clone()),
            Err(make) => Err(make()),
        }
    }
}

fn state_with(backend: Arc<RecordingBackend>) -> AppState {
    AppState { backend: Some(backend), dataverse: None }
}

async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn list_without_backend_is_service_unavailable() {
    let response = list(State(AppState::default())).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: ApiErrorBody = serde_json::from_str(&body_string(response).await).unwrap();
    assert!(!body.success);
    assert!(body.error.contains("DID_BACKEND_URL"));
}

#[tokio::test]
async fn list_passes_backend_answer_through() {
    let backend = RecordingBackend::answering(200, "application/json", r#"{"success":true,"dids":[]}"#);
    let response = list(State(state_with(backend.clone()))).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get(header::CONTENT_TYPE).unwrap(), "application/json");
    assert_eq!(body_string(response).await, r#"{"success":true,"dids":[]}"#);

    let seen = backend.last();
    assert_eq!(seen.method, Method::GET);
    assert_eq!(seen.path, "/api/enhanced-did/list");
}

#[tokio::test]
async fn create_forwards_multipart_body_and_content_type() {
    let backend = RecordingBackend::answering(201, "application/json", r#"{"id":"did:key:z6Mk"}"#);
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, "multipart/form-data; boundary=xyz".parse().unwrap());
    let body = Bytes::from_static(b"--xyz\r\nContent-Disposition: form-data; name=\"method\"\r\n\r\nkey\r\n--xyz--\r\n");

    let response = create(State(state_with(backend.clone())), headers, body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let seen = backend.last();
    assert_eq!(seen.method, Method::POST);
    assert_eq!(seen.content_type.as_deref(), Some("multipart/form-data; boundary=xyz"));
    assert_eq!(seen.body, body);
}

#[tokio::test]
async fn revoke_encodes_did_and_keeps_upstream_error_status() {
    let backend = RecordingBackend::answering(404, "application/json", r#"{"success":false,"error":"DID not found"}"#);
    let response = revoke(
        State(state_with(backend.clone())),
        Path("did:web:example.com/users 1".to_owned()),
        HeaderMap::new(),
        Bytes::from_static(br#"{"reason":"lost key","userConsent":true,"removeFromStorage":false}"#),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_string(response).await.contains("DID not found"));

    let seen = backend.last();
    assert_eq!(seen.method, Method::DELETE);
    assert_eq!(seen.path, "/api/enhanced-did/revoke/did:web:example.com%2Fusers%201");
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway() {
    let response = list(State(state_with(RecordingBackend::failing()))).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert!(body_string(response).await.contains("connection refused"));
}

#[test]
fn passthrough_without_content_type_keeps_status() {
    let response = into_passthrough(ProxyResponse { status: 204, content_type: None, body: Bytes::new() });
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(response.headers().get(header::CONTENT_TYPE).is_none());
}
