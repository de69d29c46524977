use super::*;

fn client(token: Option<&str>) -> DataverseClient {
    DataverseClient::new(
        DataverseConfig { base_url: "https://demo.dataverse.org".into(), api_token: token.map(str::to_owned) },
        UpstreamTimeouts { request_secs: 1, connect_secs: 1 },
    )
    .unwrap()
}

#[test]
fn search_url_requests_newest_datasets_first() {
    assert_eq!(
        client(None).search_url(10),
        "https://demo.dataverse.org/api/search?q=*&type=dataset&sort=date&order=desc&per_page=10"
    );
}

#[test]
fn search_url_clamps_limit() {
    assert!(client(None).search_url(0).ends_with("per_page=1"));
    assert!(client(None).search_url(500).ends_with("per_page=50"));
}

#[test]
fn version_url_targets_info_endpoint() {
    assert_eq!(client(Some("t")).version_url(), "https://demo.dataverse.org/api/info/version");
}

#[test]
fn parse_version_reads_data_version() {
    let text = r#"{"status":"OK","data":{"version":"6.2","build":"1234"}}"#;
    assert_eq!(parse_version_response(text).as_deref(), Some("6.2"));
    assert_eq!(parse_version_response("<html>"), None);
}

#[test]
fn parse_search_maps_dataset_items() {
    let text = r#"{
        "status": "OK",
        "data": {
            "q": "*",
            "total_count": 2,
            "items": [
                {
                    "name": "Māori Traditional Knowledge Archive",
                    "type": "dataset",
                    "url": "https://doi.org/10.7910/DVN/MAORI01",
                    "global_id": "doi:10.7910/DVN/MAORI01",
                    "description": "Oral histories.",
                    "published_at": "2024-03-01T10:00:00Z",
                    "authors": ["Te Rangi, A."],
                    "subjects": ["Social Sciences"]
                },
                {
                    "name": "readme.txt",
                    "type": "file",
                    "url": "https://demo.dataverse.org/api/access/datafile/1"
                }
            ]
        }
    }"#;

    let datasets = parse_search_response(text).unwrap();
    assert_eq!(datasets.len(), 1);
    let d = &datasets[0];
    assert_eq!(d.persistent_id, "doi:10.7910/DVN/MAORI01");
    assert_eq!(d.title, "Māori Traditional Knowledge Archive");
    assert_eq!(d.authors, vec!["Te Rangi, A.".to_owned()]);
    assert_eq!(d.subjects, vec!["Social Sciences".to_owned()]);
    assert!(!d.did_linked);
}

#[test]
fn parse_search_tolerates_missing_optional_fields() {
    let text = r#"{"status":"OK","data":{"items":[{"type":"dataset","name":"Bare","global_id":"doi:1"}]}}"#;
    let datasets = parse_search_response(text).unwrap();
    assert_eq!(datasets[0].title, "Bare");
    assert!(datasets[0].authors.is_empty());
    assert!(datasets[0].published_at.is_empty());
}

#[test]
fn parse_search_error_envelope_is_malformed() {
    let text = r#"{"status":"ERROR","message":"Invalid sort field"}"#;
    let err = parse_search_response(text).unwrap_err();
    assert!(matches!(err, UpstreamError::Malformed { .. }));
    assert!(err.to_string().contains("Invalid sort field"));
}

#[test]
fn parse_search_rejects_invalid_json() {
    assert!(parse_search_response("not json").is_err());
}
