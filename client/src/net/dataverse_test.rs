use super::*;

#[test]
fn recent_endpoint_includes_limit() {
    assert_eq!(recent_endpoint(DEFAULT_RECENT_LIMIT), "/api/dataverse/datasets/recent?limit=10");
}

#[test]
fn recent_result_returns_datasets_on_success() {
    let body = RecentDatasetsResponse {
        success: true,
        datasets: vec![DataverseDataset { title: "Soil cores".to_owned(), ..DataverseDataset::default() }],
        error: None,
    };
    assert_eq!(recent_result(body).unwrap()[0].title, "Soil cores");
}

#[test]
fn recent_result_reports_server_error() {
    let body = RecentDatasetsResponse { success: false, datasets: Vec::new(), error: Some("timeout".to_owned()) };
    assert_eq!(recent_result(body), Err("timeout".to_owned()));
}
