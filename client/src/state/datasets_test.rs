use super::*;

fn live_dataset(pid: &str) -> DataverseDataset {
    DataverseDataset {
        persistent_id: pid.to_owned(),
        title: format!("Dataset {pid}"),
        ..DataverseDataset::default()
    }
}

#[test]
fn default_state_has_no_source() {
    let state = DatasetsState::default();
    assert_eq!(state.source, DatasetSource::None);
    assert!(state.items.is_empty());
}

#[test]
fn successful_fetch_uses_live_items() {
    let mut state = DatasetsState { loading: true, ..DatasetsState::default() };
    state.apply_fetch(Ok(vec![live_dataset("doi:1")]));
    assert!(!state.loading);
    assert_eq!(state.source, DatasetSource::Live);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn failed_fetch_populates_fallback_once() {
    let mut state = DatasetsState::default();
    state.apply_fetch(Err("timeout".to_owned()));
    state.apply_fetch(Err("timeout".to_owned()));
    state.apply_fetch(Err("timeout".to_owned()));
    assert_eq!(state.source, DatasetSource::Fallback);
    assert_eq!(state.items, fallback_datasets());
}

#[test]
fn failed_fetch_replaces_previous_live_items() {
    let mut state = DatasetsState::default();
    state.apply_fetch(Ok(vec![live_dataset("doi:live")]));
    state.apply_fetch(Err("502".to_owned()));
    assert!(state.items.iter().all(|d| d.persistent_id != "doi:live"));
}

#[test]
fn link_flow_flips_flag_after_completion() {
    let mut state = DatasetsState::default();
    state.apply_fetch(Ok(vec![live_dataset("doi:1")]));

    assert!(state.begin_link("doi:1"));
    assert!(state.is_linking("doi:1"));
    assert!(!state.items[0].did_linked);

    state.complete_link("doi:1");
    assert!(!state.is_linking("doi:1"));
    assert!(state.items[0].did_linked);
    assert_eq!(state.linked_count(), 1);
}

#[test]
fn begin_link_rejects_unknown_linked_or_pending() {
    let mut state = DatasetsState::default();
    let mut linked = live_dataset("doi:linked");
    linked.did_linked = true;
    state.apply_fetch(Ok(vec![live_dataset("doi:1"), linked]));

    assert!(!state.begin_link("doi:missing"));
    assert!(!state.begin_link("doi:linked"));
    assert!(state.begin_link("doi:1"));
    assert!(!state.begin_link("doi:1"));
}

#[test]
fn complete_link_without_begin_is_ignored() {
    let mut state = DatasetsState::default();
    state.apply_fetch(Ok(vec![live_dataset("doi:1")]));
    state.complete_link("doi:1");
    assert!(!state.items[0].did_linked);
}

#[test]
fn apply_status_stores_probe() {
    let mut state = DatasetsState::default();
    state.apply_status(DataverseStatus {
        reachable: true,
        version: Some("6.2".to_owned()),
        base_url: "https://demo.dataverse.org".to_owned(),
    });
    assert_eq!(state.status.as_ref().map(|s| s.reachable), Some(true));
}
