use super::*;
use std::collections::HashSet;

#[test]
fn mock_dids_have_unique_identifiers() {
    let dids = mock_dids();
    let ids: HashSet<_> = dids.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids.len(), dids.len());
}

#[test]
fn mock_dids_cover_every_status() {
    let statuses: HashSet<_> = mock_dids().iter().map(|d| d.status).collect();
    assert!(statuses.contains(&DidStatus::Active));
    assert!(statuses.contains(&DidStatus::Revoked));
    assert!(statuses.contains(&DidStatus::Suspended));
}

#[test]
fn fallback_datasets_include_maori_archive() {
    assert!(fallback_datasets().iter().any(|d| d.title == "Māori Traditional Knowledge Archive"));
}

#[test]
fn fallback_datasets_have_unique_persistent_ids() {
    let datasets = fallback_datasets();
    let ids: HashSet<_> = datasets.iter().map(|d| d.persistent_id.as_str()).collect();
    assert_eq!(ids.len(), datasets.len());
}

#[test]
fn consent_records_mix_granted_and_withheld() {
    let records = consent_records();
    assert!(records.iter().any(|r| r.granted));
    assert!(records.iter().any(|r| !r.granted));
}
