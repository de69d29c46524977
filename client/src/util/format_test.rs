use super::*;
use crate::net::types::DealId;

#[test]
fn short_id_truncates_long_dids() {
    assert_eq!(short_id("did:key:z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK", 12, 6), "did:key:z6Mk…ta2doK");
}

#[test]
fn short_id_keeps_short_values() {
    assert_eq!(short_id("did:web:a.b", 12, 6), "did:web:a.b");
}

#[test]
fn short_id_counts_characters_not_bytes() {
    assert_eq!(short_id("ĀĀĀĀĀĀĀĀĀĀ", 2, 2), "ĀĀ…ĀĀ");
}

#[test]
fn date_part_strips_time() {
    assert_eq!(date_part("2024-02-11T09:30:00Z"), "2024-02-11");
    assert_eq!(date_part("2024-02-11"), "2024-02-11");
}

#[test]
fn join_or_dash_handles_empty() {
    assert_eq!(join_or_dash(&[]), "—");
    assert_eq!(join_or_dash(&["a".to_owned(), "b".to_owned()]), "a, b");
}

#[test]
fn storage_summary_renders_numeric_deal_and_skips_missing_replication() {
    let storage = StorageInfo {
        provider: "filecoin".to_owned(),
        cid: Some("bafy123".to_owned()),
        deal_id: Some(DealId::Number(482_113)),
        replication: None,
    };
    assert_eq!(storage_summary(&storage), "filecoin · bafy123 · deal 482113");
}

#[test]
fn storage_summary_marks_unpinned_documents() {
    let storage = StorageInfo {
        provider: "ipfs".to_owned(),
        cid: None,
        deal_id: Some(DealId::Text("f0-77".to_owned())),
        replication: Some(2),
    };
    assert_eq!(storage_summary(&storage), "ipfs · pending · deal f0-77 · ×2");
}
