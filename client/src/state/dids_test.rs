use super::*;
use crate::mock::mock_dids;

fn loaded_state() -> DidsState {
    let mut state = DidsState { loading: true, ..DidsState::default() };
    state.apply_list(Ok(mock_dids()));
    state
}

fn filled_form() -> CreateDidForm {
    CreateDidForm {
        name: "Archive steward".to_owned(),
        description: "Custodian identity".to_owned(),
        author: "Trust Board".to_owned(),
        contact_email: "trust@example.org".to_owned(),
        ..CreateDidForm::default()
    }
}

// =============================================================
// DidsState
// =============================================================

#[test]
fn apply_list_replaces_items_and_clears_loading() {
    let state = loaded_state();
    assert!(!state.loading);
    assert!(state.loaded);
    assert_eq!(state.items.len(), mock_dids().len());
    assert!(state.error.is_none());
}

#[test]
fn apply_list_failure_keeps_previous_items() {
    let mut state = loaded_state();
    state.apply_list(Err("list DIDs failed: 502".to_owned()));
    assert_eq!(state.items.len(), mock_dids().len());
    assert_eq!(state.error.as_deref(), Some("list DIDs failed: 502"));
}

#[test]
fn apply_created_prepends_record() {
    let mut state = loaded_state();
    state.create_pending = true;
    let created = EnhancedDid { id: "did:key:new".to_owned(), ..EnhancedDid::default() };
    state.apply_created(created);
    assert_eq!(state.items[0].id, "did:key:new");
    assert!(!state.create_pending);
}

#[test]
fn revoking_changes_only_status() {
    let mut state = loaded_state();
    let target = state.items[0].clone();
    assert_eq!(target.status, DidStatus::Active);
    let mut before = serde_json::to_value(&target).unwrap();

    assert!(state.apply_revoked(&target.id));

    let mut after = serde_json::to_value(&state.items[0]).unwrap();
    assert_eq!(state.items[0].status, DidStatus::Revoked);
    before.as_object_mut().unwrap().remove("status");
    after.as_object_mut().unwrap().remove("status");
    assert_eq!(serde_json::to_string(&before).unwrap(), serde_json::to_string(&after).unwrap());
}

#[test]
fn revoking_leaves_other_records_untouched() {
    let mut state = loaded_state();
    let others: Vec<_> = state.items[1..].to_vec();
    let id = state.items[0].id.clone();
    state.apply_revoked(&id);
    assert_eq!(&state.items[1..], others.as_slice());
}

#[test]
fn revoking_unknown_id_is_reported() {
    let mut state = loaded_state();
    state.revoke_pending = Some("did:key:missing".to_owned());
    assert!(!state.apply_revoked("did:key:missing"));
    assert!(state.revoke_pending.is_none());
}

#[test]
fn fail_clears_pending_flags() {
    let mut state = DidsState { loading: true, create_pending: true, ..DidsState::default() };
    state.revoke_pending = Some("did:x".to_owned());
    state.fail("backend down");
    assert!(!state.loading);
    assert!(!state.create_pending);
    assert!(state.revoke_pending.is_none());
    assert_eq!(state.error.as_deref(), Some("backend down"));
}

#[test]
fn status_counts_tally_each_status() {
    assert_eq!(loaded_state().status_counts(), (2, 1, 1));
}

// =============================================================
// CreateDidForm
// =============================================================

#[test]
fn empty_form_cannot_submit() {
    let form = CreateDidForm::default();
    assert!(!form.can_submit());
    assert_eq!(form.missing_required_fields(), vec!["name", "description", "author", "contact email"]);
}

#[test]
fn each_required_field_blocks_submit() {
    let mut form = filled_form();
    form.name = "  ".to_owned();
    assert!(!form.can_submit());

    let mut form = filled_form();
    form.description.clear();
    assert!(!form.can_submit());

    let mut form = filled_form();
    form.author.clear();
    assert!(!form.can_submit());

    let mut form = filled_form();
    form.contact_email.clear();
    assert_eq!(form.missing_required_fields(), vec!["contact email"]);
}

#[test]
fn filled_form_can_submit() {
    assert!(filled_form().can_submit());
}

#[test]
fn tag_list_splits_and_trims() {
    let form = CreateDidForm { tags: " a, ,b ,c".to_owned(), ..CreateDidForm::default() };
    assert_eq!(form.tag_list(), vec!["a", "b", "c"]);
}

#[test]
fn payload_carries_metadata_and_consent() {
    let form = CreateDidForm { consent_research: true, tags: "oral history".to_owned(), ..filled_form() };
    let payload = form.to_payload();
    assert_eq!(payload.method, "key");
    assert_eq!(payload.network, "mainnet");
    assert_eq!(payload.metadata["author"], "Trust Board");
    assert_eq!(payload.metadata["tags"], serde_json::json!(["oral history"]));
    assert_eq!(payload.gdpr_consent["research"], true);
    assert_eq!(payload.gdpr_consent["sharing"], false);
    assert_eq!(payload.gdpr_consent["purposes"], serde_json::json!(["dataProcessing", "research"]));
}

// =============================================================
// RevokeDidForm
// =============================================================

#[test]
fn revoke_form_requires_reason() {
    let mut form = RevokeDidForm::default();
    assert!(!form.can_submit());
    form.reason = " key rotated ".to_owned();
    assert!(form.can_submit());
    assert_eq!(form.to_request().reason, "key rotated");
}
