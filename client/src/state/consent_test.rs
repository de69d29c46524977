use super::*;

#[test]
fn default_state_loads_static_records() {
    let state = ConsentState::default();
    assert_eq!(state.records, consent_records());
}

#[test]
fn summary_counts_granted_records() {
    let state = ConsentState::default();
    let (granted, total) = state.summary();
    assert_eq!(total, 5);
    assert_eq!(granted, 3);
}

#[test]
fn handle_logs_without_mutating() {
    let state = ConsentState::default();
    let before = state.records.clone();
    let message = state.handle(ConsentAction::Withdraw, "consent-research").unwrap();
    assert_eq!(
        message,
        "consent withdraw: Research use (consent-research) [dataset metadata, usage statistics]"
    );
    assert_eq!(state.records, before);
}

#[test]
fn handle_unknown_record_is_none() {
    let state = ConsentState::default();
    assert!(state.handle(ConsentAction::Grant, "consent-missing").is_none());
}

#[test]
fn action_labels_are_distinct() {
    let labels = [ConsentAction::Grant, ConsentAction::Withdraw, ConsentAction::Export].map(ConsentAction::label);
    assert_eq!(labels, ["Grant", "Withdraw", "Export"]);
}

#[test]
fn actions_note_does_not_promise_processing() {
    assert!(ACTIONS_NOTE.contains("logged only"));
    assert!(!ACTIONS_NOTE.to_lowercase().contains("process"));
}
