use super::*;

#[test]
fn step_phase_splits_around_active_index() {
    assert_eq!(StepPhase::of(0, 2), StepPhase::Done);
    assert_eq!(StepPhase::of(2, 2), StepPhase::Active);
    assert_eq!(StepPhase::of(3, 2), StepPhase::Pending);
}

#[test]
fn only_active_and_done_steps_get_modifier_classes() {
    assert_eq!(StepPhase::Pending.class(), "flow-step");
    assert!(StepPhase::Active.class().ends_with("--active"));
    assert!(StepPhase::Done.class().ends_with("--done"));
}
