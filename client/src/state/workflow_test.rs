use super::*;

#[test]
fn default_state_starts_at_first_step_paused() {
    let state = WorkflowState::default();
    assert_eq!(state.active_index, 0);
    assert!(!state.running);
    assert_eq!(state.active_step().id, "collect");
    assert!(state.tasks.iter().all(|t| t.progress == 0 && t.status == TaskStatus::Queued));
}

#[test]
fn advance_is_ignored_while_paused() {
    let mut state = WorkflowState::default();
    state.advance();
    assert_eq!(state.active_index, 0);
}

#[test]
fn advance_walks_steps_and_stops_on_last() {
    let mut state = WorkflowState::default();
    state.start();
    for _ in 0..FLOW_STEPS.len() * 2 {
        state.advance();
    }
    assert_eq!(state.active_index, FLOW_STEPS.len() - 1);
    assert!(state.steps_done());
    // Agents have not finished, so the run is still going.
    assert!(state.running);
    assert!(!state.is_finished());
}

#[test]
fn ticking_until_stopped_completes_every_task() {
    let mut state = WorkflowState::default();
    state.start();
    let mut ticks = 0;
    while state.running && ticks < 1000 {
        state.tick(|| MAX_PROGRESS_STEP);
        ticks += 1;
    }
    assert!(!state.running);
    assert!(state.is_finished());
    assert_eq!(state.active_index, FLOW_STEPS.len() - 1);
    assert!(state.tasks.iter().all(|t| t.progress == 100 && t.status == TaskStatus::Completed));
}

#[test]
fn slowest_bumps_still_complete_tasks() {
    let mut state = WorkflowState::default();
    state.start();
    let mut ticks = 0;
    while state.running && ticks < 1000 {
        state.tick(|| 1);
        ticks += 1;
    }
    assert_eq!(ticks, 100);
    assert!(state.tasks_done());
}

#[test]
fn tick_is_ignored_while_paused() {
    let mut state = WorkflowState::default();
    state.tick(|| 10);
    assert_eq!(state.active_index, 0);
    assert!(state.tasks.iter().all(|t| t.progress == 0));
}

#[test]
fn start_after_finish_resets() {
    let mut state = WorkflowState::default();
    state.start();
    while state.running {
        state.tick(|| MAX_PROGRESS_STEP);
    }
    assert!(state.is_finished());
    state.start();
    assert_eq!(state.active_index, 0);
    assert!(state.running);
    assert!(state.tasks.iter().all(|t| t.progress == 0));
}

#[test]
fn pause_stops_progress() {
    let mut state = WorkflowState::default();
    state.start();
    state.advance();
    state.pause();
    state.advance();
    assert_eq!(state.active_index, 1);
}

#[test]
fn tick_tasks_clamps_step_and_caps_at_hundred() {
    let mut state = WorkflowState::default();
    state.tick_tasks(|| 200);
    assert!(state.tasks.iter().all(|t| t.progress == MAX_PROGRESS_STEP));
    assert!(state.tasks.iter().all(|t| t.status == TaskStatus::Running));

    for _ in 0..10 {
        state.tick_tasks(|| MAX_PROGRESS_STEP);
    }
    assert!(state.tasks.iter().all(|t| t.progress == 100 && t.status == TaskStatus::Completed));
}

#[test]
fn tick_tasks_never_stalls_on_zero() {
    let mut state = WorkflowState::default();
    state.tick_tasks(|| 0);
    assert!(state.tasks.iter().all(|t| t.progress == 1));
}

#[test]
fn completed_task_ignores_further_advances() {
    let mut task = AgentTask::new("t", "T");
    task.advance(100);
    task.advance(10);
    assert_eq!(task.progress, 100);
    assert_eq!(task.status, TaskStatus::Completed);
}

#[test]
fn flow_step_ids_are_unique() {
    let mut ids: Vec<_> = FLOW_STEPS.iter().map(|s| s.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), FLOW_STEPS.len());
}
