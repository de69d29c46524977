//! Workflow visualizer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Walks `FLOW_STEPS` on a fixed interval while running and bumps the agent
//! task bars on the same tick. The ticker lives only as long as the page; the
//! step position survives navigation in the shared `WorkflowState`.

use leptos::prelude::*;

use crate::components::flow_step::{AgentTaskRow, FlowStepItem, StepPhase};
use crate::state::workflow::{FLOW_STEPS, STEP_INTERVAL_MS, WorkflowState};

#[component]
pub fn WorkflowPage() -> impl IntoView {
    let workflow = expect_context::<RwSignal<WorkflowState>>();

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(STEP_INTERVAL_MS)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                if !workflow.get_untracked().running {
                    continue;
                }
                workflow.update(|w| w.tick(crate::state::workflow::random_progress_step));
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = STEP_INTERVAL_MS;
    }

    let toggle_label = move || {
        let state = workflow.get();
        if state.running {
            "Pause"
        } else if state.is_finished() {
            "Restart"
        } else {
            "Start"
        }
    };
    let on_toggle = move |_| {
        workflow.update(|w| if w.running { w.pause() } else { w.start() });
    };

    view! {
        <section class="panel workflow-page">
            <header class="panel__header">
                <h1>"Workflow"</h1>
                <span class="panel__status">
                    {move || format!("Step {} of {}", workflow.with(|w| w.active_index) + 1, FLOW_STEPS.len())}
                </span>
                <span class="panel__spacer"></span>
                <button class="btn btn--primary" on:click=on_toggle>
                    {toggle_label}
                </button>
                <button class="btn" on:click=move |_| workflow.update(WorkflowState::reset)>
                    "Reset"
                </button>
            </header>

            <div class="workflow-page__body">
                <ol class="flow-steps">
                    {FLOW_STEPS
                        .iter()
                        .enumerate()
                        .map(|(index, step)| {
                            let phase = Signal::derive(move || StepPhase::of(index, workflow.with(|w| w.active_index)));
                            view! { <FlowStepItem step=step index=index phase=phase/> }
                        })
                        .collect::<Vec<_>>()}
                </ol>
                <aside class="agent-tasks">
                    <h2>"Agents"</h2>
                    <p class="agent-tasks__current">{move || workflow.with(|w| w.active_step().agent)}</p>
                    {(0..workflow.with_untracked(|w| w.tasks.len()))
                        .map(|i| {
                            let task = Signal::derive(move || {
                                workflow.with(|w| w.tasks.get(i).cloned().unwrap_or_default())
                            });
                            view! { <AgentTaskRow task=task/> }
                        })
                        .collect::<Vec<_>>()}
                </aside>
            </div>
        </section>
    }
}
