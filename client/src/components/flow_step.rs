//! Workflow visualizer pieces: step list entries and agent progress rows.

#[cfg(test)]
#[path = "flow_step_test.rs"]
mod flow_step_test;

use leptos::prelude::*;

use crate::state::workflow::{AgentTask, FlowStep};

/// Where a step sits relative to the active one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepPhase {
    Done,
    Active,
    Pending,
}

impl StepPhase {
    pub fn of(index: usize, active_index: usize) -> Self {
        match index.cmp(&active_index) {
            std::cmp::Ordering::Less => Self::Done,
            std::cmp::Ordering::Equal => Self::Active,
            std::cmp::Ordering::Greater => Self::Pending,
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Done => "flow-step flow-step--done",
            Self::Active => "flow-step flow-step--active",
            Self::Pending => "flow-step",
        }
    }
}

#[component]
pub fn FlowStepItem(step: &'static FlowStep, index: usize, phase: Signal<StepPhase>) -> impl IntoView {
    view! {
        <li class=move || phase.get().class()>
            <span class="flow-step__index">{index + 1}</span>
            <div class="flow-step__body">
                <strong>{step.title}</strong>
                <p>{step.description}</p>
                <span class="flow-step__agent">{step.agent}</span>
            </div>
        </li>
    }
}

#[component]
pub fn AgentTaskRow(task: Signal<AgentTask>) -> impl IntoView {
    view! {
        <div class="agent-task">
            <div class="agent-task__header">
                <span>{move || task.with(|t| t.name.clone())}</span>
                <span class=move || format!("status-pill status-pill--{}", task.with(|t| t.status.as_str()))>
                    {move || task.with(|t| t.status.as_str())}
                </span>
            </div>
            <div class="agent-task__bar">
                <div class="agent-task__fill" style:width=move || format!("{}%", task.with(|t| t.progress))></div>
            </div>
        </div>
    }
}
