//! Simulated DID provisioning workflow.
//!
//! Purely cosmetic: a fixed step list walked on a timer plus agent progress
//! counters bumped by random amounts. Nothing is persisted; a reload starts
//! over.

#[cfg(test)]
#[path = "workflow_test.rs"]
mod workflow_test;

/// Interval between step advances.
pub const STEP_INTERVAL_MS: u64 = 2000;
/// Largest progress bump per tick.
pub const MAX_PROGRESS_STEP: u8 = 15;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlowStep {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub agent: &'static str,
}

pub const FLOW_STEPS: &[FlowStep] = &[
    FlowStep {
        id: "collect",
        title: "Collect metadata",
        description: "Gather identity metadata and attachments from the form.",
        agent: "Intake agent",
    },
    FlowStep {
        id: "consent",
        title: "Record consent",
        description: "Attach the GDPR consent purposes to the request.",
        agent: "Consent agent",
    },
    FlowStep {
        id: "issue",
        title: "Issue DID",
        description: "Generate keys and the DID document.",
        agent: "Identity agent",
    },
    FlowStep {
        id: "store",
        title: "Store on Filecoin",
        description: "Pin the document and attachments, open a storage deal.",
        agent: "Storage agent",
    },
    FlowStep {
        id: "link",
        title: "Link datasets",
        description: "Associate Dataverse datasets with the new identifier.",
        agent: "Linking agent",
    },
    FlowStep {
        id: "verify",
        title: "Verify compliance",
        description: "Check retention and residency policy for the record.",
        agent: "Compliance agent",
    },
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TaskStatus {
    #[default]
    Queued,
    Running,
    Completed,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::Running => "running",
            Self::Completed => "completed",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AgentTask {
    pub id: String,
    pub name: String,
    /// 0..=100.
    pub progress: u8,
    pub status: TaskStatus,
}

impl AgentTask {
    fn new(id: &str, name: &str) -> Self {
        Self { id: id.to_owned(), name: name.to_owned(), progress: 0, status: TaskStatus::Queued }
    }

    /// Add `step` percent, capped at 100.
    pub fn advance(&mut self, step: u8) {
        if self.status == TaskStatus::Completed {
            return;
        }
        self.progress = self.progress.saturating_add(step).min(100);
        self.status = if self.progress == 100 { TaskStatus::Completed } else { TaskStatus::Running };
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkflowState {
    pub active_index: usize,
    pub running: bool,
    pub tasks: Vec<AgentTask>,
}

impl Default for WorkflowState {
    fn default() -> Self {
        Self { active_index: 0, running: false, tasks: default_tasks() }
    }
}

fn default_tasks() -> Vec<AgentTask> {
    vec![
        AgentTask::new("task-keys", "Key generation"),
        AgentTask::new("task-pin", "IPFS pinning"),
        AgentTask::new("task-deal", "Filecoin deal"),
        AgentTask::new("task-index", "Dataset indexing"),
    ]
}

impl WorkflowState {
    pub fn start(&mut self) {
        if self.is_finished() {
            self.reset();
        }
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Move to the next step; stops on the final one.
    pub fn advance(&mut self) {
        if !self.running {
            return;
        }
        if self.active_index + 1 < FLOW_STEPS.len() {
            self.active_index += 1;
        }
        self.settle();
    }

    /// One timer tick: step forward, then bump the agent tasks. Agents keep
    /// working after the last step until every task completes.
    pub fn tick(&mut self, next_step: impl FnMut() -> u8) {
        if !self.running {
            return;
        }
        self.advance();
        self.tick_tasks(next_step);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn steps_done(&self) -> bool {
        self.active_index + 1 == FLOW_STEPS.len()
    }

    pub fn tasks_done(&self) -> bool {
        self.tasks.iter().all(|t| t.status == TaskStatus::Completed)
    }

    pub fn is_finished(&self) -> bool {
        self.steps_done() && self.tasks_done()
    }

    pub fn active_step(&self) -> &'static FlowStep {
        &FLOW_STEPS[self.active_index.min(FLOW_STEPS.len() - 1)]
    }

    /// Bump every unfinished task by whatever `next_step` yields, clamped to
    /// `1..=MAX_PROGRESS_STEP`.
    pub fn tick_tasks(&mut self, mut next_step: impl FnMut() -> u8) {
        for task in &mut self.tasks {
            if task.status != TaskStatus::Completed {
                task.advance(next_step().clamp(1, MAX_PROGRESS_STEP));
            }
        }
        self.settle();
    }

    /// The run ends once the last step is reached and every task completed.
    fn settle(&mut self) {
        if self.is_finished() {
            self.running = false;
        }
    }
}

/// Random progress bump in `1..=MAX_PROGRESS_STEP` from the browser RNG.
#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn random_progress_step() -> u8 {
    (js_sys::Math::random() * f64::from(MAX_PROGRESS_STEP)) as u8 + 1
}
