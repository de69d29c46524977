//! GDPR consent console state.
//!
//! Records are a static local list. The console's actions only log what the
//! user asked for; nothing is mutated, persisted, or enforced.

#[cfg(test)]
#[path = "consent_test.rs"]
mod consent_test;

use crate::mock::consent_records;
use crate::net::types::ConsentRecord;

/// Shown above the console; actions go no further than `handle`'s log line.
pub const ACTIONS_NOTE: &str = "Actions are logged only; no request is sent.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentAction {
    Grant,
    Withdraw,
    Export,
}

impl ConsentAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Grant => "Grant",
            Self::Withdraw => "Withdraw",
            Self::Export => "Export",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ConsentState {
    pub records: Vec<ConsentRecord>,
}

impl Default for ConsentState {
    fn default() -> Self {
        Self { records: consent_records() }
    }
}

impl ConsentState {
    /// `(granted, total)`.
    pub fn summary(&self) -> (usize, usize) {
        let granted = self.records.iter().filter(|r| r.granted).count();
        (granted, self.records.len())
    }

    pub fn find(&self, id: &str) -> Option<&ConsentRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Log `action` for record `id` and return the logged line.
    pub fn handle(&self, action: ConsentAction, id: &str) -> Option<String> {
        let record = self.find(id)?;
        let message = action_message(action, record);
        leptos::logging::log!("{message}");
        Some(message)
    }
}

pub fn action_message(action: ConsentAction, record: &ConsentRecord) -> String {
    format!(
        "consent {}: {} ({}) [{}]",
        action.label().to_lowercase(),
        record.purpose,
        record.id,
        record.data_types.join(", ")
    )
}
