//! Dataverse panel state.
//!
//! DESIGN
//! ======
//! A failed fetch swaps in the local sample list instead of surfacing an
//! error. The swap replaces `items` wholesale, so repeated failures never
//! stack duplicate fallback rows. Linking a dataset to a DID is simulated by
//! a timer; no request is made.

#[cfg(test)]
#[path = "datasets_test.rs"]
mod datasets_test;

use std::collections::HashSet;

use crate::mock::fallback_datasets;
use crate::net::types::{DataverseDataset, DataverseStatus};

/// Delay before a simulated link completes.
pub const LINK_DELAY_MS: u64 = 1500;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DatasetSource {
    /// Nothing fetched yet.
    #[default]
    None,
    Live,
    Fallback,
}

#[derive(Clone, Debug, Default)]
pub struct DatasetsState {
    pub items: Vec<DataverseDataset>,
    pub loading: bool,
    pub source: DatasetSource,
    pub status: Option<DataverseStatus>,
    /// Persistent ids with a simulated link in progress.
    pub linking: HashSet<String>,
}

impl DatasetsState {
    pub fn apply_fetch(&mut self, result: Result<Vec<DataverseDataset>, String>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.source = DatasetSource::Live;
            }
            Err(e) => {
                leptos::logging::warn!("dataset fetch failed, using sample data: {e}");
                self.items = fallback_datasets();
                self.source = DatasetSource::Fallback;
            }
        }
    }

    pub fn apply_status(&mut self, status: DataverseStatus) {
        self.status = Some(status);
    }

    /// Start a simulated link. Returns `false` if the dataset is unknown,
    /// already linked, or already linking.
    pub fn begin_link(&mut self, persistent_id: &str) -> bool {
        let linkable = self
            .items
            .iter()
            .any(|d| d.persistent_id == persistent_id && !d.did_linked);
        linkable && self.linking.insert(persistent_id.to_owned())
    }

    /// Finish a simulated link started by `begin_link`.
    pub fn complete_link(&mut self, persistent_id: &str) {
        if !self.linking.remove(persistent_id) {
            return;
        }
        if let Some(dataset) = self.items.iter_mut().find(|d| d.persistent_id == persistent_id) {
            dataset.did_linked = true;
        }
    }

    pub fn is_linking(&self, persistent_id: &str) -> bool {
        self.linking.contains(persistent_id)
    }

    pub fn linked_count(&self) -> usize {
        self.items.iter().filter(|d| d.did_linked).count()
    }
}
