//! DID panel state plus the create/revoke form models.
//!
//! DESIGN
//! ======
//! Records are whatever the backend last returned. Local mutations are limited
//! to prepending a created record and flipping one record's status on revoke;
//! nothing here enforces cross-record invariants.

#[cfg(test)]
#[path = "dids_test.rs"]
mod dids_test;

use serde_json::json;

use crate::net::types::{DidStatus, EnhancedDid, RevokeDidRequest};

/// DID methods offered by the create form.
pub const DID_METHODS: &[&str] = &["key", "web", "ethr", "ion"];
/// Networks offered by the create form.
pub const DID_NETWORKS: &[&str] = &["mainnet", "testnet", "sepolia"];

/// DID list state for the panel.
#[derive(Clone, Debug, Default)]
pub struct DidsState {
    pub items: Vec<EnhancedDid>,
    pub loading: bool,
    pub loaded: bool,
    pub create_pending: bool,
    /// DID currently being revoked, if any.
    pub revoke_pending: Option<String>,
    pub error: Option<String>,
}

impl DidsState {
    pub fn apply_list(&mut self, result: Result<Vec<EnhancedDid>, String>) {
        self.loading = false;
        self.loaded = true;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
    }

    pub fn apply_created(&mut self, did: EnhancedDid) {
        self.create_pending = false;
        self.error = None;
        self.items.insert(0, did);
    }

    /// Mark `id` revoked. Only `status` changes; returns `false` if `id` is unknown.
    pub fn apply_revoked(&mut self, id: &str) -> bool {
        self.revoke_pending = None;
        match self.items.iter_mut().find(|d| d.id == id) {
            Some(did) => {
                did.status = DidStatus::Revoked;
                true
            }
            None => false,
        }
    }

    /// Surface a single error string and clear any pending flags.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.create_pending = false;
        self.revoke_pending = None;
        self.error = Some(message.into());
    }

    /// `(active, revoked, suspended)` counts.
    pub fn status_counts(&self) -> (usize, usize, usize) {
        self.items.iter().fold((0, 0, 0), |(a, r, s), did| match did.status {
            DidStatus::Active => (a + 1, r, s),
            DidStatus::Revoked => (a, r + 1, s),
            DidStatus::Suspended => (a, r, s + 1),
        })
    }
}

// =============================================================
// Create form
// =============================================================

/// Create-DID form fields as typed by the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateDidForm {
    pub method: String,
    pub network: String,
    pub name: String,
    pub description: String,
    pub author: String,
    pub contact_email: String,
    /// Comma-separated.
    pub tags: String,
    pub consent_data_processing: bool,
    pub consent_research: bool,
    pub consent_sharing: bool,
    /// Names of the files currently selected in the file input.
    pub file_names: Vec<String>,
}

impl Default for CreateDidForm {
    fn default() -> Self {
        Self {
            method: DID_METHODS[0].to_owned(),
            network: DID_NETWORKS[0].to_owned(),
            name: String::new(),
            description: String::new(),
            author: String::new(),
            contact_email: String::new(),
            tags: String::new(),
            consent_data_processing: true,
            consent_research: false,
            consent_sharing: false,
            file_names: Vec::new(),
        }
    }
}

/// Multipart body fields for `POST /api/enhanced-did/create` (files excluded).
#[derive(Clone, Debug, PartialEq)]
pub struct CreateDidPayload {
    pub method: String,
    pub network: String,
    pub metadata: serde_json::Value,
    pub gdpr_consent: serde_json::Value,
}

impl CreateDidForm {
    /// Labels of required fields that are still blank.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("description", &self.description),
            ("author", &self.author),
            ("contact email", &self.contact_email),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect()
    }

    /// Submit stays disabled until every required field is filled.
    pub fn can_submit(&self) -> bool {
        self.missing_required_fields().is_empty()
    }

    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_owned)
            .collect()
    }

    pub fn consent_purposes(&self) -> Vec<&'static str> {
        let mut purposes = Vec::new();
        if self.consent_data_processing {
            purposes.push("dataProcessing");
        }
        if self.consent_research {
            purposes.push("research");
        }
        if self.consent_sharing {
            purposes.push("sharing");
        }
        purposes
    }

    pub fn to_payload(&self) -> CreateDidPayload {
        CreateDidPayload {
            method: self.method.clone(),
            network: self.network.clone(),
            metadata: json!({
                "name": self.name.trim(),
                "description": self.description.trim(),
                "author": self.author.trim(),
                "contactEmail": self.contact_email.trim(),
                "tags": self.tag_list(),
            }),
            gdpr_consent: json!({
                "dataProcessing": self.consent_data_processing,
                "research": self.consent_research,
                "sharing": self.consent_sharing,
                "purposes": self.consent_purposes(),
            }),
        }
    }
}

// =============================================================
// Revoke form
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevokeDidForm {
    pub reason: String,
    pub user_consent: bool,
    pub remove_from_storage: bool,
}

impl RevokeDidForm {
    pub fn can_submit(&self) -> bool {
        !self.reason.trim().is_empty()
    }

    pub fn to_request(&self) -> RevokeDidRequest {
        RevokeDidRequest {
            reason: self.reason.trim().to_owned(),
            user_consent: self.user_consent,
            remove_from_storage: self.remove_from_storage,
        }
    }
}
