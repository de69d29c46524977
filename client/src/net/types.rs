//! Shared wire DTOs for the dashboard/server boundary.
//!
//! DESIGN
//! ======
//! Records are populated wholesale from backend JSON (camelCase). The client
//! never derives fields locally; unknown backend fields are kept in `extra`
//! so a local status patch re-serializes everything else unchanged.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Lifecycle status of a DID as reported by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DidStatus {
    #[default]
    Active,
    Revoked,
    Suspended,
}

impl DidStatus {
    /// Lowercase wire/display label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Revoked => "revoked",
            Self::Suspended => "suspended",
        }
    }
}

/// A DID record with its attached metadata, storage, consent and compliance blobs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedDid {
    /// The DID string itself (e.g. `did:key:z6Mk...`).
    pub id: String,
    pub method: String,
    pub network: String,
    pub status: DidStatus,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub metadata: DidMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consent: Option<ConsentInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance: Option<ComplianceInfo>,
    /// Backend fields this client does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DidMetadata {
    pub name: String,
    pub description: String,
    pub author: String,
    pub contact_email: String,
    pub tags: Vec<String>,
}

/// Where the DID document and attachments were pinned.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageInfo {
    #[serde(default)]
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deal_id: Option<DealId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replication: Option<u32>,
}

/// Filecoin deal id. Backends report it either as a number or as a string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DealId {
    Number(u64),
    Text(String),
}

impl std::fmt::Display for DealId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentInfo {
    #[serde(default)]
    pub purposes: Vec<String>,
    #[serde(default)]
    pub granted_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceInfo {
    #[serde(default)]
    pub gdpr_compliant: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_residency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention_days: Option<u32>,
}

/// A GDPR consent entry shown in the consent console.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentRecord {
    pub id: String,
    pub purpose: String,
    pub description: String,
    pub granted: bool,
    pub timestamp: String,
    pub data_types: Vec<String>,
}

/// A dataset listed by the Dataverse repository.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataverseDataset {
    /// Persistent identifier, usually a `doi:` string.
    pub persistent_id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub description: String,
    pub published_at: String,
    pub subjects: Vec<String>,
    pub url: String,
    pub did_linked: bool,
}

/// Result of the Dataverse connectivity probe.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataverseStatus {
    pub reachable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub base_url: String,
}

// =============================================================
// Envelopes
// =============================================================

/// `GET /api/enhanced-did/list` response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListDidsResponse {
    pub success: bool,
    #[serde(default)]
    pub dids: Vec<EnhancedDid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// `POST /api/enhanced-did/create` response.
///
/// Backends either wrap the record (`{ success, did }`) or return it bare.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreateDidResponse {
    Wrapped {
        success: bool,
        #[serde(default)]
        did: Option<EnhancedDid>,
        #[serde(default)]
        error: Option<String>,
    },
    Record(EnhancedDid),
}

impl CreateDidResponse {
    /// Resolve the envelope into the created record or an error message.
    ///
    /// # Errors
    ///
    /// Returns the backend error (or a generic message) when the backend
    /// reports failure or omits the record.
    pub fn into_result(self) -> Result<EnhancedDid, String> {
        match self {
            Self::Record(did) => Ok(did),
            Self::Wrapped { success: true, did: Some(did), .. } => Ok(did),
            Self::Wrapped { error, .. } => Err(error.unwrap_or_else(|| "DID creation failed".to_owned())),
        }
    }
}

/// `DELETE /api/enhanced-did/revoke/:id` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevokeDidRequest {
    pub reason: String,
    pub user_consent: bool,
    pub remove_from_storage: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevokeDidResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// `GET /api/dataverse/datasets/recent` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentDatasetsResponse {
    pub success: bool,
    #[serde(default)]
    pub datasets: Vec<DataverseDataset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Generic `{ success: false, error }` body returned by failing API routes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub success: bool,
    pub error: String,
}
