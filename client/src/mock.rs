//! Local sample records used when the backend has nothing to show.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dataset panel falls back to `fallback_datasets` when Dataverse is
//! unreachable, the search overlay indexes `mock_dids` when no live DIDs are
//! loaded, and the consent console renders `consent_records` as-is.

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

use crate::net::types::{
    ComplianceInfo, ConsentInfo, ConsentRecord, DataverseDataset, DealId, DidMetadata, DidStatus, EnhancedDid, StorageInfo,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// Sample identity records for the search index.
pub fn mock_dids() -> Vec<EnhancedDid> {
    vec![
        EnhancedDid {
            id: "did:key:z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK".to_owned(),
            method: "key".to_owned(),
            network: "mainnet".to_owned(),
            status: DidStatus::Active,
            created_at: "2024-02-11T09:30:00Z".to_owned(),
            metadata: DidMetadata {
                name: "Research Data Steward".to_owned(),
                description: "Signing identity for the university research data office".to_owned(),
                author: "Research Data Office".to_owned(),
                contact_email: "rdo@example.edu".to_owned(),
                tags: strings(&["research", "steward", "university"]),
            },
            storage: Some(StorageInfo {
                provider: "filecoin".to_owned(),
                cid: Some("bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi".to_owned()),
                deal_id: Some(DealId::Number(482_113)),
                replication: Some(3),
            }),
            consent: Some(ConsentInfo {
                purposes: strings(&["research", "publication"]),
                granted_at: "2024-02-11T09:30:00Z".to_owned(),
                expires_at: None,
            }),
            compliance: Some(ComplianceInfo {
                gdpr_compliant: true,
                data_residency: Some("EU".to_owned()),
                retention_days: Some(3650),
            }),
            ..EnhancedDid::default()
        },
        EnhancedDid {
            id: "did:web:iwi-archive.example.nz".to_owned(),
            method: "web".to_owned(),
            network: "mainnet".to_owned(),
            status: DidStatus::Active,
            created_at: "2024-04-02T21:15:00Z".to_owned(),
            metadata: DidMetadata {
                name: "Iwi Archive Custodian".to_owned(),
                description: "Community custodian identity governing indigenous data sovereignty".to_owned(),
                author: "Archive Trust Board".to_owned(),
                contact_email: "kaitiaki@iwi-archive.example.nz".to_owned(),
                tags: strings(&["indigenous", "sovereignty", "archive"]),
            },
            storage: Some(StorageInfo {
                provider: "ipfs".to_owned(),
                cid: Some("bafkreihdwdcefgh4dqkjv67uzcmw7ojee6xedzdetojuzjevtenxquvyku".to_owned()),
                deal_id: None,
                replication: Some(2),
            }),
            compliance: Some(ComplianceInfo {
                gdpr_compliant: true,
                data_residency: Some("NZ".to_owned()),
                retention_days: None,
            }),
            ..EnhancedDid::default()
        },
        EnhancedDid {
            id: "did:ethr:sepolia:0x3b0bc51ab9de1e5b7b6e34e5b960285805c41736".to_owned(),
            method: "ethr".to_owned(),
            network: "sepolia".to_owned(),
            status: DidStatus::Suspended,
            created_at: "2023-11-20T14:00:00Z".to_owned(),
            updated_at: Some("2024-05-01T08:00:00Z".to_owned()),
            metadata: DidMetadata {
                name: "Sensor Fleet Gateway".to_owned(),
                description: "Field sensor gateway pending key rotation".to_owned(),
                author: "Environmental Monitoring Lab".to_owned(),
                contact_email: "sensors@example.org".to_owned(),
                tags: strings(&["iot", "environment"]),
            },
            ..EnhancedDid::default()
        },
        EnhancedDid {
            id: "did:key:z6MkpTHR8VNsBxYAAWHut2Geadd9jSwuBV8xRoAnwWsdvktH".to_owned(),
            method: "key".to_owned(),
            network: "testnet".to_owned(),
            status: DidStatus::Revoked,
            created_at: "2023-06-05T12:45:00Z".to_owned(),
            updated_at: Some("2024-01-15T10:10:00Z".to_owned()),
            metadata: DidMetadata {
                name: "Legacy Survey Signer".to_owned(),
                description: "Retired signer for the 2023 household survey".to_owned(),
                author: "Survey Unit".to_owned(),
                contact_email: "survey@example.org".to_owned(),
                tags: strings(&["survey", "legacy"]),
            },
            ..EnhancedDid::default()
        },
    ]
}

/// Datasets shown when the Dataverse fetch fails.
pub fn fallback_datasets() -> Vec<DataverseDataset> {
    vec![
        DataverseDataset {
            persistent_id: "doi:10.7910/DVN/MAORI01".to_owned(),
            title: "Māori Traditional Knowledge Archive".to_owned(),
            authors: strings(&["Te Rōpū Mātauranga", "Hēmi Walker"]),
            description: "Oral histories, place names and ecological knowledge recorded with iwi consent."
                .to_owned(),
            published_at: "2024-03-18".to_owned(),
            subjects: strings(&["Social Sciences", "Indigenous Knowledge"]),
            url: "https://dataverse.harvard.edu/dataset.xhtml?persistentId=doi:10.7910/DVN/MAORI01".to_owned(),
            did_linked: true,
        },
        DataverseDataset {
            persistent_id: "doi:10.7910/DVN/CLIM22".to_owned(),
            title: "Pacific Coastal Climate Observations 2010-2022".to_owned(),
            authors: strings(&["Pacific Climate Consortium"]),
            description: "Daily sea level, temperature and rainfall readings from 48 coastal stations.".to_owned(),
            published_at: "2023-12-04".to_owned(),
            subjects: strings(&["Earth and Environmental Sciences"]),
            url: "https://dataverse.harvard.edu/dataset.xhtml?persistentId=doi:10.7910/DVN/CLIM22".to_owned(),
            did_linked: false,
        },
        DataverseDataset {
            persistent_id: "doi:10.7910/DVN/HLTH19".to_owned(),
            title: "Community Health Survey Microdata".to_owned(),
            authors: strings(&["Survey Unit", "J. Okafor"]),
            description: "De-identified household health survey responses with consent metadata.".to_owned(),
            published_at: "2023-09-27".to_owned(),
            subjects: strings(&["Medicine, Health and Life Sciences"]),
            url: "https://dataverse.harvard.edu/dataset.xhtml?persistentId=doi:10.7910/DVN/HLTH19".to_owned(),
            did_linked: false,
        },
        DataverseDataset {
            persistent_id: "doi:10.7910/DVN/LANG07".to_owned(),
            title: "Endangered Languages Audio Corpus".to_owned(),
            authors: strings(&["Linguistics Field School"]),
            description: "Annotated recordings of speakers of twelve endangered languages.".to_owned(),
            published_at: "2023-07-11".to_owned(),
            subjects: strings(&["Arts and Humanities", "Linguistics"]),
            url: "https://dataverse.harvard.edu/dataset.xhtml?persistentId=doi:10.7910/DVN/LANG07".to_owned(),
            did_linked: false,
        },
    ]
}

/// Consent entries rendered by the GDPR console.
pub fn consent_records() -> Vec<ConsentRecord> {
    vec![
        ConsentRecord {
            id: "consent-processing".to_owned(),
            purpose: "Data processing".to_owned(),
            description: "Process identity metadata to issue and resolve DIDs.".to_owned(),
            granted: true,
            timestamp: "2024-02-11T09:30:00Z".to_owned(),
            data_types: strings(&["name", "email", "public keys"]),
        },
        ConsentRecord {
            id: "consent-research".to_owned(),
            purpose: "Research use".to_owned(),
            description: "Allow linked datasets to be cited in approved research.".to_owned(),
            granted: true,
            timestamp: "2024-02-11T09:31:00Z".to_owned(),
            data_types: strings(&["dataset metadata", "usage statistics"]),
        },
        ConsentRecord {
            id: "consent-sharing".to_owned(),
            purpose: "Third-party sharing".to_owned(),
            description: "Share DID documents with partner repositories.".to_owned(),
            granted: false,
            timestamp: "2024-03-02T16:05:00Z".to_owned(),
            data_types: strings(&["DID document", "storage receipts"]),
        },
        ConsentRecord {
            id: "consent-storage".to_owned(),
            purpose: "Decentralized storage".to_owned(),
            description: "Pin attachments to Filecoin/IPFS storage providers.".to_owned(),
            granted: true,
            timestamp: "2024-02-11T09:32:00Z".to_owned(),
            data_types: strings(&["attachments", "content identifiers"]),
        },
        ConsentRecord {
            id: "consent-analytics".to_owned(),
            purpose: "Analytics".to_owned(),
            description: "Aggregate usage metrics for service improvement.".to_owned(),
            granted: false,
            timestamp: "2024-01-20T11:00:00Z".to_owned(),
            data_types: strings(&["page views", "feature usage"]),
        },
    ]
}
