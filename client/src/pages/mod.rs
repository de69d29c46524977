//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetch on mount, timers) and
//! delegates rendering details to `components`.

pub mod consent;
pub mod datasets;
pub mod dids;
pub mod overview;
pub mod workflow;

use crate::state::search::PageDescriptor;

/// Navigable pages, in nav-bar order. Also indexed by the search overlay.
pub const PAGES: &[PageDescriptor] = &[
    PageDescriptor {
        path: "/",
        title: "Overview",
        description: "Identity, dataset and consent summary",
        keywords: &["dashboard", "home", "summary"],
    },
    PageDescriptor {
        path: "/dids",
        title: "Identities",
        description: "Create, inspect and revoke decentralized identifiers",
        keywords: &["did", "identity", "revoke", "create", "filecoin"],
    },
    PageDescriptor {
        path: "/datasets",
        title: "Datasets",
        description: "Dataverse datasets linked to identities",
        keywords: &["dataverse", "research data", "doi", "link"],
    },
    PageDescriptor {
        path: "/consent",
        title: "Consent",
        description: "GDPR consent records and data-subject actions",
        keywords: &["gdpr", "privacy", "consent", "export"],
    },
    PageDescriptor {
        path: "/workflow",
        title: "Workflow",
        description: "Provisioning pipeline and agent task progress",
        keywords: &["pipeline", "agents", "steps"],
    },
];
