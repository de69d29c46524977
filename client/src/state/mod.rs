//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by panel (`dids`, `datasets`, `consent`, `workflow`) plus
//! the cross-cutting `search` overlay and `ui` chrome, so each component
//! depends on a small focused model provided through Leptos context.

pub mod consent;
pub mod datasets;
pub mod dids;
pub mod search;
pub mod ui;
pub mod workflow;
