//! Networking modules for the dashboard's REST calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` talks to the enhanced-DID backend, `dataverse` reads the dataset
//! repository through the host server, and `types` defines the shared wire
//! schema.

pub mod api;
pub mod dataverse;
pub mod types;
