//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and panel content while reading/writing
//! shared state from Leptos context providers. Network calls live in `net`;
//! components only spawn them and fold results back into state.

pub mod consent_row;
pub mod create_did_dialog;
pub mod dataset_card;
pub mod did_card;
pub mod error_banner;
pub mod flow_step;
pub mod loading;
pub mod nav_bar;
pub mod revoke_did_dialog;
pub mod search_overlay;
pub mod user_menu;
