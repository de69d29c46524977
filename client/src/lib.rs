//! # did-console
//!
//! Leptos + WASM dashboard for managing decentralized identifiers: DID
//! create/revoke, Dataverse dataset display, a GDPR consent console, a
//! simulated provisioning workflow, and a global search overlay.
//!
//! Built with `hydrate` for the browser bundle and `ssr` for the host server;
//! with neither feature (unit tests) all browser glue compiles to no-ops.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod mock;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
