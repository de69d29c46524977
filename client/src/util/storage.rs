//! Browser `localStorage` helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes hydrate-only read/write so the search overlay and theme toggle
//! persist small JSON values without repeating web-sys glue. SSR and tests
//! compile these to no-ops.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::state::search::{RECENT_SEARCHES_KEY, normalize_recent};

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage()?.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        if let Err(e) = storage.set_item(key, &raw) {
            leptos::logging::warn!("localStorage write failed for {key}: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Recent search queries, sanitized (deduplicated, capped).
pub fn load_recent_searches() -> Vec<String> {
    load_json::<Vec<String>>(RECENT_SEARCHES_KEY)
        .map(normalize_recent)
        .unwrap_or_default()
}

pub fn save_recent_searches(recent: &[String]) {
    save_json(RECENT_SEARCHES_KEY, &recent);
}
