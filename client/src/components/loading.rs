//! Loading indicator.

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner(#[prop(default = "Loading...")] label: &'static str) -> impl IntoView {
    view! {
        <div class="loading" role="status" aria-live="polite">
            <span class="loading__spinner" aria-hidden="true"></span>
            <span class="loading__label">{label}</span>
        </div>
    }
}
