//! GDPR consent console.

use leptos::prelude::*;

use crate::components::consent_row::ConsentRow;
use crate::state::consent::{ACTIONS_NOTE, ConsentState};

#[component]
pub fn ConsentPage() -> impl IntoView {
    let consent = expect_context::<RwSignal<ConsentState>>();

    let summary = move || {
        let (granted, total) = consent.with(ConsentState::summary);
        format!("{granted} of {total} purposes granted")
    };

    view! {
        <section class="panel consent-page">
            <header class="panel__header">
                <h1>"Consent"</h1>
                <span class="panel__status">{summary}</span>
            </header>
            <p class="panel__note">{ACTIONS_NOTE}</p>
            <table class="consent-table">
                <thead>
                    <tr>
                        <th>"Purpose"</th>
                        <th>"Status"</th>
                        <th>"Updated"</th>
                        <th>"Data"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || consent.get().records
                        key=|r| r.id.clone()
                        children=|record| view! { <ConsentRow record=record/> }
                    />
                </tbody>
            </table>
        </section>
    }
}
