//! Landing page: counts from each panel plus the Dataverse probe.

use leptos::prelude::*;

use crate::pages::datasets::load_datasets;
use crate::pages::dids::load_dids;
use crate::state::consent::ConsentState;
use crate::state::datasets::{DatasetSource, DatasetsState};
use crate::state::dids::DidsState;
use crate::state::workflow::{FLOW_STEPS, WorkflowState};

#[component]
pub fn OverviewPage() -> impl IntoView {
    let dids = expect_context::<RwSignal<DidsState>>();
    let datasets = expect_context::<RwSignal<DatasetsState>>();
    let consent = expect_context::<RwSignal<ConsentState>>();
    let workflow = expect_context::<RwSignal<WorkflowState>>();
    load_dids(dids);
    load_datasets(datasets);

    let did_counts = move || dids.with(DidsState::status_counts);
    let dataverse_label = move || {
        datasets.with(|s| match (&s.status, s.source) {
            (Some(status), _) if status.reachable => "reachable",
            (_, DatasetSource::Fallback) => "offline (sample data)",
            (Some(_), _) => "unreachable",
            (None, _) => "checking",
        })
    };

    view! {
        <section class="panel overview-page">
            <header class="panel__header">
                <h1>"Overview"</h1>
            </header>
            <div class="stat-grid">
                <a class="stat-card" href="/dids">
                    <span class="stat-card__label">"Active DIDs"</span>
                    <span class="stat-card__value">{move || did_counts().0}</span>
                    <span class="stat-card__detail">
                        {move || {
                            let (_, revoked, suspended) = did_counts();
                            format!("{revoked} revoked · {suspended} suspended")
                        }}
                    </span>
                </a>
                <a class="stat-card" href="/datasets">
                    <span class="stat-card__label">"Datasets"</span>
                    <span class="stat-card__value">{move || datasets.with(|s| s.items.len())}</span>
                    <span class="stat-card__detail">{move || format!("Dataverse {}", dataverse_label())}</span>
                </a>
                <a class="stat-card" href="/consent">
                    <span class="stat-card__label">"Consents granted"</span>
                    <span class="stat-card__value">
                        {move || {
                            let (granted, total) = consent.with(ConsentState::summary);
                            format!("{granted}/{total}")
                        }}
                    </span>
                </a>
                <a class="stat-card" href="/workflow">
                    <span class="stat-card__label">"Workflow"</span>
                    <span class="stat-card__value">
                        {move || format!("{}/{}", workflow.with(|w| w.active_index) + 1, FLOW_STEPS.len())}
                    </span>
                    <span class="stat-card__detail">{move || workflow.with(|w| w.active_step().title)}</span>
                </a>
            </div>
            <Show when=move || dids.with(|s| s.error.is_some())>
                <p class="panel__note">"Identity backend reported an error; see the Identities page."</p>
            </Show>
        </section>
    }
}
