//! Dataverse panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Probes the server's Dataverse status and lists recent datasets. When the
//! listing fails the panel shows local sample datasets with a badge rather
//! than an error.

use leptos::prelude::*;

use crate::components::dataset_card::DatasetCard;
use crate::components::loading::LoadingSpinner;
use crate::state::datasets::{DatasetSource, DatasetsState};

/// Fetch status and recent datasets unless a fetch already happened.
pub fn load_datasets(datasets: RwSignal<DatasetsState>) {
    let should_load = datasets.with_untracked(|s| s.source == DatasetSource::None && !s.loading);
    if !should_load {
        return;
    }
    datasets.update(|s| s.loading = true);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let status = crate::net::dataverse::fetch_status().await;
            datasets.update(|s| s.apply_status(status));
            let result = crate::net::dataverse::fetch_recent_datasets(crate::net::dataverse::DEFAULT_RECENT_LIMIT).await;
            datasets.update(|s| s.apply_fetch(result));
        });
    }
}

#[component]
pub fn DatasetsPage() -> impl IntoView {
    let datasets = expect_context::<RwSignal<DatasetsState>>();
    load_datasets(datasets);

    let status_line = move || {
        datasets.with(|s| match &s.status {
            Some(status) if status.reachable => match &status.version {
                Some(version) => format!("Connected to {} (v{version})", status.base_url),
                None => format!("Connected to {}", status.base_url),
            },
            Some(_) => "Dataverse unreachable".to_owned(),
            None => "Checking Dataverse...".to_owned(),
        })
    };

    view! {
        <section class="panel datasets-page">
            <header class="panel__header">
                <h1>"Datasets"</h1>
                <span class="panel__status">{status_line}</span>
                <span class="panel__spacer"></span>
                <Show when=move || datasets.with(|s| s.source == DatasetSource::Fallback)>
                    <span class="badge badge--warning" title="Dataverse could not be reached">
                        "Sample data"
                    </span>
                </Show>
                <span class="panel__count">{move || format!("{} linked", datasets.with(DatasetsState::linked_count))}</span>
            </header>

            <Show when=move || !datasets.get().loading fallback=|| view! { <LoadingSpinner label="Loading datasets..."/> }>
                <Show
                    when=move || !datasets.with(|s| s.items.is_empty())
                    fallback=|| view! { <p class="panel__empty">"No datasets published yet."</p> }
                >
                    <div class="card-grid">
                        <For
                            each=move || datasets.get().items
                            key=|d| d.persistent_id.clone()
                            children=|dataset| view! { <DatasetCard dataset=dataset/> }
                        />
                    </div>
                </Show>
            </Show>
        </section>
    }
}
