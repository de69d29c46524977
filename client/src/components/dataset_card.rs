//! Card for one Dataverse dataset, with the simulated "link to DID" action.

use leptos::prelude::*;

use crate::net::types::DataverseDataset;
use crate::state::datasets::{DatasetsState, LINK_DELAY_MS};
use crate::util::format::{date_part, join_or_dash};

#[component]
pub fn DatasetCard(dataset: DataverseDataset) -> impl IntoView {
    let datasets = expect_context::<RwSignal<DatasetsState>>();
    let pid = dataset.persistent_id.clone();

    let linked = {
        let pid = pid.clone();
        move || datasets.with(|s| s.items.iter().any(|d| d.persistent_id == pid && d.did_linked))
    };
    let linking = {
        let pid = pid.clone();
        move || datasets.with(|s| s.is_linking(&pid))
    };

    let on_link = move |_| {
        let started = datasets.try_update(|s| s.begin_link(&pid)).unwrap_or(false);
        if !started {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let pid = pid.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(LINK_DELAY_MS)).await;
                datasets.update(|s| s.complete_link(&pid));
                leptos::logging::log!("linked dataset {pid}");
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = LINK_DELAY_MS;
        }
    };

    let button_label = {
        let linked = linked.clone();
        let linking = linking.clone();
        move || {
            if linked() {
                "Linked"
            } else if linking() {
                "Linking..."
            } else {
                "Link to DID"
            }
        }
    };
    let disabled = move || linked() || linking();

    view! {
        <article class="dataset-card">
            <header class="dataset-card__header">
                <h3 class="dataset-card__title">
                    <a href=dataset.url.clone() target="_blank" rel="noopener">
                        {dataset.title.clone()}
                    </a>
                </h3>
                <span class="dataset-card__pid">{dataset.persistent_id.clone()}</span>
            </header>
            <p class="dataset-card__description">{dataset.description.clone()}</p>
            <dl class="dataset-card__meta">
                <dt>"Authors"</dt>
                <dd>{join_or_dash(&dataset.authors)}</dd>
                <dt>"Published"</dt>
                <dd>{date_part(&dataset.published_at).to_owned()}</dd>
                <dt>"Subjects"</dt>
                <dd>{join_or_dash(&dataset.subjects)}</dd>
            </dl>
            <button class="btn btn--primary" disabled=disabled on:click=on_link>
                {button_label}
            </button>
        </article>
    }
}
