//! Global search overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opened from the nav bar or keyboard shortcut. Each keystroke hands
//! `SearchState` a new ticket; the debounce timer only runs the search if
//! its ticket is still current when it fires, so just the last keystroke in
//! a 300ms window searches and no stale result can land late.

#[cfg(test)]
#[path = "search_overlay_test.rs"]
mod search_overlay_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::mock::{fallback_datasets, mock_dids};
use crate::net::types::{DataverseDataset, EnhancedDid};
use crate::pages::PAGES;
use crate::state::datasets::DatasetsState;
use crate::state::dids::DidsState;
use crate::state::search::{SearchPhase, SearchResult, SearchSources, SearchState, search};
use crate::state::ui::UiState;

/// Run `query` against whatever the panels currently hold.
///
/// Panels that have nothing loaded yet contribute their sample records, so
/// the overlay is useful before any page has fetched.
fn search_dashboard(query: &str, dids: &[EnhancedDid], datasets: &[DataverseDataset]) -> Vec<SearchResult> {
    let mock_identities;
    let identities = if dids.is_empty() {
        mock_identities = mock_dids();
        mock_identities.as_slice()
    } else {
        dids
    };
    let mock_datasets;
    let datasets = if datasets.is_empty() {
        mock_datasets = fallback_datasets();
        mock_datasets.as_slice()
    } else {
        datasets
    };
    search(query, &SearchSources { identities, datasets, pages: PAGES })
}

/// Debounce elapsed for `ticket`: search if still current, then persist recents.
fn run_ticket(
    ticket: u64,
    search_state: RwSignal<SearchState>,
    dids: RwSignal<DidsState>,
    datasets: RwSignal<DatasetsState>,
) {
    let mut started = false;
    search_state.update(|s| started = s.begin(ticket));
    if !started {
        return;
    }
    let query = search_state.with_untracked(|s| s.query.clone());
    let results = dids.with_untracked(|d| datasets.with_untracked(|ds| search_dashboard(&query, &d.items, &ds.items)));
    let mut applied = false;
    search_state.update(|s| applied = s.finish(ticket, results));
    if applied {
        search_state.with_untracked(|s| crate::util::storage::save_recent_searches(&s.recent));
    }
}

fn schedule(ticket: u64, search_state: RwSignal<SearchState>, dids: RwSignal<DidsState>, datasets: RwSignal<DatasetsState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(crate::state::search::DEBOUNCE_MS)).await;
        run_ticket(ticket, search_state, dids, datasets);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ticket, search_state, dids, datasets);
    }
}

#[component]
pub fn SearchOverlay() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let search_state = expect_context::<RwSignal<SearchState>>();
    let dids = expect_context::<RwSignal<DidsState>>();
    let datasets = expect_context::<RwSignal<DatasetsState>>();

    // Reload persisted recents each time the overlay opens.
    Effect::new(move || {
        if !ui.get().search_open {
            return;
        }
        let recent = crate::util::storage::load_recent_searches();
        search_state.update(|s| s.recent = recent);
    });

    let set_query = move |query: String| {
        let mut ticket = None;
        search_state.update(|s| ticket = s.input(&query));
        if let Some(ticket) = ticket {
            schedule(ticket, search_state, dids, datasets);
        }
    };

    let close = move || {
        ui.update(|u| u.search_open = false);
        search_state.update(SearchState::clear);
    };

    let on_close = Callback::new(move |()| close());

    view! {
        <Show when=move || ui.get().search_open>
            <div class="dialog-backdrop search-overlay" on:click=move |_| close()>
                <div class="dialog search-overlay__panel" on:click=move |ev| ev.stop_propagation()>
                    <input
                        class="dialog__input search-overlay__input"
                        type="search"
                        placeholder="Search identities, datasets, pages..."
                        autofocus=true
                        prop:value=move || search_state.get().query
                        on:input=move |ev| set_query(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Escape" {
                                ev.prevent_default();
                                close();
                            }
                        }
                    />
                    {move || {
                        let state = search_state.get();
                        match state.phase {
                            SearchPhase::Idle => {
                                view! { <RecentSearches recent=state.recent on_pick=Callback::new(set_query)/> }
                                    .into_any()
                            }
                            SearchPhase::Debouncing | SearchPhase::Searching => {
                                view! { <p class="search-overlay__status">"Searching..."</p> }.into_any()
                            }
                            SearchPhase::Empty => {
                                view! {
                                    <p class="search-overlay__status">
                                        {format!("No results for \"{}\"", state.query.trim())}
                                    </p>
                                }
                                    .into_any()
                            }
                            SearchPhase::Results => {
                                view! { <ResultList results=state.results on_open=on_close/> }.into_any()
                            }
                        }
                    }}
                </div>
            </div>
        </Show>
    }
}

#[component]
fn ResultList(results: Vec<SearchResult>, on_open: Callback<()>) -> impl IntoView {
    view! {
        <ul class="search-overlay__results">
            {results
                .into_iter()
                .map(|r| {
                    view! {
                        <li>
                            <a class="search-overlay__result" href=r.href on:click=move |_| on_open.run(())>
                                <span class="search-overlay__kind">{r.kind.label()}</span>
                                <span class="search-overlay__title">{r.title}</span>
                                <span class="search-overlay__subtitle">{r.subtitle}</span>
                            </a>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}

#[component]
fn RecentSearches(recent: Vec<String>, on_pick: Callback<String>) -> impl IntoView {
    if recent.is_empty() {
        return view! { <p class="search-overlay__status">"Type to search."</p> }.into_any();
    }
    view! {
        <div class="search-overlay__recent">
            <p class="search-overlay__heading">"Recent searches"</p>
            <ul>
                {recent
                    .into_iter()
                    .map(|q| {
                        let pick = q.clone();
                        view! {
                            <li>
                                <button class="search-overlay__recent-item" on:click=move |_| on_pick.run(pick.clone())>
                                    {q}
                                </button>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
    .into_any()
}
