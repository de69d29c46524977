//! Identity panel: list, create and revoke DIDs.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list is fetched once per session on first visit and kept in the
//! shared `DidsState`; create and revoke patch it locally instead of
//! refetching.

use leptos::prelude::*;

use crate::components::create_did_dialog::CreateDidDialog;
use crate::components::did_card::DidCard;
use crate::components::error_banner::ErrorBanner;
use crate::components::loading::LoadingSpinner;
use crate::components::revoke_did_dialog::RevokeDidDialog;
use crate::state::dids::DidsState;

/// Fetch the DID list unless it is already loaded or in flight.
pub fn load_dids(dids: RwSignal<DidsState>) {
    let should_load = dids.with_untracked(|s| !s.loaded && !s.loading);
    if !should_load {
        return;
    }
    dids.update(|s| s.loading = true);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::list_dids().await;
            if let Err(e) = &result {
                leptos::logging::warn!("DID list failed: {e}");
            }
            dids.update(|s| s.apply_list(result));
        });
    }
}

#[component]
pub fn DidsPage() -> impl IntoView {
    let dids = expect_context::<RwSignal<DidsState>>();
    load_dids(dids);

    let show_create = RwSignal::new(false);
    let revoke_target = RwSignal::new(None::<String>);

    let on_create_cancel = Callback::new(move |()| show_create.set(false));
    let on_revoke_request = Callback::new(move |id: String| revoke_target.set(Some(id)));
    let on_revoke_close = Callback::new(move |()| revoke_target.set(None));
    let on_error_dismiss = Callback::new(move |()| dids.update(|s| s.error = None));
    let on_retry = move |_| {
        dids.update(|s| s.loaded = false);
        load_dids(dids);
    };

    view! {
        <section class="panel dids-page">
            <header class="panel__header">
                <h1>"Identities"</h1>
                <span class="panel__spacer"></span>
                <button class="btn" on:click=on_retry title="Reload list">
                    "Refresh"
                </button>
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "+ New DID"
                </button>
            </header>

            {move || {
                dids.get()
                    .error
                    .map(|message| view! { <ErrorBanner message=message on_dismiss=on_error_dismiss/> })
            }}

            <Show when=move || !dids.get().loading fallback=|| view! { <LoadingSpinner label="Loading identities..."/> }>
                <Show
                    when=move || !dids.with(|s| s.items.is_empty())
                    fallback=|| view! { <p class="panel__empty">"No DIDs yet. Create one to get started."</p> }
                >
                    <div class="card-grid">
                        <For
                            each=move || dids.get().items
                            key=|did| (did.id.clone(), did.status)
                            children=move |did| view! { <DidCard did=did on_revoke=on_revoke_request/> }
                        />
                    </div>
                </Show>
            </Show>

            <Show when=move || show_create.get()>
                <CreateDidDialog on_cancel=on_create_cancel/>
            </Show>
            {move || {
                revoke_target.get().map(|did| view! { <RevokeDidDialog did=did on_close=on_revoke_close/> })
            }}
        </section>
    }
}
