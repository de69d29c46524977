//! Modal form for creating a DID.
//!
//! Submit stays disabled until name, description, author and contact email
//! are filled. The request goes out as multipart so selected files travel
//! with the metadata.

use leptos::prelude::*;

use crate::state::dids::{CreateDidForm, DID_METHODS, DID_NETWORKS, DidsState};

#[component]
pub fn CreateDidDialog(on_cancel: Callback<()>) -> impl IntoView {
    let dids = expect_context::<RwSignal<DidsState>>();
    let form = RwSignal::new(CreateDidForm::default());
    let file_input = NodeRef::<leptos::html::Input>::new();

    let missing = move || form.with(CreateDidForm::missing_required_fields);
    let submit_disabled = move || !form.with(CreateDidForm::can_submit) || dids.get().create_pending;

    let on_files_changed = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let names = file_input
                .get_untracked()
                .and_then(|input| input.files())
                .map(|list| (0..list.length()).filter_map(|i| list.get(i)).map(|f| f.name()).collect())
                .unwrap_or_default();
            form.update(|f| f.file_names = names);
        }
    };

    let submit = Callback::new(move |()| {
        let current = form.get_untracked();
        if !current.can_submit() || dids.get_untracked().create_pending {
            return;
        }
        dids.update(|s| {
            s.create_pending = true;
            s.error = None;
        });

        #[cfg(feature = "hydrate")]
        {
            let files: Vec<web_sys::File> = file_input
                .get_untracked()
                .and_then(|input| input.files())
                .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
                .unwrap_or_default();
            let payload = current.to_payload();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_did(&payload, &files).await {
                    Ok(did) => {
                        leptos::logging::log!("created {}", did.id);
                        dids.update(|s| s.apply_created(did));
                        on_cancel.run(());
                    }
                    Err(e) => dids.update(|s| s.fail(format!("Create failed: {e}"))),
                }
            });
        }
    });

    let text_field = move |label: &'static str, get: fn(&CreateDidForm) -> String, set: fn(&mut CreateDidForm, String)| {
        view! {
            <label class="dialog__label">
                {label}
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || form.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| set(f, value));
                    }
                />
            </label>
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create DID"</h2>
                <div class="dialog__row">
                    <label class="dialog__label">
                        "Method"
                        <select
                            class="dialog__input"
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.method = value);
                            }
                        >
                            {DID_METHODS
                                .iter()
                                .map(|m| {
                                    view! {
                                        <option value=*m selected=move || form.with(|f| f.method == *m)>
                                            {format!("did:{m}")}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="dialog__label">
                        "Network"
                        <select
                            class="dialog__input"
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.network = value);
                            }
                        >
                            {DID_NETWORKS
                                .iter()
                                .map(|n| {
                                    view! {
                                        <option value=*n selected=move || form.with(|f| f.network == *n)>
                                            {*n}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                </div>
                {text_field("Name", |f| f.name.clone(), |f, v| f.name = v)}
                {text_field("Description", |f| f.description.clone(), |f, v| f.description = v)}
                {text_field("Author", |f| f.author.clone(), |f, v| f.author = v)}
                {text_field("Contact email", |f| f.contact_email.clone(), |f, v| f.contact_email = v)}
                {text_field("Tags (comma separated)", |f| f.tags.clone(), |f, v| f.tags = v)}
                <fieldset class="dialog__fieldset">
                    <legend>"GDPR consent"</legend>
                    <ConsentToggle
                        label="Data processing"
                        checked=Signal::derive(move || form.with(|f| f.consent_data_processing))
                        on_change=Callback::new(move |v| form.update(|f| f.consent_data_processing = v))
                    />
                    <ConsentToggle
                        label="Research use"
                        checked=Signal::derive(move || form.with(|f| f.consent_research))
                        on_change=Callback::new(move |v| form.update(|f| f.consent_research = v))
                    />
                    <ConsentToggle
                        label="Third-party sharing"
                        checked=Signal::derive(move || form.with(|f| f.consent_sharing))
                        on_change=Callback::new(move |v| form.update(|f| f.consent_sharing = v))
                    />
                </fieldset>
                <label class="dialog__label">
                    "Attachments"
                    <input class="dialog__input" type="file" multiple=true node_ref=file_input on:change=on_files_changed/>
                </label>
                <Show when=move || !form.with(|f| f.file_names.is_empty())>
                    <p class="dialog__hint">{move || form.with(|f| f.file_names.join(", "))}</p>
                </Show>
                <Show when=move || !missing().is_empty()>
                    <p class="dialog__hint">{move || format!("Required: {}", missing().join(", "))}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=submit_disabled on:click=move |_| submit.run(())>
                        {move || if dids.get().create_pending { "Creating..." } else { "Create" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ConsentToggle(label: &'static str, checked: Signal<bool>, on_change: Callback<bool>) -> impl IntoView {
    view! {
        <label class="dialog__check">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            {label}
        </label>
    }
}
