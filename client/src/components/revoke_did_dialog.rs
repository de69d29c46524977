//! Revoke confirmation dialog.

use leptos::prelude::*;

use crate::state::dids::{DidsState, RevokeDidForm};
use crate::util::format::short_id;

/// Ask for a reason and the two revocation options, then revoke `did`.
#[component]
pub fn RevokeDidDialog(did: String, on_close: Callback<()>) -> impl IntoView {
    let dids = expect_context::<RwSignal<DidsState>>();
    let form = RwSignal::new(RevokeDidForm::default());
    let title = format!("Revoke {}", short_id(&did, 16, 6));

    let pending = move || dids.get().revoke_pending.is_some();
    let submit_disabled = move || !form.with(RevokeDidForm::can_submit) || pending();

    let submit = {
        let did = did.clone();
        move |_| {
            let request = form.get_untracked().to_request();
            if request.reason.is_empty() || dids.get_untracked().revoke_pending.is_some() {
                return;
            }
            dids.update(|s| {
                s.revoke_pending = Some(did.clone());
                s.error = None;
            });

            #[cfg(feature = "hydrate")]
            {
                let did = did.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::revoke_did(&did, &request).await {
                        Ok(()) => {
                            leptos::logging::log!("revoked {did}");
                            dids.update(|s| {
                                s.apply_revoked(&did);
                            });
                            on_close.run(());
                        }
                        Err(e) => dids.update(|s| s.fail(format!("Revoke failed: {e}"))),
                    }
                });
            }
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <p class="dialog__hint">"Revocation cannot be undone."</p>
                <label class="dialog__label">
                    "Reason"
                    <textarea
                        class="dialog__input"
                        rows="3"
                        prop:value=move || form.with(|f| f.reason.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.reason = value);
                        }
                    ></textarea>
                </label>
                <label class="dialog__check">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.user_consent)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            form.update(|f| f.user_consent = checked);
                        }
                    />
                    "Subject consents to revocation"
                </label>
                <label class="dialog__check">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.remove_from_storage)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            form.update(|f| f.remove_from_storage = checked);
                        }
                    />
                    "Remove stored documents"
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" disabled=submit_disabled on:click=submit>
                        {move || if pending() { "Revoking..." } else { "Revoke" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
