//! Card for one DID in the identity panel.

use leptos::prelude::*;

use crate::net::types::{DidStatus, EnhancedDid};
use crate::util::format::{date_part, join_or_dash, short_id, storage_summary};

#[component]
pub fn DidCard(did: EnhancedDid, #[prop(optional)] on_revoke: Option<Callback<String>>) -> impl IntoView {
    let status = did.status;
    let revocable = status != DidStatus::Revoked;
    let id_for_revoke = did.id.clone();
    let title = if did.metadata.name.is_empty() { short_id(&did.id, 16, 6) } else { did.metadata.name.clone() };
    let storage = did.storage.as_ref().map(storage_summary);
    let compliance = did.compliance.as_ref().map(|c| {
        let residency = c.data_residency.clone().unwrap_or_else(|| "any region".to_owned());
        if c.gdpr_compliant { format!("GDPR ✓ · {residency}") } else { format!("GDPR ✕ · {residency}") }
    });
    let purposes = did.consent.as_ref().map(|c| join_or_dash(&c.purposes));

    view! {
        <article class="did-card" class:did-card--revoked=!revocable>
            <header class="did-card__header">
                <h3 class="did-card__title">{title}</h3>
                <span class=format!("status-pill status-pill--{}", status.as_str())>{status.as_str()}</span>
            </header>
            <p class="did-card__id" title=did.id.clone()>{short_id(&did.id, 24, 8)}</p>
            <p class="did-card__description">{did.metadata.description.clone()}</p>
            <dl class="did-card__meta">
                <dt>"Method"</dt>
                <dd>{format!("did:{} ({})", did.method, did.network)}</dd>
                <dt>"Created"</dt>
                <dd>{date_part(&did.created_at).to_owned()}</dd>
                <dt>"Author"</dt>
                <dd>{did.metadata.author.clone()}</dd>
                <dt>"Tags"</dt>
                <dd>{join_or_dash(&did.metadata.tags)}</dd>
                {storage.map(|s| view! { <dt>"Storage"</dt><dd>{s}</dd> })}
                {compliance.map(|c| view! { <dt>"Compliance"</dt><dd>{c}</dd> })}
                {purposes.map(|p| view! { <dt>"Consent"</dt><dd>{p}</dd> })}
            </dl>
            {(revocable && on_revoke.is_some())
                .then(|| {
                    view! {
                        <button
                            class="btn btn--danger did-card__revoke"
                            on:click=move |_| {
                                if let Some(cb) = on_revoke.as_ref() {
                                    cb.run(id_for_revoke.clone());
                                }
                            }
                        >
                            "Revoke"
                        </button>
                    }
                })}
        </article>
    }
}
