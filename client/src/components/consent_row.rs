//! One row of the GDPR consent console.

use leptos::prelude::*;

use crate::net::types::ConsentRecord;
use crate::state::consent::{ConsentAction, ConsentState};
use crate::util::format::{date_part, join_or_dash};

#[component]
pub fn ConsentRow(record: ConsentRecord) -> impl IntoView {
    let consent = expect_context::<RwSignal<ConsentState>>();
    let last_action = RwSignal::new(None::<String>);
    let id = StoredValue::new(record.id.clone());

    let act = move |action: ConsentAction| {
        let message = consent.with_untracked(|s| id.with_value(|id| s.handle(action, id)));
        last_action.set(message);
    };

    let status_class = if record.granted { "status-pill status-pill--active" } else { "status-pill status-pill--revoked" };
    let status_label = if record.granted { "granted" } else { "withdrawn" };
    let toggle_action = if record.granted { ConsentAction::Withdraw } else { ConsentAction::Grant };

    view! {
        <tr class="consent-row">
            <td>
                <strong>{record.purpose.clone()}</strong>
                <p class="consent-row__description">{record.description.clone()}</p>
            </td>
            <td>
                <span class=status_class>{status_label}</span>
            </td>
            <td>{date_part(&record.timestamp).to_owned()}</td>
            <td>{join_or_dash(&record.data_types)}</td>
            <td class="consent-row__actions">
                <button class="btn" on:click=move |_| act(toggle_action)>
                    {toggle_action.label()}
                </button>
                <button class="btn" on:click=move |_| act(ConsentAction::Export)>
                    {ConsentAction::Export.label()}
                </button>
                <Show when=move || last_action.with(Option::is_some)>
                    <span class="consent-row__note">"Request logged"</span>
                </Show>
            </td>
        </tr>
    }
}
