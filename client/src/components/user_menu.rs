//! User menu popover in the nav bar.
//!
//! There is no auth in this dashboard; the menu shows a fixed operator
//! identity, the theme toggle, and shortcuts into the consent console.

use leptos::prelude::*;

use crate::state::ui::UiState;

const OPERATOR_NAME: &str = "Data Steward";
const OPERATOR_ROLE: &str = "operator";

#[component]
pub fn UserMenu() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle_theme = move |_| {
        let next = crate::util::dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };
    let close = move |_| ui.update(|u| u.user_menu_open = false);

    view! {
        <div class="user-menu">
            <button
                class="btn user-menu__trigger"
                aria-haspopup="menu"
                aria-expanded=move || ui.get().user_menu_open.to_string()
                on:click=move |_| ui.update(UiState::toggle_user_menu)
            >
                <span class="user-menu__avatar" aria-hidden="true">"DS"</span>
                <span class="user-menu__name">{OPERATOR_NAME}</span>
            </button>
            <Show when=move || ui.get().user_menu_open>
                <div class="user-menu__popover" role="menu">
                    <p class="user-menu__identity">
                        {OPERATOR_NAME}
                        " ("
                        <span class="user-menu__role">{OPERATOR_ROLE}</span>
                        ")"
                    </p>
                    <button class="btn user-menu__item" role="menuitem" on:click=on_toggle_theme>
                        {move || if ui.get().dark_mode { "☀ Light mode" } else { "☾ Dark mode" }}
                    </button>
                    <a href="/consent" class="user-menu__item" role="menuitem" on:click=close>
                        "Privacy & consent"
                    </a>
                </div>
            </Show>
        </div>
    }
}
