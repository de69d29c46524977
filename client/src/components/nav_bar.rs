//! Top navigation bar: page links, search trigger, user menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by the app shell. Owns the global keyboard shortcuts
//! (`/` outside text fields or Ctrl/Cmd+K opens search, Escape dismisses
//! overlays).

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::user_menu::UserMenu;
use crate::pages::PAGES;
use crate::state::ui::UiState;

/// Whether `path` is the current route (exact match for `/`, prefix otherwise).
fn is_active(current: &str, path: &str) -> bool {
    if path == "/" { current == "/" } else { current.starts_with(path) }
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Shortcut {
    OpenSearch,
    Dismiss,
}

/// Whether keystrokes on this element are text entry the shortcuts must not steal.
#[cfg(any(test, feature = "hydrate"))]
fn is_editable_target(tag_name: &str, content_editable: bool) -> bool {
    content_editable || ["INPUT", "TEXTAREA", "SELECT"].iter().any(|t| tag_name.eq_ignore_ascii_case(t))
}

/// `/` opens search unless the user is typing; Ctrl/Cmd+K always does.
#[cfg(any(test, feature = "hydrate"))]
fn shortcut_for(key: &str, modifier: bool, editing: bool) -> Option<Shortcut> {
    let combo = modifier && key.eq_ignore_ascii_case("k");
    let slash = key == "/" && !modifier && !editing;
    if combo || slash {
        Some(Shortcut::OpenSearch)
    } else if key == "Escape" {
        Some(Shortcut::Dismiss)
    } else {
        None
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    #[cfg(feature = "hydrate")]
    {
        let _shortcuts = window_event_listener(leptos::ev::keydown, move |ev| {
            let editing = ev
                .target()
                .and_then(|t| wasm_bindgen::JsCast::dyn_into::<web_sys::HtmlElement>(t).ok())
                .is_some_and(|el| is_editable_target(&el.tag_name(), el.is_content_editable()));
            match shortcut_for(&ev.key(), ev.ctrl_key() || ev.meta_key(), editing) {
                Some(Shortcut::OpenSearch) => {
                    ev.prevent_default();
                    ui.update(UiState::open_search);
                }
                Some(Shortcut::Dismiss) => ui.update(UiState::dismiss),
                None => {}
            }
        });
    }

    view! {
        <header class="nav-bar toolbar">
            <a href="/" class="nav-bar__brand">"DID Console"</a>
            <span class="toolbar__divider" aria-hidden="true"></span>
            <nav class="nav-bar__links">
                {PAGES
                    .iter()
                    .map(|page| {
                        let path = page.path;
                        view! {
                            <a
                                href=path
                                class="nav-bar__link"
                                class:nav-bar__link--active=move || is_active(&location.pathname.get(), path)
                            >
                                {page.title}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <span class="toolbar__spacer"></span>
            <button
                class="btn nav-bar__search"
                title="Search (Ctrl+K)"
                on:click=move |_| ui.update(UiState::open_search)
            >
                "⌕ Search"
                <kbd class="nav-bar__kbd">"Ctrl K"</kbd>
            </button>
            <UserMenu/>
        </header>
    }
}
