//! Error surfaces: the per-panel banner and the app-wide error boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! Panels reduce every failure to one string and render it with
//! `ErrorBanner`; `AppErrorBoundary` catches anything a route view returns
//! as `Err` so the shell and navigation stay usable.

use leptos::prelude::*;

/// Dismissible single-message banner.
#[component]
pub fn ErrorBanner(message: String, #[prop(optional)] on_dismiss: Option<Callback<()>>) -> impl IntoView {
    view! {
        <div class="error-banner" role="alert">
            <span class="error-banner__message">{message}</span>
            {on_dismiss
                .map(|cb| {
                    view! {
                        <button
                            class="btn error-banner__dismiss"
                            on:click=move |_| cb.run(())
                            title="Dismiss"
                            aria-label="Dismiss error"
                        >
                            "✕"
                        </button>
                    }
                })}
        </div>
    }
}

/// Wraps route content so a failing view renders a notice instead of nothing.
#[component]
pub fn AppErrorBoundary(children: Children) -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| {
            view! {
                <div class="error-banner error-banner--boundary" role="alert">
                    <p>"Something went wrong rendering this view."</p>
                    <ul>
                        {move || {
                            errors
                                .get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </div>
            }
        }>{children()}</ErrorBoundary>
    }
}
