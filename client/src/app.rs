//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::error_banner::AppErrorBoundary;
use crate::components::nav_bar::NavBar;
use crate::components::search_overlay::SearchOverlay;
use crate::pages::{
    consent::ConsentPage, datasets::DatasetsPage, dids::DidsPage, overview::OverviewPage, workflow::WorkflowPage,
};
use crate::state::{
    consent::ConsentState, datasets::DatasetsState, dids::DidsState, search::SearchState, ui::UiState,
    workflow::WorkflowState,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides every panel's state as context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let dids = RwSignal::new(DidsState::default());
    let datasets = RwSignal::new(DatasetsState::default());
    let consent = RwSignal::new(ConsentState::default());
    let workflow = RwSignal::new(WorkflowState::default());
    let search = RwSignal::new(SearchState::default());

    provide_context(ui);
    provide_context(dids);
    provide_context(datasets);
    provide_context(consent);
    provide_context(workflow);
    provide_context(search);

    // Apply the stored theme once the browser takes over.
    Effect::new(move || {
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/did-console.css"/>
        <Title text="DID Console"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <AppErrorBoundary>
                    <Routes fallback=|| view! { <p class="app-main__missing">"Page not found."</p> }>
                        <Route path=StaticSegment("") view=OverviewPage/>
                        <Route path=StaticSegment("dids") view=DidsPage/>
                        <Route path=StaticSegment("datasets") view=DatasetsPage/>
                        <Route path=StaticSegment("consent") view=ConsentPage/>
                        <Route path=StaticSegment("workflow") view=WorkflowPage/>
                    </Routes>
                </AppErrorBoundary>
            </main>
            <SearchOverlay/>
        </Router>
    }
}
