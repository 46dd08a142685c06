//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ApiConfig;
use crate::pages::directory::DirectoryPage;
use crate::state::directory::DirectoryState;

/// Root application component.
///
/// Provides the API configuration and directory state as context and sets
/// up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::from_build_env();
    log::info!(
        "contacts api at {} ({:?} paging, {} ms debounce)",
        config.base_url,
        config.paging,
        config.debounce_ms
    );
    let directory = RwSignal::new(DirectoryState::new(config.paging));

    provide_context(config);
    provide_context(directory);

    view! {
        <Title text="Contact Hub"/>

        <Router>
            <main class="app-shell">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=DirectoryPage/>
                </Routes>
            </main>
        </Router>
    }
}
