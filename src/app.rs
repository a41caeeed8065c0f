//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{Nav, Toast};
use crate::pages::{Dashboard, ReadmeGenerator, Settings};
use crate::state::global::{apply_theme, provide_global_state, GlobalState};
use crate::state::refresh::{refresh_now, start_refresh_timer};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    // Load stored preferences, then bring the page to its initial state:
    // theme applied, charts populated, refresh timer running
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    init_app(state);

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/readme" view=ReadmeGenerator />
                        <Route path="/settings" view=Settings />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer with refresh status
                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Apply server-stored preferences and start the refresh loop.
///
/// Runs before any user interaction, so the page reaches a consistent visual
/// state on its own. A failed preference fetch falls back to defaults.
fn init_app(state: GlobalState) {
    spawn_local(async move {
        match api::fetch_preferences().await {
            Ok(prefs) => {
                state.preferences.set(prefs);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to load preferences: {}", e).into());
            }
        }

        let prefs = state.preferences.get_untracked();
        apply_theme(prefs.theme);

        refresh_now(state.clone());
        start_refresh_timer(state, prefs.refresh_interval);
    });
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}

/// Footer component showing refresh status
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                // Last refresh time
                <div class="text-gray-400">
                    {move || {
                        state.last_refresh.get()
                            .and_then(|ts| chrono::DateTime::from_timestamp_millis(ts))
                            .map(|dt| format!("Last refresh: {}", dt.format("%H:%M:%S")))
                            .unwrap_or_else(|| "Not refreshed".to_string())
                    }}
                </div>

                // Refresh indicator
                {move || {
                    if state.refreshing.get() {
                        view! {
                            <div class="flex items-center space-x-2 text-primary-400">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Refreshing..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}
