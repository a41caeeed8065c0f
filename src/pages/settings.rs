//! Settings Page
//!
//! Display preferences and API connection settings. Every preference control
//! applies its effect immediately (layout class, chart rebuild, theme class,
//! refresh timer) and then persists the full preference set.

use leptos::*;

use crate::api;
use crate::state::global::{apply_theme, GlobalState};
use crate::state::preferences::{parse_refresh_interval, ChartKind, Layout, Theme};
use crate::state::refresh::start_refresh_timer;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="text-gray-400 mt-1">"Configure your Pulse dashboard"</p>
            </div>

            // Display preferences
            <DisplaySettings />

            // API Connection
            <ApiSettings />
        </div>
    }
}

/// Display preference controls
#[component]
fn DisplaySettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let preferences = state.preferences;

    let layout_state = state.clone();
    let on_layout_change = move |ev| {
        let layout = Layout::parse(&event_target_value(&ev));
        layout_state.preferences.update(|prefs| prefs.layout = layout);
        layout_state.persist_preferences();
    };

    let chart_state = state.clone();
    let on_chart_type_change = move |ev| {
        let kind = ChartKind::parse(&event_target_value(&ev));
        chart_state.preferences.update(|prefs| prefs.chart_type = kind);
        // Handles are never mutated in place; both are destroyed and rebuilt
        chart_state.rebuild_charts();
        chart_state.persist_preferences();
    };

    let theme_state = state.clone();
    let on_theme_change = move |ev| {
        let theme = Theme::parse(&event_target_value(&ev));
        theme_state.preferences.update(|prefs| prefs.theme = theme);
        apply_theme(theme);
        theme_state.persist_preferences();
    };

    let interval_state = state;
    let on_interval_change = move |ev| {
        let secs = parse_refresh_interval(&event_target_value(&ev));
        interval_state.preferences.update(|prefs| prefs.refresh_interval = secs);
        // Restarting replaces the old timer before the new one is installed
        start_refresh_timer(interval_state.clone(), secs);
        interval_state.persist_preferences();
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Display"</h2>

            <div class="grid md:grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Layout"</label>
                    <select
                        id="layoutPreference"
                        prop:value=move || preferences.get().layout.as_str()
                        on:change=on_layout_change
                        class="bg-gray-700 rounded-lg px-4 py-3 w-full
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        <option value="grid">"Grid"</option>
                        <option value="list">"List"</option>
                    </select>
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Chart Type"</label>
                    <select
                        id="chartType"
                        prop:value=move || preferences.get().chart_type.as_str()
                        on:change=on_chart_type_change
                        class="bg-gray-700 rounded-lg px-4 py-3 w-full
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        <option value="bar">"Bar"</option>
                        <option value="line">"Line"</option>
                        <option value="radar">"Radar"</option>
                    </select>
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Theme"</label>
                    <select
                        id="themePreference"
                        prop:value=move || preferences.get().theme.as_str()
                        on:change=on_theme_change
                        class="bg-gray-700 rounded-lg px-4 py-3 w-full
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        <option value="light">"Light"</option>
                        <option value="dark">"Dark"</option>
                    </select>
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Refresh Interval"</label>
                    <select
                        id="refreshInterval"
                        prop:value=move || preferences.get().refresh_interval.to_string()
                        on:change=on_interval_change
                        class="bg-gray-700 rounded-lg px-4 py-3 w-full
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        <option value="15">"Every 15 seconds"</option>
                        <option value="30">"Every 30 seconds"</option>
                        <option value="60">"Every minute"</option>
                        <option value="300">"Every 5 minutes"</option>
                    </select>
                </div>
            </div>
        </section>
    }
}

/// API connection settings
#[component]
fn ApiSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (api_url, set_api_url) = create_signal(api::get_api_base());

    let save_url = move |_| {
        let url = api_url.get();
        api::set_api_base(&url);
        state.show_success("API URL saved");
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"API Connection"</h2>

            <div>
                <label class="block text-sm text-gray-400 mb-2">"Pulse API URL"</label>
                <div class="flex space-x-2">
                    <input
                        type="text"
                        prop:value=move || api_url.get()
                        on:input=move |ev| set_api_url.set(event_target_value(&ev))
                        class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <button
                        on:click=save_url
                        class="px-4 py-3 bg-primary-600 hover:bg-primary-700
                               rounded-lg font-medium transition-colors"
                    >
                        "Save"
                    </button>
                </div>
            </div>
        </section>
    }
}
