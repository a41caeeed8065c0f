//! Metric Card Component
//!
//! Displays a single Four Keys metric with its current value and unit. Cards
//! are draggable: dropping one card on another moves it into that slot,
//! updates the stored order, and persists the preference set.

use leptos::*;

use crate::state::global::GlobalState;
use crate::state::preferences::{metric_title, reorder_metrics};

/// Draggable metric card bound to one card identifier
#[component]
pub fn MetricCard(
    /// Card identifier (e.g. `deployment_frequency`)
    #[prop(into)]
    metric: String,
    /// Identifier of the card currently being dragged, if any
    dragging: RwSignal<Option<String>>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let metric_value = metric.clone();
    let metric_drag = metric.clone();
    let metric_drop = metric.clone();
    let metric_attr = metric.clone();

    // Current value from the latest Four Keys payload
    let current = create_memo(move |_| {
        state.github_metrics.get()
            .four_keys()
            .and_then(|keys| keys.get(&metric_value))
            .cloned()
    });

    let on_dragstart = move |_: web_sys::DragEvent| {
        dragging.set(Some(metric_drag.clone()));
    };

    let on_dragover = move |ev: web_sys::DragEvent| {
        // Required for the element to accept a drop
        ev.prevent_default();
    };

    let drop_state = state.clone();
    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        let Some(source) = dragging.get_untracked() else {
            return;
        };
        dragging.set(None);

        drop_state.preferences.update(|prefs| {
            reorder_metrics(&mut prefs.metrics_order, &source, &metric_drop);
        });
        drop_state.persist_preferences();
    };

    view! {
        <div
            draggable="true"
            data-metric-type=metric_attr
            on:dragstart=on_dragstart
            on:dragover=on_dragover
            on:drop=on_drop
            class="bg-gray-800 rounded-lg p-4 cursor-move border border-gray-700 hover:border-gray-600 transition"
        >
            // Header with metric name
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">{metric_title(&metric)}</span>
                <span class="text-gray-500 text-xs">
                    {move || current.get().map(|v| v.unit).unwrap_or_default()}
                </span>
            </div>

            // Current value
            <div class="text-3xl font-bold mt-2">
                {move || {
                    current.get()
                        .map(|v| format!("{:.2}", v.value))
                        .unwrap_or_else(|| "—".to_string())
                }}
            </div>
        </div>
    }
}
