//! Dashboard Page
//!
//! Main dashboard view showing the Four Keys cards and both metric charts.

use leptos::*;

use crate::components::{ChartSkeleton, MetricCard, MetricsChart};
use crate::state::charts::ChartId;
use crate::state::global::GlobalState;
use crate::state::preferences::Layout;
use crate::state::refresh::refresh_now;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Card currently being dragged, shared across all cards
    let dragging = create_rw_signal(None::<String>);

    let refreshing = state.refreshing;
    let state_for_refresh = state.clone();
    let on_refresh = move |_| {
        refresh_now(state_for_refresh.clone());
    };

    let state_for_cards = state.clone();
    let state_for_layout = state.clone();
    let state_for_github = state.clone();
    let state_for_jira = state.clone();

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Your delivery metrics at a glance"</p>
                </div>

                <button
                    on:click=on_refresh
                    disabled=move || refreshing.get()
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if refreshing.get() { "Refreshing..." } else { "Refresh Now" }}
                </button>
            </div>

            // Four Keys cards, reorderable by drag and drop
            <section>
                <h2 class="text-lg font-semibold mb-4">"Four Keys"</h2>
                <div
                    id="metricsContainer"
                    class=move || {
                        match state_for_layout.preferences.get().layout {
                            Layout::Grid => "grid grid-cols-2 md:grid-cols-4 gap-4",
                            Layout::List => "flex flex-col space-y-4",
                        }
                    }
                >
                    {move || {
                        state_for_cards.preferences.get().metrics_order
                            .into_iter()
                            .map(|metric| view! {
                                <MetricCard metric=metric dragging=dragging />
                            })
                            .collect_view()
                    }}
                </div>
            </section>

            // Charts
            <div class="grid lg:grid-cols-2 gap-8">
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"GitHub Metrics"</h2>
                    {move || {
                        if state_for_github.charts.get().get(ChartId::Github).is_some() {
                            view! { <MetricsChart id=ChartId::Github /> }.into_view()
                        } else {
                            view! { <ChartSkeleton /> }.into_view()
                        }
                    }}
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Ticket Completion Rate"</h2>
                    {move || {
                        if state_for_jira.charts.get().get(ChartId::Jira).is_some() {
                            view! { <MetricsChart id=ChartId::Jira /> }.into_view()
                        } else {
                            view! { <ChartSkeleton /> }.into_view()
                        }
                    }}
                </section>
            </div>
        </div>
    }
}
