//! Skeleton Component
//!
//! Placeholder shown before chart data arrives.

use leptos::*;

/// Skeleton loader for a chart that has no data yet
#[component]
pub fn ChartSkeleton() -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-6 animate-pulse">
            <div class="h-6 bg-gray-700 rounded w-1/4 mb-4" />
            <div class="h-64 bg-gray-700 rounded" />
        </div>
    }
}
