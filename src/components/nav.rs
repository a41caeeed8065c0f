//! Navigation Component
//!
//! Top navigation bar: brand on the left, one link per page on the right.

use leptos::*;
use leptos_router::*;

const LINKS: &[(&str, &str)] = &[
    ("/", "Dashboard"),
    ("/readme", "README Generator"),
    ("/settings", "Settings"),
];

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let links = LINKS
        .iter()
        .map(|(href, label)| {
            view! {
                <A
                    href=*href
                    class="px-3 py-2 rounded-md text-sm text-gray-300 hover:text-white \
                           hover:bg-gray-700 transition-colors"
                    active_class="bg-gray-700 text-white"
                >
                    {*label}
                </A>
            }
        })
        .collect_view();

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto flex h-16 items-center justify-between px-4">
                <A href="/" class="flex items-baseline space-x-2">
                    <span class="text-xl font-bold text-white">"Pulse"</span>
                    <span class="hidden text-xs text-gray-500 sm:inline">"delivery metrics"</span>
                </A>

                <div class="flex items-center gap-1">{links}</div>
            </div>
        </nav>
    }
}
