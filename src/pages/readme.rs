//! README Generator Page
//!
//! Markdown editor with live server-rendered preview.

use leptos::*;

use crate::components::MarkdownEditor;

/// README generator page component
#[component]
pub fn ReadmeGenerator() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"README Generator"</h1>
                <p class="text-gray-400 mt-1">"Write Markdown on the left, see the rendered result on the right"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                <MarkdownEditor />
            </section>
        </div>
    }
}
