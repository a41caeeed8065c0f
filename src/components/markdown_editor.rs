//! Markdown Editor Component
//!
//! README editor with a live server-rendered preview. Input is debounced:
//! each keystroke cancels the pending preview call and reschedules it, so one
//! render request goes out per quiet period, carrying the final text. Returned
//! HTML is inserted verbatim; the backend is trusted to render it.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::api;
use crate::state::requests::{DebounceSlot, RequestGate};

/// Quiet period before a preview request is dispatched
const DEBOUNCE_MS: u32 = 300;

/// Starting document shown when the editor opens
const DEFAULT_TEMPLATE: &str = "# Project Title\n\n\
A short description of what this project does.\n\n\
## Installation\n\n```\ncargo install project\n```\n\n\
## Usage\n\nDescribe how to use the project here.\n";

/// What the preview pane is currently showing
#[derive(Clone, Debug, PartialEq)]
enum PreviewState {
    /// Server-rendered HTML, inserted verbatim
    Rendered(String),
    /// The server rejected the document (`{error}` response)
    ServerError(String),
    /// The render call itself failed (network or parse)
    TransportError(String),
}

/// Map a render call's outcome onto the preview pane.
///
/// A server-reported `{error}` and a transport failure take distinct paths;
/// successful HTML is passed through untouched.
fn preview_state(result: Result<api::PreviewResponse, String>) -> PreviewState {
    match result {
        Ok(response) => match response.error {
            Some(error) => PreviewState::ServerError(error),
            None => PreviewState::Rendered(response.html.unwrap_or_default()),
        },
        Err(e) => PreviewState::TransportError(e),
    }
}

/// Markdown editor with debounced live preview
#[component]
pub fn MarkdownEditor() -> impl IntoView {
    let (content, set_content) = create_signal(DEFAULT_TEMPLATE.to_string());
    let (preview, set_preview) = create_signal(PreviewState::Rendered(String::new()));

    // Pending debounce timer; dropping the timeout cancels it
    let pending: StoredValue<Option<Timeout>> = store_value(None);
    // Debounce bookkeeping: only the newest schedule dispatches, with its text
    let debounce: StoredValue<DebounceSlot> = store_value(DebounceSlot::default());
    // Response ordering: only the newest dispatched request may update the pane
    let gate: StoredValue<RequestGate> = store_value(RequestGate::default());

    let dispatch = move |text: String| {
        let mut g = gate.get_value();
        let token = g.issue();
        gate.set_value(g);

        spawn_local(async move {
            let result = api::render_markdown(&text).await;

            if !gate.get_value().is_current(token) {
                // A newer request went out while this one was in flight.
                return;
            }

            set_preview.set(preview_state(result));
        });
    };

    let on_input = move |ev| {
        let text = event_target_value(&ev);
        set_content.set(text.clone());

        let mut slot = debounce.get_value();
        let id = slot.schedule(text);
        debounce.set_value(slot);

        pending.update_value(|timer| {
            timer.take();
        });
        let timeout = Timeout::new(DEBOUNCE_MS, move || {
            let mut slot = debounce.get_value();
            let winner = slot.fire(id);
            debounce.set_value(slot);
            if let Some(text) = winner {
                dispatch(text);
            }
        });
        pending.set_value(Some(timeout));
    };

    // Initial preview with whatever text is present, independent of the
    // debounce timer
    dispatch(content.get_untracked());

    view! {
        <div class="grid md:grid-cols-2 gap-6">
            // Editor pane
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Markdown"</label>
                <textarea
                    id="markdownInput"
                    prop:value=move || content.get()
                    on:input=on_input
                    rows="20"
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 font-mono text-sm
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            // Preview pane
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Preview"</label>
                <div id="preview" class="bg-gray-800 rounded-lg p-4 min-h-[20rem] prose prose-invert max-w-none">
                    {move || match preview.get() {
                        PreviewState::Rendered(html) => view! {
                            <div inner_html=html />
                        }.into_view(),
                        PreviewState::ServerError(message) => view! {
                            <div class="alert alert-danger bg-red-600/20 border border-red-600 text-red-400 rounded-lg p-3">
                                {message}
                            </div>
                        }.into_view(),
                        PreviewState::TransportError(message) => view! {
                            <div class="alert alert-danger bg-red-600/20 border border-red-600 text-red-400 rounded-lg p-3">
                                {format!("Error: {}", message)}
                            </div>
                        }.into_view(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PreviewResponse;

    #[test]
    fn test_rendered_html_is_passed_through_verbatim() {
        let result = Ok(PreviewResponse {
            html: Some("<h1>Hi</h1>".to_string()),
            error: None,
        });
        assert_eq!(preview_state(result), PreviewState::Rendered("<h1>Hi</h1>".to_string()));
    }

    #[test]
    fn test_server_error_takes_priority_over_html() {
        let result = Ok(PreviewResponse {
            html: None,
            error: Some("bad syntax".to_string()),
        });
        assert_eq!(preview_state(result), PreviewState::ServerError("bad syntax".to_string()));
    }

    #[test]
    fn test_transport_failure_is_distinct_from_server_error() {
        let result = Err("Network error: connection refused".to_string());
        assert_eq!(
            preview_state(result),
            PreviewState::TransportError("Network error: connection refused".to_string())
        );
    }

    #[test]
    fn test_missing_html_renders_as_empty() {
        let result = Ok(PreviewResponse { html: None, error: None });
        assert_eq!(preview_state(result), PreviewState::Rendered(String::new()));
    }
}
