//! Pulse Dashboard
//!
//! DevOps delivery metrics dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - GitHub Four Keys and Jira delivery metrics, periodically refreshed
//! - Per-user display preferences persisted through the backend
//! - Drag-and-drop card ordering
//! - README generator with live server-rendered preview
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the Pulse API via HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
