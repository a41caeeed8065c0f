//! API Client
//!
//! HTTP access to the Pulse backend.

pub mod client;

pub use client::{
    fetch_metrics, fetch_preferences, get_api_base, render_markdown, save_preferences,
    set_api_base, PreviewResponse,
};
