//! HTTP API Client
//!
//! Functions for communicating with the Pulse backend. All calls are
//! fire-and-forget from the UI's perspective; callers decide how (or whether)
//! a failure is surfaced.

use gloo_net::http::Request;

use crate::state::payload::MetricsRefresh;
use crate::state::preferences::UserPreferences;

/// Default API base URL (the backend serves the API under `/api`)
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("pulse_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("pulse_api_url", url);
        }
    }
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// Response from the markdown render endpoint: `html` on success, `error`
/// when the server rejected the document.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct PreviewResponse {
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

// ============ API Functions ============

/// Fetch fresh metrics for both charts
pub async fn fetch_metrics() -> Result<MetricsRefresh, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/metrics/refresh", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Unknown error".to_string(), code: None });
        return Err(error.error);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Load the stored preferences for the current user
pub async fn fetch_preferences() -> Result<UserPreferences, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/preferences", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Unknown error".to_string(), code: None });
        return Err(error.error);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Persist the full preference set as one JSON object.
///
/// The response body is ignored; only the status matters.
pub async fn save_preferences(prefs: &UserPreferences) -> Result<(), String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/api/preferences", api_base))
        .json(prefs)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Unknown error".to_string(), code: None });
        return Err(error.error);
    }

    Ok(())
}

/// Render markdown to HTML on the server.
///
/// A server-reported render error comes back as `Ok` with the `error` field
/// set; only transport and parse failures produce `Err`.
pub async fn render_markdown(content: &str) -> Result<PreviewResponse, String> {
    #[derive(serde::Serialize)]
    struct PreviewRequest {
        content: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/api/preview_markdown", api_base))
        .json(&PreviewRequest { content: content.to_string() })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}
