//! Global Application State
//!
//! Reactive state management using Leptos signals. One state object owns the
//! two metrics payloads, the user preferences, the chart registry, and the
//! single refresh timer, with its lifecycle tied to the app root.

use gloo_timers::callback::Interval;
use leptos::*;

use super::charts::{build_chart_config, ChartId, ChartRegistry};
use super::payload::MetricsPayload;
use super::preferences::{Theme, UserPreferences};
use super::refresh::TimerSlot;
use super::requests::RefreshGate;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Latest Four Keys payload for the GitHub chart
    pub github_metrics: RwSignal<MetricsPayload>,
    /// Latest weekly payload for the Jira chart
    pub jira_metrics: RwSignal<MetricsPayload>,
    /// Current user preferences (server copy is updated on every change)
    pub preferences: RwSignal<UserPreferences>,
    /// Live chart handles, one per chart id
    pub charts: RwSignal<ChartRegistry>,
    /// The single active refresh timer; replacing or clearing the slot
    /// cancels the old interval
    pub refresh_timer: StoredValue<TimerSlot<Interval>>,
    /// Overlap/staleness guard for refresh ticks
    pub refresh_gate: StoredValue<RefreshGate>,
    /// Timestamp of the last successful metrics refresh
    pub last_refresh: RwSignal<Option<i64>>,
    /// Whether a refresh fetch is currently in flight
    pub refreshing: RwSignal<bool>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        github_metrics: create_rw_signal(MetricsPayload::default()),
        jira_metrics: create_rw_signal(MetricsPayload::default()),
        preferences: create_rw_signal(UserPreferences::default()),
        charts: create_rw_signal(ChartRegistry::default()),
        refresh_timer: store_value(TimerSlot::default()),
        refresh_gate: store_value(RefreshGate::default()),
        last_refresh: create_rw_signal(None),
        refreshing: create_rw_signal(false),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Rebuild both chart handles from the current payloads and chart kind.
    ///
    /// Always destroy-and-recreate; handles are never mutated in place.
    pub fn rebuild_charts(&self) {
        let kind = self.preferences.get_untracked().chart_type;
        let github = build_chart_config(&self.github_metrics.get_untracked(), kind);
        let jira = build_chart_config(&self.jira_metrics.get_untracked(), kind);

        self.charts.update(|registry| {
            registry.install(ChartId::Github, github);
            registry.install(ChartId::Jira, jira);
        });
    }

    /// Persist the full preference set. Failures are logged, never retried.
    pub fn persist_preferences(&self) {
        let prefs = self.preferences.get_untracked();
        spawn_local(async move {
            if let Err(e) = crate::api::save_preferences(&prefs).await {
                web_sys::console::error_1(&format!("Failed to save preferences: {}", e).into());
            }
        });
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }
}

/// Toggle the dark theme class on the document body
pub fn apply_theme(theme: Theme) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };

    let class_list = body.class_list();
    let result = if theme.is_dark() {
        class_list.add_1("dark")
    } else {
        class_list.remove_1("dark")
    };
    if let Err(e) = result {
        web_sys::console::error_1(&format!("Failed to apply theme class: {:?}", e).into());
    }
}
