//! Refresh Loop
//!
//! Timer-driven polling of the metrics endpoint. Exactly one interval timer is
//! ever active: the timer lives in a single slot that cancels the old timer
//! before a new one goes live, and the refresh gate drops ticks that would
//! overlap a fetch still in flight.

use gloo_timers::callback::Interval;
use leptos::{spawn_local, SignalSet};

use super::global::GlobalState;
use crate::api;

/// Single-slot timer holder.
///
/// At most one timer is active at any time. Installing a new timer first drops
/// the previous one, which cancels it; the same applies to `clear`.
#[derive(Debug)]
pub struct TimerSlot<T> {
    active: Option<T>,
}

impl<T> Default for TimerSlot<T> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<T> TimerSlot<T> {
    /// Replace the active timer. The old timer is dropped before the new one
    /// is installed.
    pub fn install(&mut self, timer: T) {
        self.active.take();
        self.active = Some(timer);
    }

    /// Drop (cancel) the active timer, if any
    pub fn clear(&mut self) {
        self.active.take();
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

/// Start (or restart) the refresh timer at the given period in seconds.
pub fn start_refresh_timer(state: GlobalState, secs: u32) {
    stop_refresh_timer(&state);

    let tick_state = state.clone();
    let interval = Interval::new(secs.max(1) * 1000, move || {
        refresh_now(tick_state.clone());
    });

    state.refresh_timer.update_value(|slot| slot.install(interval));
}

/// Cancel the active refresh timer, if any.
pub fn stop_refresh_timer(state: &GlobalState) {
    state.refresh_timer.update_value(|slot| slot.clear());
}

/// Fetch fresh metrics for both charts and rebuild them on success.
///
/// On failure the prior charts are left untouched; there is no partial update.
/// A tick that fires while an earlier fetch is still in flight is dropped.
pub fn refresh_now(state: GlobalState) {
    let mut gate = state.refresh_gate.get_value();
    let Some(token) = gate.begin() else {
        web_sys::console::log_1(&"Refresh already in flight, dropping tick".into());
        return;
    };
    state.refresh_gate.set_value(gate);
    state.refreshing.set(true);

    spawn_local(async move {
        let result = api::fetch_metrics().await;

        let mut gate = state.refresh_gate.get_value();
        let current = gate.finish(token);
        state.refresh_gate.set_value(gate);
        state.refreshing.set(false);

        if !current {
            // A newer refresh superseded this one while it was in flight.
            return;
        }

        match result {
            Ok(refresh) => {
                state.github_metrics.set(refresh.github_metrics);
                state.jira_metrics.set(refresh.jira_metrics);
                state.rebuild_charts();
                state.last_refresh.set(Some(chrono::Utc::now().timestamp_millis()));
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to refresh metrics: {}", e).into());
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Stand-in timer that records its cancellation (drop)
    struct FakeTimer {
        cancelled: Rc<Cell<u32>>,
    }

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            self.cancelled.set(self.cancelled.get() + 1);
        }
    }

    fn fake_timer(cancelled: &Rc<Cell<u32>>) -> FakeTimer {
        FakeTimer { cancelled: Rc::clone(cancelled) }
    }

    #[test]
    fn test_install_cancels_previous_timer_exactly_once() {
        let first_cancelled = Rc::new(Cell::new(0));
        let second_cancelled = Rc::new(Cell::new(0));
        let mut slot = TimerSlot::default();

        // Interval N, then shortly after, interval M
        slot.install(fake_timer(&first_cancelled));
        slot.install(fake_timer(&second_cancelled));

        // Only the second timer remains; the first was cancelled exactly once
        assert_eq!(first_cancelled.get(), 1);
        assert_eq!(second_cancelled.get(), 0);
        assert!(slot.is_active());
    }

    #[test]
    fn test_clear_cancels_active_timer() {
        let cancelled = Rc::new(Cell::new(0));
        let mut slot = TimerSlot::default();

        slot.install(fake_timer(&cancelled));
        slot.clear();

        assert_eq!(cancelled.get(), 1);
        assert!(!slot.is_active());

        // Clearing an empty slot is a no-op
        slot.clear();
        assert_eq!(cancelled.get(), 1);
    }
}
