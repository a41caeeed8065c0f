//! Request Sequencing
//!
//! In-flight requests carry no cancellation, so two responses for the same
//! logical operation can arrive out of order. Each operation keeps a gate that
//! hands out monotonically increasing tokens; a handler only applies a
//! response whose token is still the newest issued, which makes the last
//! *dispatched* request win rather than the last *arriving* response. The
//! debounce slot applies the same idea upstream of dispatch, collapsing rapid
//! edits into a single request carrying the final text.

/// Monotonic token source for one logical operation (preview, refresh)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestGate {
    issued: u64,
}

impl RequestGate {
    /// Issue a token for a new request, superseding all earlier ones
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Whether a response with this token is still the newest request
    pub fn is_current(&self, token: u64) -> bool {
        token == self.issued
    }
}

/// Refresh-tick gate: sequencing plus an in-flight guard.
///
/// A tick that fires while its predecessor is still fetching is dropped
/// outright, so ticks never overlap even when a fetch outlasts the interval.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefreshGate {
    gate: RequestGate,
    in_flight: bool,
}

impl RefreshGate {
    /// Begin a refresh; `None` means one is already in flight and this tick
    /// should be dropped.
    pub fn begin(&mut self) -> Option<u64> {
        if self.in_flight {
            return None;
        }
        self.in_flight = true;
        Some(self.gate.issue())
    }

    /// Finish a refresh; returns whether its result should be applied.
    pub fn finish(&mut self, token: u64) -> bool {
        self.in_flight = false;
        self.gate.is_current(token)
    }
}

/// Debounce bookkeeping for one text input.
///
/// Every keystroke schedules a dispatch and supersedes the pending one; when
/// a scheduled dispatch fires after the quiet period, only the newest schedule
/// yields its text. Exactly one dispatch goes out per quiet period, carrying
/// the final text.
#[derive(Clone, Debug, Default)]
pub struct DebounceSlot {
    scheduled: u64,
    pending: Option<String>,
    superseded: u64,
}

impl DebounceSlot {
    /// Schedule `text` for dispatch, superseding any pending schedule.
    /// Returns the schedule id to hand back on fire.
    pub fn schedule(&mut self, text: String) -> u64 {
        if self.pending.is_some() {
            self.superseded += 1;
        }
        self.pending = Some(text);
        self.scheduled += 1;
        self.scheduled
    }

    /// The quiet period for schedule `id` elapsed. Returns the text to
    /// dispatch, or `None` when a newer schedule superseded it.
    pub fn fire(&mut self, id: u64) -> Option<String> {
        if id != self.scheduled {
            return None;
        }
        self.pending.take()
    }

    /// Number of pending schedules that were superseded before firing
    pub fn superseded_count(&self) -> u64 {
        self.superseded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_token_wins() {
        let mut gate = RequestGate::default();
        let first = gate.issue();
        let second = gate.issue();

        // The older response arrives last but must not be applied.
        assert!(gate.is_current(second));
        assert!(!gate.is_current(first));
    }

    #[test]
    fn test_overlapping_tick_is_dropped() {
        let mut gate = RefreshGate::default();
        let token = gate.begin().expect("first tick should start");
        assert_eq!(gate.begin(), None);

        assert!(gate.finish(token));
        assert!(gate.begin().is_some());
    }

    #[test]
    fn test_finish_reopens_gate_even_for_stale_token() {
        let mut gate = RefreshGate::default();
        let token = gate.begin().unwrap();
        assert!(gate.finish(token));

        let newer = gate.begin().unwrap();
        assert!(gate.finish(newer));
        // A long-dead token is never current again.
        assert!(!RequestGate { issued: newer }.is_current(token));
    }

    #[test]
    fn test_rapid_edits_dispatch_once_with_final_text() {
        let mut slot = DebounceSlot::default();

        // Three keystrokes inside one quiet period
        let first = slot.schedule("# H".to_string());
        let second = slot.schedule("# Hi".to_string());
        let last = slot.schedule("# Hi!".to_string());

        // Only the newest schedule dispatches, and it carries the final text
        assert_eq!(slot.fire(first), None);
        assert_eq!(slot.fire(second), None);
        assert_eq!(slot.fire(last), Some("# Hi!".to_string()));
        assert_eq!(slot.superseded_count(), 2);
    }

    #[test]
    fn test_separate_quiet_periods_dispatch_separately() {
        let mut slot = DebounceSlot::default();

        let first = slot.schedule("draft one".to_string());
        assert_eq!(slot.fire(first), Some("draft one".to_string()));

        let second = slot.schedule("draft two".to_string());
        assert_eq!(slot.fire(second), Some("draft two".to_string()));
        assert_eq!(slot.superseded_count(), 0);
    }

    #[test]
    fn test_fired_schedule_does_not_dispatch_twice() {
        let mut slot = DebounceSlot::default();
        let id = slot.schedule("once".to_string());
        assert_eq!(slot.fire(id), Some("once".to_string()));
        assert_eq!(slot.fire(id), None);
    }
}
