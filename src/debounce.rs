//! Debounced gradient recomputation.
//!
//! Dragging a slider fires many events in quick succession. Rather than
//! rebuilding the gradient for each one, every event reschedules a single
//! pending recompute; only the last request in a burst actually runs.

use std::time::Duration;
use web_time::Instant;

use crate::constants::RECOMPUTE_DEBOUNCE;

/// A scheduled recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingRecompute {
    /// Ticket handed out when the request was scheduled
    ticket: u64,
    /// When the request becomes due
    due: Instant,
}

/// Single-slot cancel-and-reschedule timer.
///
/// At most one recompute is pending at any time. Scheduling a new one
/// replaces the outstanding request, and a due request is handed out exactly
/// once.
#[derive(Debug)]
pub struct RecomputeDebouncer {
    /// How long to wait after the last request
    delay: Duration,

    /// The outstanding request, if any.
    pending: Option<PendingRecompute>,

    /// Ticket of the most recent request.
    last_ticket: u64,

    /// Requests replaced before they came due.
    cancelled: u64,
}

impl RecomputeDebouncer {
    /// Create a debouncer with the default delay.
    pub fn new() -> Self {
        Self::with_delay(RECOMPUTE_DEBOUNCE)
    }

    /// Create a debouncer with a custom delay.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            last_ticket: 0,
            cancelled: 0,
        }
    }

    /// The configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule a recompute, cancelling any outstanding one.
    pub fn schedule(&mut self) -> u64 {
        self.schedule_at(Instant::now())
    }

    /// Schedule a recompute relative to `now`.
    ///
    /// Returns the ticket of the new request.
    pub fn schedule_at(&mut self, now: Instant) -> u64 {
        if let Some(previous) = self.pending.take() {
            self.cancelled += 1;
            log::trace!("Recompute: cancelled ticket {}", previous.ticket);
        }

        self.last_ticket += 1;
        self.pending = Some(PendingRecompute {
            ticket: self.last_ticket,
            due: now + self.delay,
        });
        log::trace!("Recompute: scheduled ticket {}", self.last_ticket);
        self.last_ticket
    }

    /// Drop the outstanding request without running it.
    pub fn cancel(&mut self) -> bool {
        let had_pending = self.pending.take().is_some();
        if had_pending {
            self.cancelled += 1;
        }
        had_pending
    }

    /// Check if a recompute is waiting.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending request if it is due.
    pub fn take_due(&mut self) -> Option<u64> {
        self.take_due_at(Instant::now())
    }

    /// Take the pending request if it is due at `now`.
    pub fn take_due_at(&mut self, now: Instant) -> Option<u64> {
        let pending = self.pending?;
        if now < pending.due {
            return None;
        }
        self.pending = None;
        Some(pending.ticket)
    }

    /// Take the pending request immediately, due or not.
    ///
    /// Used before export so the file matches what is on screen.
    pub fn flush(&mut self) -> Option<u64> {
        self.pending.take().map(|pending| pending.ticket)
    }

    /// Number of requests replaced or cancelled before running.
    pub fn cancelled_count(&self) -> u64 {
        self.cancelled
    }
}

impl Default for RecomputeDebouncer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let mut debouncer = RecomputeDebouncer::new();
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.take_due(), None);
        assert_eq!(debouncer.delay(), RECOMPUTE_DEBOUNCE);
    }

    #[test]
    fn test_not_due_before_delay() {
        let start = Instant::now();
        let mut debouncer = RecomputeDebouncer::with_delay(Duration::from_millis(50));
        debouncer.schedule_at(start);

        assert_eq!(debouncer.take_due_at(start + Duration::from_millis(49)), None);
        assert!(debouncer.is_pending());
    }

    #[test]
    fn test_due_request_fires_once() {
        let start = Instant::now();
        let mut debouncer = RecomputeDebouncer::with_delay(Duration::from_millis(50));
        let ticket = debouncer.schedule_at(start);

        let later = start + Duration::from_millis(50);
        assert_eq!(debouncer.take_due_at(later), Some(ticket));
        assert_eq!(debouncer.take_due_at(later), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_reschedule_replaces_pending() {
        let start = Instant::now();
        let mut debouncer = RecomputeDebouncer::with_delay(Duration::from_millis(50));

        debouncer.schedule_at(start);
        debouncer.schedule_at(start + Duration::from_millis(30));
        let last = debouncer.schedule_at(start + Duration::from_millis(60));
        assert_eq!(debouncer.cancelled_count(), 2);

        // The first request's deadline has passed but it was replaced
        assert_eq!(debouncer.take_due_at(start + Duration::from_millis(80)), None);
        assert_eq!(
            debouncer.take_due_at(start + Duration::from_millis(110)),
            Some(last)
        );
        assert_eq!(debouncer.take_due_at(start + Duration::from_secs(1)), None);
    }

    #[test]
    fn test_flush_ignores_deadline() {
        let mut debouncer = RecomputeDebouncer::with_delay(Duration::from_secs(10));
        let ticket = debouncer.schedule();
        assert_eq!(debouncer.flush(), Some(ticket));
        assert_eq!(debouncer.flush(), None);
    }

    #[test]
    fn test_cancel() {
        let mut debouncer = RecomputeDebouncer::new();
        assert!(!debouncer.cancel());
        debouncer.schedule();
        assert!(debouncer.cancel());
        assert!(!debouncer.is_pending());
    }
}
