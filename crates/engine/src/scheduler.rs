//! A single pending callback deadline with request/cancel semantics.
//!
//! Pure `Instant` arithmetic; no thread and no OS timer. The host event loop
//! asks for [`TickScheduler::timeout`] to bound its input poll and calls
//! [`TickScheduler::fire`] afterwards to learn whether the deadline passed.

use std::time::{Duration, Instant};

/// The re-arming tick timer. At most one callback is ever pending.
#[derive(Debug, Clone, Copy)]
pub struct TickScheduler {
    deadline: Option<Instant>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm the next callback `delay_ms` after `now`, replacing any pending
    /// deadline.
    pub fn request(&mut self, now: Instant, delay_ms: u32) {
        self.deadline = Some(now + Duration::from_millis(u64::from(delay_ms)));
    }

    /// Drop the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once when the pending deadline has been reached; firing
    /// disarms, and the tick handler re-arms for the next tick.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// How long the host may wait for input before the pending callback is
    /// due. `None` when nothing is armed.
    pub fn timeout(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_new_scheduler_is_disarmed() {
        let mut sched = TickScheduler::new();
        assert!(!sched.is_armed());
        assert!(!sched.fire(Instant::now()));
        assert_eq!(sched.timeout(Instant::now()), None);
    }

    #[test]
    fn test_fire_only_at_or_after_the_deadline() {
        let t0 = Instant::now();
        let mut sched = TickScheduler::new();
        sched.request(t0, 120);

        assert!(!sched.fire(t0));
        assert!(!sched.fire(t0 + ms(119)));
        assert!(sched.fire(t0 + ms(120)));
    }

    #[test]
    fn test_fire_disarms() {
        let t0 = Instant::now();
        let mut sched = TickScheduler::new();
        sched.request(t0, 60);

        assert!(sched.fire(t0 + ms(60)));
        assert!(!sched.is_armed());
        // No second firing without a new request.
        assert!(!sched.fire(t0 + ms(300)));
    }

    #[test]
    fn test_request_replaces_the_pending_deadline() {
        let t0 = Instant::now();
        let mut sched = TickScheduler::new();
        sched.request(t0, 60);
        sched.request(t0, 200);

        assert!(!sched.fire(t0 + ms(60)));
        assert!(sched.fire(t0 + ms(200)));
    }

    #[test]
    fn test_cancel_drops_the_deadline() {
        let t0 = Instant::now();
        let mut sched = TickScheduler::new();
        sched.request(t0, 60);
        sched.cancel();

        assert!(!sched.is_armed());
        assert!(!sched.fire(t0 + ms(1000)));
    }

    #[test]
    fn test_timeout_counts_down_and_clamps_to_zero() {
        let t0 = Instant::now();
        let mut sched = TickScheduler::new();
        sched.request(t0, 100);

        assert_eq!(sched.timeout(t0), Some(ms(100)));
        assert_eq!(sched.timeout(t0 + ms(40)), Some(ms(60)));
        // Past the deadline the wait is zero, not negative.
        assert_eq!(sched.timeout(t0 + ms(150)), Some(ms(0)));
    }
}
