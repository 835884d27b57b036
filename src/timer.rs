//! Single-shot deferred transitions for the event loop.

use std::time::{Duration, Instant};

/// Holds at most one pending value that becomes due at a deadline.
#[derive(Debug)]
pub struct OneShot<T> {
    pending: Option<(Instant, T)>,
}

impl<T> Default for OneShot<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> OneShot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer, replacing whatever was pending.
    pub fn schedule(&mut self, now: Instant, delay: Duration, value: T) {
        self.pending = Some((now + delay, value));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    /// Take the pending value if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if *deadline <= now => self.pending.take().map(|(_, value)| value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(900);

    #[test]
    fn test_fires_once_after_deadline() {
        let start = Instant::now();
        let mut timer = OneShot::new();
        timer.schedule(start, DELAY, "next");

        assert_eq!(timer.deadline(), Some(start + DELAY));
        assert_eq!(timer.take_due(start + Duration::from_millis(899)), None);
        assert_eq!(timer.take_due(start + DELAY), Some("next"));
        assert_eq!(timer.take_due(start + DELAY * 2), None);
        assert_eq!(timer.deadline(), None);
    }

    #[test]
    fn test_cancel_discards_pending() {
        let start = Instant::now();
        let mut timer = OneShot::new();
        timer.schedule(start, DELAY, 1);
        timer.cancel();

        assert_eq!(timer.deadline(), None);
        assert_eq!(timer.take_due(start + DELAY), None);
    }

    #[test]
    fn test_schedule_replaces_pending() {
        let start = Instant::now();
        let mut timer = OneShot::new();
        timer.schedule(start, DELAY, 1);
        timer.schedule(start, DELAY * 2, 2);

        assert_eq!(timer.take_due(start + DELAY), None);
        assert_eq!(timer.take_due(start + DELAY * 2), Some(2));
    }
}
