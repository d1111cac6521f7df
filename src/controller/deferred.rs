use std::time::{Duration, Instant};

pub const LOGIN_TRANSITION: Duration = Duration::from_millis(350);
pub const AUTO_OPEN_DELAY: Duration = Duration::from_millis(500);
pub const PULSE_FADE_OUT: Duration = Duration::from_millis(1500);
pub const DRAG_RELEASE_DEBOUNCE: Duration = Duration::from_millis(100);

/// A fire-once action scheduled against the frame clock.
///
/// The owner polls it every frame with the current instant; once due, `poll`
/// hands the payload out exactly once. `cancel` drops a pending payload so a
/// torn-down owner never acts on stale state.
#[derive(Debug, Clone)]
pub struct Deferred<T> {
    due: Instant,
    payload: Option<T>,
}

impl<T> Deferred<T> {
    pub fn new(now: Instant, delay: Duration, payload: T) -> Self {
        Deferred { due: now + delay, payload: Some(payload) }
    }

    pub fn is_pending(&self) -> bool {
        self.payload.is_some()
    }

    pub fn cancel(&mut self) {
        self.payload = None;
    }

    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if now >= self.due { self.payload.take() } else { None }
    }

    /// Time left until the action fires, if it is still pending.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.payload.as_ref().map(|_| self.due.saturating_duration_since(now))
    }
}

/// Earliest remaining delay across a set of optional timers; the GUI uses it to
/// schedule its next repaint.
pub fn next_wakeup(remaining: impl IntoIterator<Item = Option<Duration>>) -> Option<Duration> {
    remaining.into_iter().flatten().min()
}
