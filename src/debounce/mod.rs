//! Deferred value, released only after a quiescent interval.
//!
//! The debouncer owns no timer and no thread: time is passed in explicitly, so that
//! the owner decides how to wait (an event loop, `recv_timeout`, a test clock).
//! At most one value is pending at any time; scheduling a new one cancels the
//! previous.

use std::time::{Duration, Instant};

#[cfg(test)] mod tests;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
struct Pending<T> {
  value: T,
  deadline: Instant
}

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
  delay: Duration,
  pending: Option<Pending<T>>
}

impl<T> Default for Debouncer<T> {
  fn default() -> Self {
    Self::new(DEFAULT_DELAY)
  }
}

impl<T> Debouncer<T> {
  pub fn new(delay: Duration) -> Self {
    Self { delay, pending: None }
  }

  pub fn delay(&self) -> Duration {
    self.delay
  }

  /// Schedule `value` to be released at `now + delay`.
  /// Returns the value it superseded, if any.
  pub fn schedule(&mut self, value: T, now: Instant) -> Option<T> {
    self.pending
      .replace(Pending { value, deadline: now + self.delay })
      .map(|cancelled| cancelled.value)
  }

  pub fn cancel(&mut self) -> Option<T> {
    self.pending.take().map(|pending| pending.value)
  }

  pub fn is_pending(&self) -> bool {
    self.pending.is_some()
  }

  pub fn peek(&self) -> Option<&T> {
    self.pending.as_ref().map(|pending| &pending.value)
  }

  pub fn deadline(&self) -> Option<Instant> {
    self.pending.as_ref().map(|pending| pending.deadline)
  }

  /// Remaining wait, zero when overdue, `None` when idle.
  pub fn time_left(&self, now: Instant) -> Option<Duration> {
    self.deadline().map(|deadline| deadline.saturating_duration_since(now))
  }

  /// Release the pending value once its deadline has passed.
  pub fn poll(&mut self, now: Instant) -> Option<T> {
    match self.deadline() {
      Some(deadline) if now >= deadline => self.cancel(),
      _ => None
    }
  }
}
