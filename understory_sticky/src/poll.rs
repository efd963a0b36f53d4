// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Periodic layout poll, deferred to the next frame.
//!
//! Content reflow can change a parent's height without any scroll or resize
//! event. A repeating timer arms a frame request; the actual measurement runs
//! when the host delivers that frame, so the work lines up with rendering.
//!
//! ```
//! use understory_sticky::PollSchedule;
//!
//! let mut poll = PollSchedule::new(0);
//! assert!(!poll.on_timer(500));
//! assert!(poll.on_timer(1_000)); // request a frame
//! assert!(!poll.on_timer(2_000)); // still waiting for that frame
//! assert!(poll.take_frame());
//! assert!(!poll.take_frame());
//! ```

/// Interval between parent-height polls, in milliseconds.
pub const POLL_INTERVAL_MS: u64 = 1_000;

/// Timer state for the parent-height poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollSchedule {
    interval_ms: u64,
    next_due_ms: u64,
    frame_pending: bool,
}

impl PollSchedule {
    /// Starts a schedule at `now_ms` with the default interval.
    #[must_use]
    pub fn new(now_ms: u64) -> Self {
        Self::with_interval(now_ms, POLL_INTERVAL_MS)
    }

    /// Starts a schedule at `now_ms` ticking every `interval_ms` (at least 1).
    #[must_use]
    pub fn with_interval(now_ms: u64, interval_ms: u64) -> Self {
        let interval_ms = interval_ms.max(1);
        Self {
            interval_ms,
            next_due_ms: now_ms.saturating_add(interval_ms),
            frame_pending: false,
        }
    }

    /// The tick interval in milliseconds.
    #[must_use]
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Time of the next tick in milliseconds.
    #[must_use]
    pub fn next_due_ms(&self) -> u64 {
        self.next_due_ms
    }

    /// Returns `true` while a frame has been requested but not delivered.
    #[must_use]
    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Advances the timer to `now_ms`.
    ///
    /// Returns `true` when the host should request a frame. Missed ticks are
    /// coalesced, and no new request is made while one is still pending.
    pub fn on_timer(&mut self, now_ms: u64) -> bool {
        if now_ms < self.next_due_ms {
            return false;
        }
        let missed = (now_ms - self.next_due_ms) / self.interval_ms + 1;
        self.next_due_ms = self
            .next_due_ms
            .saturating_add(missed.saturating_mul(self.interval_ms));
        let request = !self.frame_pending;
        self.frame_pending = true;
        request
    }

    /// Consumes the pending frame, returning whether a poll should run.
    pub fn take_frame(&mut self) -> bool {
        core::mem::replace(&mut self.frame_pending, false)
    }
}

impl Default for PollSchedule {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::PollSchedule;

    #[test]
    fn ticks_on_interval() {
        let mut poll = PollSchedule::with_interval(100, 50);
        assert!(!poll.on_timer(149));
        assert!(poll.on_timer(150));
        assert_eq!(poll.next_due_ms(), 200);
        assert!(poll.take_frame());
        assert!(poll.on_timer(200));
    }

    #[test]
    fn missed_ticks_coalesce() {
        let mut poll = PollSchedule::new(0);
        assert!(poll.on_timer(5_500));
        assert_eq!(poll.next_due_ms(), 6_000);
        assert!(poll.frame_pending());
        assert!(!poll.on_timer(6_000));
        assert!(poll.take_frame());
        assert!(!poll.frame_pending());
    }

    #[test]
    fn zero_interval_is_clamped() {
        let poll = PollSchedule::with_interval(0, 0);
        assert_eq!(poll.interval_ms(), 1);
    }
}
