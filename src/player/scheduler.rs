//! Frame scheduling port for the playback authority.
//!
//! The authority never owns a loop. It asks its scheduler for the next tick
//! while it has work (advancing playback or queued commands) and cancels when
//! it goes idle. At most one tick is ever pending; requesting again while one
//! is pending is a no-op.

use std::time::{Duration, Instant};

/// Scheduling port injected into the authority.
pub trait TickScheduler {
    /// Ask for one more tick. Idempotent while a tick is pending.
    fn request_tick(&mut self);

    /// Drop the pending tick, if any.
    fn cancel_tick(&mut self);

    /// Whether a tick is currently pending.
    fn is_scheduled(&self) -> bool;
}

/// Scheduler driven by hand: tests and headless drivers call
/// [`ManualScheduler::take`] to decide whether to run a tick.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pending: bool,
    requests: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the pending tick. Returns false if none was requested.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    /// Number of times a tick was newly scheduled.
    pub fn requests(&self) -> usize {
        self.requests
    }
}

impl TickScheduler for ManualScheduler {
    fn request_tick(&mut self) {
        if !self.pending {
            self.pending = true;
            self.requests += 1;
        }
    }

    fn cancel_tick(&mut self) {
        self.pending = false;
    }

    fn is_scheduled(&self) -> bool {
        self.pending
    }
}

/// Display-paced scheduler with a fixed frame interval.
///
/// The event loop waits on [`FrameScheduler::poll_timeout`] for input and
/// runs a tick once [`FrameScheduler::take_due`] reports the deadline passed.
#[derive(Debug)]
pub struct FrameScheduler {
    interval: Duration,
    deadline: Option<Instant>,
}

impl FrameScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// How long the loop may block waiting for input.
    ///
    /// With no tick pending this is `idle_wait`, so input is still serviced.
    pub fn poll_timeout(&self, now: Instant, idle_wait: Duration) -> Duration {
        match self.deadline {
            Some(deadline) => deadline.saturating_duration_since(now),
            None => idle_wait,
        }
    }

    /// Consume the pending tick if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl TickScheduler for FrameScheduler {
    fn request_tick(&mut self) {
        if self.deadline.is_none() {
            self.deadline = Some(Instant::now() + self.interval);
        }
    }

    fn cancel_tick(&mut self) {
        self.deadline = None;
    }

    fn is_scheduled(&self) -> bool {
        self.deadline.is_some()
    }
}
