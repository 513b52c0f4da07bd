//! Accumulating stopwatch.
//!
//! State rules:
//! - `running_since` is `Some` only while started.
//! - `stop` folds the open segment into `accumulated` and clears `running_since`.
//! - `start` on a running timer and `stop` on a stopped one are no-ops.

use std::time::{Duration, Instant};

/// Elapsed wall time, possibly accumulated over several start/stop segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Timer {
    pub running_since: Option<Instant>,
    pub last_stop: Option<Instant>,
    /// Number of stopped -> running transitions.
    pub segments: u32,
    /// Sum of all completed segments.
    pub accumulated: Duration,
    pub label: String,
}

impl Timer {
    pub fn new(label: String) -> Self {
        Self {
            running_since: None,
            last_stop: None,
            segments: 0,
            accumulated: Duration::ZERO,
            label,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    /// Returns `true` if this call opened a new segment.
    pub(crate) fn start(&mut self, now: Instant) -> bool {
        if self.running_since.is_some() {
            return false;
        }
        self.running_since = Some(now);
        self.segments = self.segments.saturating_add(1);
        true
    }

    /// Returns the closed segment, or `None` if the timer was not running.
    pub(crate) fn stop(&mut self, now: Instant) -> Option<Duration> {
        let since = self.running_since.take()?;
        let delta = now.saturating_duration_since(since);
        self.accumulated += delta;
        self.last_stop = Some(now);
        Some(delta)
    }

    /// Completed segments plus the open one, measured at `now`.
    pub fn elapsed_at(&self, now: Instant) -> Duration {
        match self.running_since {
            Some(since) => self.accumulated + now.saturating_duration_since(since),
            None => self.accumulated,
        }
    }

    /// Completed segments only, in seconds.
    pub fn accumulated_seconds(&self) -> f64 {
        self.accumulated.as_secs_f64()
    }
}
