use std::collections::HashMap;
use std::time::Duration;

use super::Registry;
use crate::clock::Clock;
use crate::error::{ProstataError, Result};
use crate::metric::{MetricKind, Timer};

impl<C: Clock> Registry<C> {
    /// Register a stopped timer. The label defaults to the name.
    pub fn create_timer(&mut self, name: &str, label: Option<&str>) -> Result<()> {
        self.admit(name, MetricKind::Timer)?;
        let timer = Timer::new(label.unwrap_or(name).to_string());
        self.timers.insert(name.to_string(), timer);
        self.reserve(name, MetricKind::Timer);
        Ok(())
    }

    /// Open a new segment. Starting a running timer does nothing.
    pub fn start_timer(&mut self, name: &str) -> Result<()> {
        let now = self.clock.now();
        let timer = self.timer_mut(name)?;
        if timer.start(now) {
            tracing::trace!(metric = name, segments = timer.segments, "timer started");
        }
        Ok(())
    }

    /// Close the open segment. Stopping a stopped timer does nothing.
    pub fn stop_timer(&mut self, name: &str) -> Result<()> {
        let now = self.clock.now();
        let timer = self.timer_mut(name)?;
        if let Some(delta) = timer.stop(now) {
            tracing::trace!(metric = name, delta_secs = delta.as_secs_f64(), "timer stopped");
        }
        Ok(())
    }

    /// Elapsed seconds, including the live segment of a running timer.
    pub fn elapsed(&self, name: &str) -> Result<f64> {
        self.elapsed_duration(name).map(|d| d.as_secs_f64())
    }

    pub fn elapsed_duration(&self, name: &str) -> Result<Duration> {
        let timer = self.timer(name)?;
        Ok(timer.elapsed_at(self.clock.now()))
    }

    pub fn is_running(&self, name: &str) -> Result<bool> {
        self.timer(name).map(Timer::is_running)
    }

    /// How many times the timer went from stopped to running.
    pub fn segments(&self, name: &str) -> Result<u32> {
        self.timer(name).map(|t| t.segments)
    }

    /// Copy of every timer record.
    pub fn timers(&self) -> HashMap<String, Timer> {
        self.timers.snapshot()
    }

    pub fn timer_names(&self) -> Vec<String> {
        self.timers.names()
    }

    /// Timers in registration order, borrowed.
    pub fn timer_entries(&self) -> impl Iterator<Item = (&str, &Timer)> + '_ {
        self.timers.iter()
    }

    pub fn timer(&self, name: &str) -> Result<&Timer> {
        self.timers
            .get(name)
            .ok_or_else(|| ProstataError::not_found(MetricKind::Timer, name))
    }

    fn timer_mut(&mut self, name: &str) -> Result<&mut Timer> {
        self.timers
            .get_mut(name)
            .ok_or_else(|| ProstataError::not_found(MetricKind::Timer, name))
    }
}
