use std::collections::HashMap;

use super::Registry;
use crate::clock::Clock;
use crate::error::{ProstataError, Result};
use crate::metric::{Counter, MetricKind};

impl<C: Clock> Registry<C> {
    /// Register a counter. Pass `DEFAULT_UNIT` for the usual "item" unit.
    pub fn create_counter(
        &mut self,
        name: &str,
        value: i64,
        unit: &str,
        label: Option<&str>,
    ) -> Result<()> {
        self.admit(name, MetricKind::Counter)?;
        let counter = Counter::new(value, unit.to_string(), label.unwrap_or(name).to_string());
        self.counters.insert(name.to_string(), counter);
        self.reserve(name, MetricKind::Counter);
        Ok(())
    }

    pub fn counter_value(&self, name: &str) -> Result<i64> {
        self.counter(name).map(|c| c.value)
    }

    /// Add `amount`. No floor or ceiling besides the `i64` range.
    pub fn increment(&mut self, name: &str, amount: i64) -> Result<()> {
        let counter = self.counter_mut(name)?;
        counter.value = counter.value.saturating_add(amount);
        Ok(())
    }

    /// Subtract `amount`. The result may go negative.
    pub fn decrement(&mut self, name: &str, amount: i64) -> Result<()> {
        let counter = self.counter_mut(name)?;
        counter.value = counter.value.saturating_sub(amount);
        Ok(())
    }

    /// Overwrite the value.
    pub fn reset_counter(&mut self, name: &str, value: i64) -> Result<()> {
        self.counter_mut(name)?.value = value;
        Ok(())
    }

    pub fn counter_unit(&self, name: &str) -> Result<&str> {
        self.counter(name).map(|c| c.unit.as_str())
    }

    /// Overwrite the unit; the value is untouched.
    pub fn set_unit(&mut self, name: &str, unit: impl Into<String>) -> Result<()> {
        self.counter_mut(name)?.unit = unit.into();
        Ok(())
    }

    /// Copy of every counter record.
    pub fn counters(&self) -> HashMap<String, Counter> {
        self.counters.snapshot()
    }

    pub fn counter_names(&self) -> Vec<String> {
        self.counters.names()
    }

    pub fn counter_entries(&self) -> impl Iterator<Item = (&str, &Counter)> + '_ {
        self.counters.iter()
    }

    pub fn counter(&self, name: &str) -> Result<&Counter> {
        self.counters
            .get(name)
            .ok_or_else(|| ProstataError::not_found(MetricKind::Counter, name))
    }

    fn counter_mut(&mut self, name: &str) -> Result<&mut Counter> {
        self.counters
            .get_mut(name)
            .ok_or_else(|| ProstataError::not_found(MetricKind::Counter, name))
    }
}
