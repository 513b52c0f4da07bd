use std::collections::HashMap;

use super::Registry;
use crate::clock::Clock;
use crate::error::{ProstataError, Result};
use crate::metric::{MetricKind, Ratio};

impl<C: Clock> Registry<C> {
    /// Register a ratio over two existing names.
    ///
    /// References are checked against the shared name set, not the counter
    /// collection: a ratio over a timer or attribute is accepted here and
    /// fails with `NotFound` when read.
    pub fn create_ratio(
        &mut self,
        name: &str,
        numerator: &str,
        denominator: &str,
        label: Option<&str>,
    ) -> Result<()> {
        self.admit(name, MetricKind::Ratio)?;
        for reference in [numerator, denominator] {
            if !self.is_used(reference) {
                return Err(ProstataError::NotFound { kind: None, name: reference.to_string() });
            }
            if self.kind_of(reference) != Some(MetricKind::Counter) {
                tracing::warn!(
                    metric = name,
                    reference,
                    "ratio references a name that is not a counter; reads will fail"
                );
            }
        }

        let ratio = Ratio::new(
            numerator.to_string(),
            denominator.to_string(),
            label.unwrap_or(name).to_string(),
        );
        self.ratios.insert(name.to_string(), ratio);
        self.reserve(name, MetricKind::Ratio);
        Ok(())
    }

    /// numerator / denominator from the counters' current values.
    /// A zero denominator yields `0.0`.
    pub fn ratio_value(&self, name: &str) -> Result<f64> {
        let ratio = self.ratio(name)?;
        let num = self.counter_value(&ratio.numerator)?;
        let den = self.counter_value(&ratio.denominator)?;
        Ok(Ratio::compute(num, den))
    }

    /// Copy of every ratio record.
    pub fn ratios(&self) -> HashMap<String, Ratio> {
        self.ratios.snapshot()
    }

    pub fn ratio_names(&self) -> Vec<String> {
        self.ratios.names()
    }

    pub fn ratio_entries(&self) -> impl Iterator<Item = (&str, &Ratio)> + '_ {
        self.ratios.iter()
    }

    pub fn ratio(&self, name: &str) -> Result<&Ratio> {
        self.ratios
            .get(name)
            .ok_or_else(|| ProstataError::not_found(MetricKind::Ratio, name))
    }
}
