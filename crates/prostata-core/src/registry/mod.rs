//! The metrics registry.
//!
//! One `Registry` owns four collections plus the set of every name ever
//! registered. Per-kind operations live in the sibling modules; this module
//! holds name governance and the cross-kind introspection accessors.

mod attributes;
mod collection;
mod counters;
mod ratios;
mod timers;

use std::collections::{HashMap, HashSet};

use crate::clock::{Clock, MonotonicClock};
use crate::error::{ProstataError, Result};
use crate::metric::{Attribute, Counter, Labeled, MetricKind, Ratio, Timer};
use crate::name::{validate_format, validate_not_reserved};

use collection::Collection;

/// Named timers, counters, ratios and attributes in a single namespace.
///
/// Not internally synchronized. Share it behind a `Mutex` if needed.
#[derive(Debug, Clone)]
pub struct Registry<C: Clock = MonotonicClock> {
    clock: C,
    timers: Collection<Timer>,
    counters: Collection<Counter>,
    ratios: Collection<Ratio>,
    attributes: Collection<Attribute>,
    names: HashSet<String>,
}

impl Registry<MonotonicClock> {
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock)
    }
}

impl Default for Registry<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Registry<C> {
    /// Build a registry reading time from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            timers: Collection::default(),
            counters: Collection::default(),
            ratios: Collection::default(),
            attributes: Collection::default(),
            names: HashSet::new(),
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Run every name rule: format, then reserved words, then uniqueness.
    fn admit(&self, name: &str, kind: MetricKind) -> Result<()> {
        let res = validate_format(name)
            .and_then(|_| validate_not_reserved(name))
            .and_then(|_| self.validate_unique(name));
        if let Err(e) = &res {
            tracing::debug!(metric = name, kind = kind.as_str(), error = %e, "registration rejected");
        }
        res
    }

    fn validate_unique(&self, name: &str) -> Result<()> {
        if self.is_used(name) {
            return Err(ProstataError::AlreadyExists(name.to_string()));
        }
        Ok(())
    }

    /// Reserve `name` in the shared set. Only called after `admit` succeeded.
    fn reserve(&mut self, name: &str, kind: MetricKind) {
        self.names.insert(name.to_string());
        tracing::debug!(metric = name, kind = kind.as_str(), "registered");
    }

    pub fn is_used(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Which collection holds `name`, if any.
    pub fn kind_of(&self, name: &str) -> Option<MetricKind> {
        if self.timers.contains(name) {
            Some(MetricKind::Timer)
        } else if self.counters.contains(name) {
            Some(MetricKind::Counter)
        } else if self.ratios.contains(name) {
            Some(MetricKind::Ratio)
        } else if self.attributes.contains(name) {
            Some(MetricKind::Attribute)
        } else {
            None
        }
    }

    /// Every registered name across all kinds.
    pub fn used_names(&self) -> HashSet<String> {
        self.names.clone()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Current label of any entity.
    pub fn label(&self, name: &str) -> Result<&str> {
        let label = match self.kind_of(name) {
            Some(MetricKind::Timer) => self.timers.get(name).map(Labeled::label),
            Some(MetricKind::Counter) => self.counters.get(name).map(Labeled::label),
            Some(MetricKind::Ratio) => self.ratios.get(name).map(Labeled::label),
            Some(MetricKind::Attribute) => self.attributes.get(name).map(Labeled::label),
            None => None,
        };
        label.ok_or_else(|| unknown(name))
    }

    /// Relabel an entity of any kind. Labels need not be unique.
    pub fn set_label(&mut self, name: &str, label: impl Into<String>) -> Result<()> {
        let label = label.into();
        let record: Option<&mut dyn Labeled> = match self.kind_of(name) {
            Some(MetricKind::Timer) => self.timers.get_mut(name).map(|r| r as &mut dyn Labeled),
            Some(MetricKind::Counter) => self.counters.get_mut(name).map(|r| r as &mut dyn Labeled),
            Some(MetricKind::Ratio) => self.ratios.get_mut(name).map(|r| r as &mut dyn Labeled),
            Some(MetricKind::Attribute) => {
                self.attributes.get_mut(name).map(|r| r as &mut dyn Labeled)
            }
            None => None,
        };
        record.ok_or_else(|| unknown(name))?.set_label(label);
        Ok(())
    }

    /// name -> label over all four kinds.
    pub fn labels(&self) -> HashMap<String, String> {
        let mut out = self.timers.labels();
        out.extend(self.counters.labels());
        out.extend(self.ratios.labels());
        out.extend(self.attributes.labels());
        out
    }

    pub fn timer_labels(&self) -> HashMap<String, String> {
        self.timers.labels()
    }

    pub fn counter_labels(&self) -> HashMap<String, String> {
        self.counters.labels()
    }

    pub fn ratio_labels(&self) -> HashMap<String, String> {
        self.ratios.labels()
    }

    pub fn attribute_labels(&self) -> HashMap<String, String> {
        self.attributes.labels()
    }

    /// Names of one kind in registration order.
    pub fn names_of(&self, kind: MetricKind) -> Vec<String> {
        match kind {
            MetricKind::Timer => self.timers.names(),
            MetricKind::Counter => self.counters.names(),
            MetricKind::Ratio => self.ratios.names(),
            MetricKind::Attribute => self.attributes.names(),
        }
    }

    /// Number of entities of one kind.
    pub fn count_of(&self, kind: MetricKind) -> usize {
        match kind {
            MetricKind::Timer => self.timers.len(),
            MetricKind::Counter => self.counters.len(),
            MetricKind::Ratio => self.ratios.len(),
            MetricKind::Attribute => self.attributes.len(),
        }
    }
}

fn unknown(name: &str) -> ProstataError {
    ProstataError::NotFound { kind: None, name: name.to_string() }
}
