use std::collections::HashSet;

use serde::Deserialize;

use prostata_core::name::{validate_format, validate_not_reserved};
use prostata_core::{AttributeValue, Clock, ProstataError, Registry, DEFAULT_UNIT};

use crate::error::{ManifestError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub version: u32,

    #[serde(default)]
    pub timers: Vec<TimerDecl>,

    #[serde(default)]
    pub counters: Vec<CounterDecl>,

    #[serde(default)]
    pub attributes: Vec<AttributeDecl>,

    #[serde(default)]
    pub ratios: Vec<RatioDecl>,
}

impl Manifest {
    /// Checks that need no registry. Name rules are left to the registry.
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ManifestError::UnsupportedVersion(self.version));
        }

        let mut seen = HashSet::new();
        for name in self.declared_names() {
            if !seen.insert(name) {
                return Err(ManifestError::Invalid(format!("duplicate name: {name}")));
            }
        }
        Ok(())
    }

    /// Declared names in application order.
    pub fn declared_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.timers
            .iter()
            .map(|t| t.name.as_str())
            .chain(self.counters.iter().map(|c| c.name.as_str()))
            .chain(self.attributes.iter().map(|a| a.name.as_str()))
            .chain(self.ratios.iter().map(|r| r.name.as_str()))
    }

    /// Run the registry's name rules and ratio reference checks against
    /// `registry` without registering anything.
    pub fn check<C: Clock>(&self, registry: &Registry<C>) -> Result<()> {
        for name in self.declared_names() {
            validate_format(name)?;
            validate_not_reserved(name)?;
            if registry.is_used(name) {
                return Err(ProstataError::AlreadyExists(name.to_string()).into());
            }
        }

        // A ratio may reference anything registered before it.
        let mut visible: HashSet<&str> = self
            .timers
            .iter()
            .map(|t| t.name.as_str())
            .chain(self.counters.iter().map(|c| c.name.as_str()))
            .chain(self.attributes.iter().map(|a| a.name.as_str()))
            .collect();
        for r in &self.ratios {
            for reference in [r.numerator.as_str(), r.denominator.as_str()] {
                if !visible.contains(reference) && !registry.is_used(reference) {
                    return Err(ProstataError::NotFound {
                        kind: None,
                        name: reference.to_string(),
                    }
                    .into());
                }
            }
            visible.insert(r.name.as_str());
        }
        Ok(())
    }

    /// Register every declaration: timers, counters, attributes, then ratios.
    ///
    /// All entries are checked first; a rejected manifest leaves the
    /// registry untouched.
    pub fn apply<C: Clock>(&self, registry: &mut Registry<C>) -> Result<()> {
        self.check(registry)?;
        for t in &self.timers {
            registry.create_timer(&t.name, t.label.as_deref())?;
        }
        for c in &self.counters {
            registry.create_counter(&c.name, c.value, &c.unit, c.label.as_deref())?;
        }
        for a in &self.attributes {
            registry.create_attribute(&a.name, a.value.clone(), a.label.as_deref())?;
        }
        for r in &self.ratios {
            registry.create_ratio(&r.name, &r.numerator, &r.denominator, r.label.as_deref())?;
        }
        tracing::debug!(metrics = registry.len(), "manifest applied");
        Ok(())
    }

    /// Apply to a fresh registry.
    pub fn build(&self) -> Result<Registry> {
        let mut registry = Registry::new();
        self.apply(&mut registry)?;
        Ok(registry)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimerDecl {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CounterDecl {
    pub name: String,
    #[serde(default)]
    pub value: i64,
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(default)]
    pub label: Option<String>,
}

fn default_unit() -> String {
    DEFAULT_UNIT.into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributeDecl {
    pub name: String,
    #[serde(default)]
    pub value: AttributeValue,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RatioDecl {
    pub name: String,
    pub numerator: String,
    pub denominator: String,
    #[serde(default)]
    pub label: Option<String>,
}
