use std::collections::HashMap;

use super::Registry;
use crate::clock::Clock;
use crate::error::{ProstataError, Result};
use crate::metric::{Attribute, AttributeValue, MetricKind};

impl<C: Clock> Registry<C> {
    /// Register an attribute. `AttributeValue::default()` is the empty string.
    pub fn create_attribute(
        &mut self,
        name: &str,
        value: impl Into<AttributeValue>,
        label: Option<&str>,
    ) -> Result<()> {
        self.admit(name, MetricKind::Attribute)?;
        let attribute = Attribute::new(value.into(), label.unwrap_or(name).to_string());
        self.attributes.insert(name.to_string(), attribute);
        self.reserve(name, MetricKind::Attribute);
        Ok(())
    }

    pub fn attribute_value(&self, name: &str) -> Result<&AttributeValue> {
        self.attribute(name).map(|a| &a.value)
    }

    /// Overwrite the value. The variant may differ from the previous one.
    pub fn set_attribute_value(
        &mut self,
        name: &str,
        value: impl Into<AttributeValue>,
    ) -> Result<()> {
        let attribute = self
            .attributes
            .get_mut(name)
            .ok_or_else(|| ProstataError::not_found(MetricKind::Attribute, name))?;
        attribute.value = value.into();
        Ok(())
    }

    /// Copy of every attribute record.
    pub fn attributes(&self) -> HashMap<String, Attribute> {
        self.attributes.snapshot()
    }

    pub fn attribute_names(&self) -> Vec<String> {
        self.attributes.names()
    }

    pub fn attribute_entries(&self) -> impl Iterator<Item = (&str, &Attribute)> + '_ {
        self.attributes.iter()
    }

    pub fn attribute(&self, name: &str) -> Result<&Attribute> {
        self.attributes
            .get(name)
            .ok_or_else(|| ProstataError::not_found(MetricKind::Attribute, name))
    }
}
