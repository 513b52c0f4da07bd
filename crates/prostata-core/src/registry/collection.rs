use std::collections::HashMap;

use crate::metric::Labeled;

/// Name-keyed records that remember registration order.
#[derive(Debug, Clone)]
pub(crate) struct Collection<T> {
    entries: HashMap<String, T>,
    order: Vec<String>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T: Clone + Labeled> Collection<T> {
    /// Caller guarantees `name` is not present yet.
    pub(crate) fn insert(&mut self, name: String, record: T) {
        self.order.push(name.clone());
        self.entries.insert(name, record);
    }

    pub(crate) fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        self.entries.get_mut(name)
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Entries in registration order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &T)> + '_ {
        self.order
            .iter()
            .filter_map(|n| self.entries.get(n).map(|r| (n.as_str(), r)))
    }

    pub(crate) fn names(&self) -> Vec<String> {
        self.order.clone()
    }

    pub(crate) fn snapshot(&self) -> HashMap<String, T> {
        self.entries.clone()
    }

    pub(crate) fn labels(&self) -> HashMap<String, String> {
        self.entries
            .iter()
            .map(|(n, r)| (n.clone(), r.label().to_string()))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
