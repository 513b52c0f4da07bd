/// Unit given to counters created without one.
pub const DEFAULT_UNIT: &str = "item";

/// Signed integer quantity with a free-form unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    /// May go negative. Arithmetic saturates at the `i64` bounds.
    pub value: i64,
    pub unit: String,
    pub label: String,
}

impl Counter {
    pub fn new(value: i64, unit: String, label: String) -> Self {
        Self { value, unit, label }
    }
}
