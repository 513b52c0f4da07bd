//! Metric records held by the registry.
//!
//! Records returned from snapshot accessors are copies; mutating them has no
//! effect on the registry.

pub mod attribute;
pub mod counter;
pub mod ratio;
pub mod timer;

use serde::Serialize;

pub use attribute::{Attribute, AttributeValue};
pub use counter::{Counter, DEFAULT_UNIT};
pub use ratio::Ratio;
pub use timer::Timer;

/// The four metric kinds sharing one namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Timer,
    Counter,
    Ratio,
    Attribute,
}

impl MetricKind {
    pub const ALL: [MetricKind; 4] = [
        MetricKind::Timer,
        MetricKind::Counter,
        MetricKind::Ratio,
        MetricKind::Attribute,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Timer => "timer",
            MetricKind::Counter => "counter",
            MetricKind::Ratio => "ratio",
            MetricKind::Attribute => "attribute",
        }
    }
}

/// Records carrying a display label.
pub(crate) trait Labeled {
    fn label(&self) -> &str;
    fn set_label(&mut self, label: String);
}

macro_rules! impl_labeled {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Labeled for $ty {
                fn label(&self) -> &str {
                    &self.label
                }
                fn set_label(&mut self, label: String) {
                    self.label = label;
                }
            }
        )+
    };
}

impl_labeled!(Timer, Counter, Ratio, Attribute);
