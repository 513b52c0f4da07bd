//! prostata core: an in-process registry of named timers, counters, ratios
//! and attributes sharing one uniqueness-checked namespace.
//!
//! The registry holds values and computes derived ones on demand. It does no
//! I/O, spawns nothing and takes no locks; wrap it in a `Mutex` if it must be
//! shared across threads.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Every misuse surfaces as `ProstataError` so a host application never
//! crashes because of a bad metric name.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod clock;
pub mod error;
pub mod metric;
pub mod name;
pub mod registry;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use error::{ErrorCode, NameRejection, ProstataError, Result};
pub use metric::{Attribute, AttributeValue, Counter, MetricKind, Ratio, Timer, DEFAULT_UNIT};
pub use registry::Registry;
