//! prostata host tooling.
//!
//! Loads YAML manifests into a `Registry` and renders registry contents as
//! text or JSON. Used by the `prostata-report` binary and by hosts that want
//! the same behaviour in-process.

pub mod config;
pub mod error;
pub mod render;

pub use error::{ManifestError, Result};
pub use render::Report;
