//! Manifest loader (strict parsing).
//!
//! A manifest declares metrics up front so a host can build a populated
//! registry from a YAML file instead of a sequence of `create_*` calls.

pub mod schema;

use std::fs;
use std::path::Path;

use crate::error::Result;

pub use schema::{AttributeDecl, CounterDecl, Manifest, RatioDecl, TimerDecl};

pub fn load_from_file(path: impl AsRef<Path>) -> Result<Manifest> {
    let s = fs::read_to_string(path)?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<Manifest> {
    let manifest: Manifest = serde_yaml::from_str(s)?;
    manifest.validate()?;
    Ok(manifest)
}
