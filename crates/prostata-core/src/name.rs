//! Name governance.
//!
//! Rules, checked in this order before any collection is touched:
//! - format: non-empty, only `a-z`, `0-9` and `_`
//! - not a reserved word (case-sensitive)
//! - not already registered under any kind (checked by the registry)

use crate::error::{NameRejection, ProstataError, Result};

/// Words that can never be used as metric names.
pub const RESERVED_WORDS: [&str; 8] = [
    "timer",
    "counter",
    "ratio",
    "attribute",
    "timers",
    "counters",
    "ratios",
    "attributes",
];

/// Reject anything outside `^[a-z0-9_]+$`.
pub fn validate_format(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(rejected(name, NameRejection::Empty));
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_'))
    {
        return Err(rejected(name, NameRejection::BadCharacter(c)));
    }
    Ok(())
}

/// Reject the reserved words.
pub fn validate_not_reserved(name: &str) -> Result<()> {
    if is_reserved(name) {
        return Err(rejected(name, NameRejection::Reserved));
    }
    Ok(())
}

/// Whether `name` is one of `RESERVED_WORDS`.
pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

fn rejected(name: &str, reason: NameRejection) -> ProstataError {
    ProstataError::InvalidName { name: name.to_string(), reason }
}
