//! Error surface of the registry.

use std::fmt;

use thiserror::Error;

use crate::metric::MetricKind;

/// Stable error codes, independent of message wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Name fails format rules or is a reserved word.
    InvalidName,
    /// Name is already registered under some kind.
    AlreadyExists,
    /// Name is unknown in the collection the operation expects.
    NotFound,
}

impl ErrorCode {
    /// String representation used in test vectors and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidName => "INVALID_NAME",
            ErrorCode::AlreadyExists => "ALREADY_EXISTS",
            ErrorCode::NotFound => "NOT_FOUND",
        }
    }
}

/// Why a name was refused at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRejection {
    /// The name has no characters.
    Empty,
    /// First character outside `a-z`, `0-9` and `_`.
    BadCharacter(char),
    /// One of the reserved kind words.
    Reserved,
}

impl fmt::Display for NameRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameRejection::Empty => f.write_str("name is empty"),
            NameRejection::BadCharacter(c) => {
                write!(f, "character {c:?} is not a lowercase letter, digit or underscore")
            }
            NameRejection::Reserved => f.write_str("name is a reserved word"),
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ProstataError>;

/// Registry error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProstataError {
    #[error("invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: NameRejection },
    #[error("name '{0}' already exists; names cannot repeat across timers, counters, ratios and attributes")]
    AlreadyExists(String),
    #[error("{} '{name}' does not exist", kind_label(.kind))]
    NotFound {
        /// Collection the caller expected; `None` when any kind would do.
        kind: Option<MetricKind>,
        name: String,
    },
}

fn kind_label(kind: &Option<MetricKind>) -> &'static str {
    kind.map(MetricKind::as_str).unwrap_or("metric")
}

impl ProstataError {
    pub(crate) fn not_found(kind: MetricKind, name: &str) -> Self {
        ProstataError::NotFound { kind: Some(kind), name: name.to_string() }
    }

    /// Map to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            ProstataError::InvalidName { .. } => ErrorCode::InvalidName,
            ProstataError::AlreadyExists(_) => ErrorCode::AlreadyExists,
            ProstataError::NotFound { .. } => ErrorCode::NotFound,
        }
    }
}
