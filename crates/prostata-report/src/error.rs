//! Errors raised while loading manifests and rendering reports.

use thiserror::Error;

use prostata_core::ProstataError;

pub type Result<T> = std::result::Result<T, ManifestError>;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("read manifest failed: {0}")]
    Read(#[from] std::io::Error),
    #[error("invalid yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported manifest version {0} (expected 1)")]
    UnsupportedVersion(u32),
    #[error("invalid manifest: {0}")]
    Invalid(String),
    #[error("registry rejected manifest entry: {0}")]
    Registry(#[from] ProstataError),
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl ManifestError {
    /// Stable code for callers and tests.
    pub fn code(&self) -> &'static str {
        match self {
            ManifestError::Read(_) => "READ_FAILED",
            ManifestError::Yaml(_) => "BAD_MANIFEST",
            ManifestError::UnsupportedVersion(_) => "UNSUPPORTED_VERSION",
            ManifestError::Invalid(_) => "BAD_MANIFEST",
            ManifestError::Registry(e) => e.code().as_str(),
            ManifestError::Json(_) => "ENCODE_FAILED",
        }
    }
}
