use thiserror::Error;

/// Top-level error type for the BizAssist system.
///
/// Each variant wraps a subsystem-specific failure. Subsystem crates define
/// their own error types and implement `From<SubsystemError> for BizError`
/// so that the `?` operator works seamlessly across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BizError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Completion error: {0}")]
    Completion(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for BizError {
    fn from(err: serde_json::Error) -> Self {
        BizError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for BizError {
    fn from(err: toml::de::Error) -> Self {
        BizError::Config(err.to_string())
    }
}

/// Convenience alias used across all BizAssist crates.
pub type Result<T> = std::result::Result<T, BizError>;
