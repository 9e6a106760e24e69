use thiserror::Error;

/// Errors that can occur while normalizing text with an explicit config.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
