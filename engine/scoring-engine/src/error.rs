//! Error types for the scoring engine

use fantasy_registry::RegistryError;
use thiserror::Error;

/// Result type for scoring operations
pub type Result<T> = std::result::Result<T, ScoringError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error("Round data is inconsistent: {0}")]
    Registry(#[from] RegistryError),

    #[error("Invalid value {value:?} for {key}")]
    InvalidConfig { key: String, value: String },
}
