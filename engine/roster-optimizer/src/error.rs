//! Error types for the roster optimizer

use scoring_engine::ScoringError;
use thiserror::Error;

/// Result type for optimizer operations
pub type Result<T> = std::result::Result<T, OptimizerError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptimizerError {
    #[error("Scoring error: {0}")]
    Scoring(#[from] ScoringError),

    #[error("Need {required} {kind} for a roster but only {available} are eligible")]
    NotEnoughEntities { kind: &'static str, required: usize, available: usize },

    #[error("Invalid value {value:?} for {key}")]
    InvalidConfig { key: String, value: String },
}
