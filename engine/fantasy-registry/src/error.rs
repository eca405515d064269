//! Error types for the fantasy registry

use crate::types::{DriverId, Session};
use thiserror::Error;

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors raised while loading or validating round data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("{session} position {position} is outside 1..=20")]
    PositionOutOfRange { session: Session, position: u32 },

    #[error("{session} position {position} is used by both {first} and {second}")]
    DuplicatePosition { session: Session, position: u8, first: DriverId, second: DriverId },

    #[error("{driver} appears more than once in the {session} order")]
    DuplicateEntry { session: Session, driver: DriverId },

    #[error("Unknown driver: {0}")]
    UnknownDriver(String),

    #[error("Unknown constructor: {0}")]
    UnknownConstructor(String),
}
