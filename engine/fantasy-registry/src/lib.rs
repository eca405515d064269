//! Fantasy Registry - Catalog of drivers and constructors
//!
//! This crate holds the closed set of drivers and constructors that can be
//! picked for a fantasy roster, together with their per-round state: prices,
//! qualifying and race positions, and special awards.

pub mod error;
pub mod registry;
pub mod types;

pub use error::{RegistryError, Result};
pub use registry::FantasyRegistry;
pub use types::{
    Constructor, ConstructorId, ConstructorPrice, Driver, DriverId, DriverPrice, Exclusions,
    Position, Session, SpecialAwards,
};

/// Number of drivers on the grid
pub const GRID_SIZE: usize = 20;
