//! Roster Optimizer
//!
//! Enumerates every roster of five drivers and two constructors that fits the
//! budget, scores each one against a frozen [`RoundScores`] snapshot and keeps
//! all rosters tied at the highest total.
//!
//! [`RoundScores`]: scoring_engine::RoundScores

pub mod assembler;
pub mod combinations;
pub mod config;
pub mod error;
pub mod optimizer;
pub mod roster;

pub use assembler::{ConstructorSubset, DriverSubset, RosterAssembler};
pub use combinations::Combinations;
pub use config::BudgetConfig;
pub use error::{OptimizerError, Result};
pub use optimizer::{OptimizationResult, RosterOptimizer};
pub use roster::{assign_multipliers, Roster, RosterConstructor, RosterDriver};

/// Drivers per roster
pub const ROSTER_DRIVERS: usize = 5;

/// Constructors per roster
pub const ROSTER_CONSTRUCTORS: usize = 2;
