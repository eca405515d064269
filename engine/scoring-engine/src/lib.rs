//! Scoring Engine
//!
//! Converts qualifying and race results plus weekend awards into fantasy
//! points. Every calculation is pure: it reads the registry and returns an
//! immutable breakdown, so the same round can be scored any number of times.

pub mod calculator;
pub mod config;
pub mod error;
pub mod models;

pub use calculator::PointsCalculator;
pub use config::{ChipConfig, ScoringConfig};
pub use error::{Result, ScoringError};
pub use models::{ConstructorPointsBreakdown, DriverPointsBreakdown, Multiplier, RoundScores};

/// Qualifying points for P1..=P10
pub const QUALIFYING_PLACE_POINTS: [i32; 10] = [10, 9, 8, 7, 6, 5, 4, 3, 2, 1];

/// Race points for P1..=P10
pub const RACE_PLACE_POINTS: [i32; 10] = [25, 18, 15, 12, 10, 8, 6, 4, 2, 1];

/// Penalty for a driver without a qualifying position
pub const NOT_QUALIFIED_PENALTY: i32 = -20;

/// Only awarded together with a top-ten race finish
pub const FASTEST_LAP_BONUS: i32 = 10;

pub const DRIVER_OF_THE_DAY_BONUS: i32 = 10;

pub const FASTEST_PITSTOP_BONUS: i32 = 10;
pub const SECOND_FASTEST_PITSTOP_BONUS: i32 = 5;
pub const THIRD_FASTEST_PITSTOP_BONUS: i32 = 3;
