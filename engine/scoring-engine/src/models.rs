use fantasy_registry::{ConstructorId, DriverId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Points a driver scored this round, before any roster multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverPointsBreakdown {
    pub driver: DriverId,

    /// Qualifying place points, or the non-qualification penalty
    pub qualifying: i32,

    /// Race place points
    pub race: i32,

    pub fastest_lap: i32,
    pub driver_of_the_day: i32,

    /// Qualifying position minus race position (positive = places gained)
    pub positions_changed: i32,

    /// Points earned or lost from `positions_changed`
    pub position_change: i32,
}

impl DriverPointsBreakdown {
    pub fn empty(driver: DriverId) -> Self {
        Self {
            driver,
            qualifying: 0,
            race: 0,
            fastest_lap: 0,
            driver_of_the_day: 0,
            positions_changed: 0,
            position_change: 0,
        }
    }

    /// Unmultiplied total
    pub fn total(&self) -> i32 {
        self.qualifying
            + self.race
            + self.fastest_lap
            + self.driver_of_the_day
            + self.position_change
    }
}

impl fmt::Display for DriverPointsBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "qualifying: {} race_position: {} positions_changed: {} position_change_points: {}",
            self.qualifying, self.race, self.positions_changed, self.position_change
        )?;
        if self.driver_of_the_day != 0 {
            write!(f, " driver_of_the_day: {}", self.driver_of_the_day)?;
        }
        if self.fastest_lap != 0 {
            write!(f, " fastest_lap: {}", self.fastest_lap)?;
        }
        write!(f, " total: {}", self.total())
    }
}

/// Points a constructor scored this round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorPointsBreakdown {
    pub constructor: ConstructorId,

    /// Unmultiplied breakdowns of both drivers
    pub drivers: [DriverPointsBreakdown; 2],

    /// Driver-of-the-day points removed again (constructors don't get them)
    pub driver_of_the_day_adjustment: i32,

    pub fastest_pitstop: i32,
    pub second_fastest_pitstop: i32,
    pub third_fastest_pitstop: i32,

    /// Bonus for how far both cars got in qualifying
    pub qualifying_bonus: i32,
}

impl ConstructorPointsBreakdown {
    /// Sum of both drivers' unmultiplied totals
    pub fn drivers_total(&self) -> i32 {
        self.drivers.iter().map(DriverPointsBreakdown::total).sum()
    }

    fn drivers_sum(&self, pick: impl Fn(&DriverPointsBreakdown) -> i32) -> i32 {
        self.drivers.iter().map(pick).sum()
    }

    pub fn pitstops_total(&self) -> i32 {
        self.fastest_pitstop + self.second_fastest_pitstop + self.third_fastest_pitstop
    }

    pub fn total(&self) -> i32 {
        self.drivers_total()
            + self.driver_of_the_day_adjustment
            + self.pitstops_total()
            + self.qualifying_bonus
    }
}

impl fmt::Display for ConstructorPointsBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "qualifying: {} qualifying_bonus: {} race_position: {} positions_changed: {} position_change_points: {}",
            self.drivers_sum(|d| d.qualifying),
            self.qualifying_bonus,
            self.drivers_sum(|d| d.race + d.fastest_lap),
            self.drivers_sum(|d| d.positions_changed),
            self.drivers_sum(|d| d.position_change),
        )?;
        if self.fastest_pitstop != 0 {
            write!(f, " fastest_pitstop: {}", self.fastest_pitstop)?;
        }
        if self.second_fastest_pitstop != 0 {
            write!(f, " second_fastest_pitstop: {}", self.second_fastest_pitstop)?;
        }
        if self.third_fastest_pitstop != 0 {
            write!(f, " third_fastest_pitstop: {}", self.third_fastest_pitstop)?;
        }
        write!(f, " total: {}", self.total())
    }
}

/// Roster multiplier on a driver's points
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Multiplier {
    #[default]
    None,
    /// x2
    Drs,
    /// x3, needs the extra DRS chip
    ExtraDrs,
}

impl Multiplier {
    pub fn factor(self) -> i32 {
        match self {
            Multiplier::None => 1,
            Multiplier::Drs => 2,
            Multiplier::ExtraDrs => 3,
        }
    }

    pub fn apply(self, points: i32) -> i32 {
        points * self.factor()
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Multiplier::None => f.write_str("x1"),
            Multiplier::Drs => f.write_str("DRS x2"),
            Multiplier::ExtraDrs => f.write_str("extra DRS x3"),
        }
    }
}

/// Frozen scores of every driver and constructor for one round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundScores {
    /// Indexed by `DriverId::index`
    drivers: Vec<DriverPointsBreakdown>,

    /// Indexed by `ConstructorId::index`
    constructors: Vec<ConstructorPointsBreakdown>,
}

impl RoundScores {
    pub(crate) fn new(
        drivers: Vec<DriverPointsBreakdown>,
        constructors: Vec<ConstructorPointsBreakdown>,
    ) -> Self {
        debug_assert_eq!(drivers.len(), DriverId::ALL.len());
        debug_assert_eq!(constructors.len(), ConstructorId::ALL.len());
        Self { drivers, constructors }
    }

    pub fn driver(&self, id: DriverId) -> &DriverPointsBreakdown {
        &self.drivers[id.index()]
    }

    pub fn constructor(&self, id: ConstructorId) -> &ConstructorPointsBreakdown {
        &self.constructors[id.index()]
    }

    pub fn drivers(&self) -> &[DriverPointsBreakdown] {
        &self.drivers
    }

    pub fn constructors(&self) -> &[ConstructorPointsBreakdown] {
        &self.constructors
    }
}
