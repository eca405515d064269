use crate::assembler::{ConstructorSubset, DriverSubset};
use crate::{ROSTER_CONSTRUCTORS, ROSTER_DRIVERS};
use fantasy_registry::{ConstructorId, DriverId};
use rust_decimal::Decimal;
use scoring_engine::{ConstructorPointsBreakdown, DriverPointsBreakdown, Multiplier, RoundScores};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A driver as scored inside one particular roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterDriver {
    pub breakdown: DriverPointsBreakdown,
    pub price: Decimal,
    pub multiplier: Multiplier,
}

impl RosterDriver {
    pub fn id(&self) -> DriverId {
        self.breakdown.driver
    }

    /// Points before the roster multiplier
    pub fn base_points(&self) -> i32 {
        self.breakdown.total()
    }

    pub fn points(&self) -> i32 {
        self.multiplier.apply(self.base_points())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConstructor {
    pub breakdown: ConstructorPointsBreakdown,
    pub price: Decimal,
}

impl RosterConstructor {
    pub fn id(&self) -> ConstructorId {
        self.breakdown.constructor
    }

    pub fn points(&self) -> i32 {
        self.breakdown.total()
    }
}

/// Five drivers and two constructors with their multiplier assignment and points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub drivers: [RosterDriver; ROSTER_DRIVERS],
    pub constructors: [RosterConstructor; ROSTER_CONSTRUCTORS],
    pub price: Decimal,
    pub points: i32,
}

impl Roster {
    /// Score a roster against a frozen round. Multipliers are assigned for this
    /// roster alone and never touch `scores`.
    pub fn build(
        scores: &RoundScores,
        driver_subset: &DriverSubset,
        constructor_subset: &ConstructorSubset,
        extra_drs: bool,
    ) -> Self {
        let breakdowns = driver_subset.drivers.map(|id| *scores.driver(id));
        let multipliers = assign_multipliers(&breakdowns.map(|b| b.total()), extra_drs);

        let drivers: [RosterDriver; ROSTER_DRIVERS] = std::array::from_fn(|i| RosterDriver {
            breakdown: breakdowns[i],
            price: driver_subset.prices[i],
            multiplier: multipliers[i],
        });
        let constructors: [RosterConstructor; ROSTER_CONSTRUCTORS] =
            std::array::from_fn(|i| RosterConstructor {
                breakdown: *scores.constructor(constructor_subset.constructors[i]),
                price: constructor_subset.prices[i],
            });

        let points = drivers.iter().map(RosterDriver::points).sum::<i32>()
            + constructors.iter().map(RosterConstructor::points).sum::<i32>();
        let price = drivers.iter().map(|d| d.price).sum::<Decimal>()
            + constructors.iter().map(|c| c.price).sum::<Decimal>();

        Self { drivers, constructors, price, points }
    }

    pub fn driver_ids(&self) -> [DriverId; ROSTER_DRIVERS] {
        std::array::from_fn(|i| self.drivers[i].id())
    }

    pub fn constructor_ids(&self) -> [ConstructorId; ROSTER_CONSTRUCTORS] {
        std::array::from_fn(|i| self.constructors[i].id())
    }

    /// The driver carrying the DRS or extra DRS multiplier with the highest factor
    pub fn boosted_driver(&self) -> Option<&RosterDriver> {
        self.drivers
            .iter()
            .filter(|d| d.multiplier != Multiplier::None)
            .max_by_key(|d| d.multiplier)
    }
}

/// Rank drivers by unmultiplied points (ties keep input order) and hand out multipliers.
///
/// With the extra DRS chip the best driver gets x3 and the second x2, otherwise
/// only the best driver gets x2.
pub fn assign_multipliers(
    points: &[i32; ROSTER_DRIVERS],
    extra_drs: bool,
) -> [Multiplier; ROSTER_DRIVERS] {
    let mut ranked: [usize; ROSTER_DRIVERS] = std::array::from_fn(|i| i);
    ranked.sort_by_key(|&i| std::cmp::Reverse(points[i]));

    let mut multipliers = [Multiplier::None; ROSTER_DRIVERS];
    if extra_drs {
        multipliers[ranked[0]] = Multiplier::ExtraDrs;
        multipliers[ranked[1]] = Multiplier::Drs;
    } else {
        multipliers[ranked[0]] = Multiplier::Drs;
    }
    multipliers
}

/// Total of the driver points once multipliers are applied
pub(crate) fn multiplied_total(points: &[i32; ROSTER_DRIVERS], extra_drs: bool) -> i32 {
    let multipliers = assign_multipliers(points, extra_drs);
    points.iter().zip(multipliers).map(|(&p, m)| m.apply(p)).sum()
}

impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Team:")?;
        writeln!(f, "Total points: {}", self.points)?;
        writeln!(f, "Price: {}", self.price)?;

        writeln!(f, "\nDrivers:")?;
        let mut drivers: Vec<&RosterDriver> = self.drivers.iter().collect();
        drivers.sort_by_key(|d| std::cmp::Reverse(d.points()));
        for driver in drivers {
            write!(f, "{} - {} points", driver.id(), driver.points())?;
            if driver.multiplier != Multiplier::None {
                write!(f, " ({})", driver.multiplier)?;
            }
            writeln!(f, " [{}]: breakdown: {}", driver.price, driver.breakdown)?;
        }

        writeln!(f, "\nConstructors:")?;
        let mut constructors: Vec<&RosterConstructor> = self.constructors.iter().collect();
        constructors.sort_by_key(|c| std::cmp::Reverse(c.points()));
        for constructor in constructors {
            writeln!(
                f,
                "{} - {} points [{}]: breakdown: {}",
                constructor.id(),
                constructor.points(),
                constructor.price,
                constructor.breakdown
            )?;
        }
        Ok(())
    }
}
