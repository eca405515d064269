use crate::combinations::Combinations;
use crate::config::BudgetConfig;
use crate::error::{OptimizerError, Result};
use crate::{ROSTER_CONSTRUCTORS, ROSTER_DRIVERS};
use fantasy_registry::{ConstructorId, DriverId, Exclusions, FantasyRegistry};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Five drivers whose combined price fits the driver budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverSubset {
    /// In catalog order
    pub drivers: [DriverId; ROSTER_DRIVERS],
    pub prices: [Decimal; ROSTER_DRIVERS],
    pub price: Decimal,
}

/// Two constructors whose combined price fits the constructor budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorSubset {
    /// In catalog order
    pub constructors: [ConstructorId; ROSTER_CONSTRUCTORS],
    pub prices: [Decimal; ROSTER_CONSTRUCTORS],
    pub price: Decimal,
}

/// Builds the budget-feasible driver and constructor groups a roster is made of
#[derive(Debug, Clone)]
pub struct RosterAssembler {
    budget: BudgetConfig,
}

impl RosterAssembler {
    pub fn new(budget: BudgetConfig) -> Self {
        Self { budget }
    }

    /// Every group of five eligible drivers within the driver cap
    pub fn feasible_driver_subsets(
        &self,
        registry: &FantasyRegistry,
        exclusions: &Exclusions,
    ) -> Result<Vec<DriverSubset>> {
        let pool: Vec<(DriverId, Decimal)> = registry
            .drivers()
            .iter()
            .filter(|d| !exclusions.is_driver_excluded(d.id))
            .map(|d| (d.id, d.price))
            .collect();
        ensure_pool("drivers", ROSTER_DRIVERS, pool.len())?;

        let subsets: Vec<DriverSubset> = Combinations::new(pool.len(), ROSTER_DRIVERS)
            .filter_map(|idx| {
                let prices: [Decimal; ROSTER_DRIVERS] = std::array::from_fn(|i| pool[idx[i]].1);
                let price: Decimal = prices.iter().sum();
                (price <= self.budget.max_drivers_cost).then(|| DriverSubset {
                    drivers: std::array::from_fn(|i| pool[idx[i]].0),
                    prices,
                    price,
                })
            })
            .collect();

        info!(
            "{} of {} driver combinations fit the {} driver budget",
            subsets.len(),
            Combinations::count_total(pool.len(), ROSTER_DRIVERS),
            self.budget.max_drivers_cost
        );
        Ok(subsets)
    }

    /// Every pair of eligible constructors within the constructor cap
    pub fn feasible_constructor_subsets(
        &self,
        registry: &FantasyRegistry,
        exclusions: &Exclusions,
    ) -> Result<Vec<ConstructorSubset>> {
        let pool: Vec<(ConstructorId, Decimal)> = registry
            .constructors()
            .iter()
            .filter(|c| !exclusions.is_constructor_excluded(c.id))
            .map(|c| (c.id, c.price))
            .collect();
        ensure_pool("constructors", ROSTER_CONSTRUCTORS, pool.len())?;

        let subsets: Vec<ConstructorSubset> = Combinations::new(pool.len(), ROSTER_CONSTRUCTORS)
            .filter_map(|idx| {
                let prices: [Decimal; ROSTER_CONSTRUCTORS] =
                    std::array::from_fn(|i| pool[idx[i]].1);
                let price: Decimal = prices.iter().sum();
                (price <= self.budget.max_constructors_cost).then(|| ConstructorSubset {
                    constructors: std::array::from_fn(|i| pool[idx[i]].0),
                    prices,
                    price,
                })
            })
            .collect();

        info!(
            "{} of {} constructor combinations fit the {} constructor budget",
            subsets.len(),
            Combinations::count_total(pool.len(), ROSTER_CONSTRUCTORS),
            self.budget.max_constructors_cost
        );
        Ok(subsets)
    }
}

fn ensure_pool(kind: &'static str, required: usize, available: usize) -> Result<()> {
    if available < required {
        return Err(OptimizerError::NotEnoughEntities { kind, required, available });
    }
    Ok(())
}
