use crate::error::{OptimizerError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Default cap for each budget, in millions
pub const DEFAULT_BUDGET: Decimal = Decimal::ONE_HUNDRED;

/// Spending caps for a roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetConfig {
    /// Cap on the five drivers together
    pub max_drivers_cost: Decimal,

    /// Cap on the two constructors together
    pub max_constructors_cost: Decimal,

    /// Cap on the whole roster
    pub max_total_cost: Decimal,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            max_drivers_cost: DEFAULT_BUDGET,
            max_constructors_cost: DEFAULT_BUDGET,
            max_total_cost: DEFAULT_BUDGET,
        }
    }
}

impl BudgetConfig {
    /// Load configuration from environment variables on top of the defaults
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides()
    }

    /// Apply `F1_MAX_DRIVERS_COST`, `F1_MAX_CONSTRUCTORS_COST` and `F1_MAX_TOTAL_COST`
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Some(cap) = env_decimal("F1_MAX_DRIVERS_COST")? {
            self.max_drivers_cost = cap;
        }
        if let Some(cap) = env_decimal("F1_MAX_CONSTRUCTORS_COST")? {
            self.max_constructors_cost = cap;
        }
        if let Some(cap) = env_decimal("F1_MAX_TOTAL_COST")? {
            self.max_total_cost = cap;
        }
        Ok(self)
    }
}

fn env_decimal(key: &str) -> Result<Option<Decimal>> {
    let Ok(raw) = std::env::var(key) else {
        return Ok(None);
    };
    match Decimal::from_str(raw.trim()) {
        Ok(value) if !value.is_sign_negative() => Ok(Some(value)),
        _ => Err(OptimizerError::InvalidConfig { key: key.to_string(), value: raw }),
    }
}
