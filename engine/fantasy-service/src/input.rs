//! Round input files

use anyhow::{Context, Result};
use fantasy_registry::{
    ConstructorPrice, DriverId, DriverPrice, Exclusions, FantasyRegistry, SpecialAwards,
    GRID_SIZE,
};
use scoring_engine::{ChipConfig, ScoringConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Everything known about one race weekend: prices, finishing orders, awards
/// and the chips played
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundInput {
    pub driver_prices: Vec<DriverPrice>,
    pub constructor_prices: Vec<ConstructorPrice>,

    /// Qualifying classification, pole first
    pub qualifying: Vec<DriverId>,

    /// Race classification, winner first. Drivers left out did not finish.
    pub race: Vec<DriverId>,

    pub special_points: SpecialAwards,

    /// Chips played this round, overriding the configured ones
    pub chips: Option<ChipConfig>,

    pub exclusions: Exclusions,
}

impl RoundInput {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read round input: {:?}", path))?;
        Self::from_json(&raw).with_context(|| format!("Failed to parse round input: {:?}", path))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reset the registry's round state and load this round into it
    pub fn apply(&self, registry: &mut FantasyRegistry) -> Result<()> {
        registry.reset_round();

        if self.driver_prices.len() < GRID_SIZE {
            warn!(
                "Only {} of {} drivers have a price, the rest keep their previous price",
                self.driver_prices.len(),
                GRID_SIZE
            );
        }
        registry.load_driver_prices(&self.driver_prices);
        registry.load_constructor_prices(&self.constructor_prices);

        registry.set_qualifying_order(&self.qualifying).context("Invalid qualifying order")?;
        registry.set_race_order(&self.race).context("Invalid race order")?;
        registry.apply_special_awards(&self.special_points);
        registry.validate().context("Inconsistent round results")?;

        info!(
            "Loaded round: {} qualified, {} classified, {} drivers and {} constructors excluded",
            self.qualifying.len(),
            self.race.len(),
            self.exclusions.drivers.len(),
            self.exclusions.constructors.len()
        );
        Ok(())
    }

    /// Scoring configuration for this round: `base` with the round's chips applied
    pub fn scoring_config(&self, base: &ScoringConfig) -> ScoringConfig {
        let mut config = base.clone();
        if let Some(chips) = &self.chips {
            config.chips = chips.clone();
        }
        config
    }
}
