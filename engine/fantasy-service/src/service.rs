//! One scoring and optimization pass over a round input

use crate::config::ServiceConfig;
use crate::input::RoundInput;
use crate::report::write_report;
use anyhow::{Context, Result};
use chrono::Utc;
use fantasy_registry::FantasyRegistry;
use roster_optimizer::{OptimizationResult, RosterOptimizer};
use std::path::PathBuf;
use tracing::info;

/// Command line switches that force scoring options on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOverrides {
    pub qualifying_only: bool,
    pub extra_drs: bool,
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub result: OptimizationResult,
    pub report_path: PathBuf,
}

/// Load the round, search for the best rosters and write the report
pub fn run_round(config: &ServiceConfig, overrides: RunOverrides) -> Result<RunSummary> {
    let round_path = config.service.round_path();
    let input = RoundInput::from_file(&round_path).with_context(|| {
        format!("No usable round input at {:?}, run `f1-fantasy setup` first", round_path)
    })?;

    let mut registry = FantasyRegistry::new();
    input.apply(&mut registry)?;

    let mut scoring = input.scoring_config(&config.scoring);
    scoring.qualifying_only |= overrides.qualifying_only;
    scoring.chips.extra_drs |= overrides.extra_drs;
    info!(
        "Scoring with qualifying_only={} extra_drs={}",
        scoring.qualifying_only, scoring.chips.extra_drs
    );

    let optimizer = RosterOptimizer::new(scoring, config.budget.clone());
    let result = optimizer
        .optimize(&registry, &input.exclusions)
        .context("Roster optimization failed")?;

    let report_path = write_report(&config.service.output_path(), &result, Utc::now())?;
    Ok(RunSummary { result, report_path })
}
