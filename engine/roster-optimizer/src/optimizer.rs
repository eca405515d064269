use crate::assembler::{ConstructorSubset, DriverSubset, RosterAssembler};
use crate::config::BudgetConfig;
use crate::error::Result;
use crate::roster::{multiplied_total, Roster};
use fantasy_registry::{Exclusions, FantasyRegistry};
use scoring_engine::{PointsCalculator, RoundScores, ScoringConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Outcome of a full roster search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Highest roster score, `None` if no roster fit the total budget
    pub best_score: Option<i32>,

    /// Every roster scoring `best_score`, sorted by driver then constructor ids
    pub rosters: Vec<Roster>,

    /// Driver/constructor pairs scored
    pub evaluated: usize,

    /// Pairs skipped for exceeding the total budget
    pub rejected_over_budget: usize,
}

impl OptimizationResult {
    pub fn len(&self) -> usize {
        self.rosters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rosters.is_empty()
    }
}

/// Running state of the search: current maximum and every pair that reaches it
#[derive(Debug, Default)]
struct SearchState {
    best: Option<i32>,
    winners: Vec<(usize, usize)>,
    evaluated: usize,
    rejected: usize,
}

impl SearchState {
    fn consider(&mut self, points: i32, pair: (usize, usize)) {
        self.evaluated += 1;
        match self.best {
            Some(best) if points < best => {}
            Some(best) if points == best => self.winners.push(pair),
            _ => {
                self.best = Some(points);
                self.winners.clear();
                self.winners.push(pair);
            }
        }
    }

    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    fn merge(mut self, mut other: SearchState) -> SearchState {
        self.evaluated += other.evaluated;
        self.rejected += other.rejected;
        match (self.best, other.best) {
            (_, None) => {}
            (None, Some(_)) => {
                self.best = other.best;
                self.winners = other.winners;
            }
            (Some(a), Some(b)) if b > a => {
                self.best = other.best;
                self.winners = other.winners;
            }
            (Some(a), Some(b)) if b == a => self.winners.append(&mut other.winners),
            _ => {}
        }
        self
    }
}

/// Exhaustive roster search
#[derive(Debug, Clone)]
pub struct RosterOptimizer {
    calculator: PointsCalculator,
    budget: BudgetConfig,
}

impl RosterOptimizer {
    pub fn new(scoring: ScoringConfig, budget: BudgetConfig) -> Self {
        Self { calculator: PointsCalculator::new(scoring), budget }
    }

    pub fn calculator(&self) -> &PointsCalculator {
        &self.calculator
    }

    pub fn budget(&self) -> &BudgetConfig {
        &self.budget
    }

    /// Validate and score the round, build the feasible groups and search them
    pub fn optimize(
        &self,
        registry: &FantasyRegistry,
        exclusions: &Exclusions,
    ) -> Result<OptimizationResult> {
        let scores = self.calculator.score_round(registry)?;

        let assembler = RosterAssembler::new(self.budget.clone());
        let driver_subsets = assembler.feasible_driver_subsets(registry, exclusions)?;
        let constructor_subsets = assembler.feasible_constructor_subsets(registry, exclusions)?;

        Ok(self.find_best_rosters(&scores, &driver_subsets, &constructor_subsets))
    }

    /// Score every driver group against every constructor group and keep all
    /// rosters tied at the maximum.
    ///
    /// A roster's score splits into a driver part (depends on the multiplier
    /// assignment inside the driver group only) and a constructor part, so
    /// both are computed once per group and each pair costs one addition.
    pub fn find_best_rosters(
        &self,
        scores: &RoundScores,
        driver_subsets: &[DriverSubset],
        constructor_subsets: &[ConstructorSubset],
    ) -> OptimizationResult {
        let extra_drs = self.calculator.config().chips.extra_drs;

        let driver_totals: Vec<i32> = driver_subsets
            .iter()
            .map(|s| multiplied_total(&s.drivers.map(|id| scores.driver(id).total()), extra_drs))
            .collect();
        let constructor_totals: Vec<i32> = constructor_subsets
            .iter()
            .map(|s| s.constructors.iter().map(|&id| scores.constructor(id).total()).sum())
            .collect();

        let scan = |mut state: SearchState, (di, subset): (usize, &DriverSubset)| {
            for (ci, constructors) in constructor_subsets.iter().enumerate() {
                if subset.price + constructors.price > self.budget.max_total_cost {
                    state.rejected += 1;
                    continue;
                }
                state.consider(driver_totals[di] + constructor_totals[ci], (di, ci));
            }
            state
        };

        #[cfg(not(feature = "parallel"))]
        let state = driver_subsets.iter().enumerate().fold(SearchState::default(), scan);

        #[cfg(feature = "parallel")]
        let state = driver_subsets
            .par_iter()
            .enumerate()
            .fold(SearchState::default, scan)
            .reduce(SearchState::default, SearchState::merge);

        let mut rosters: Vec<Roster> = state
            .winners
            .iter()
            .map(|&(di, ci)| {
                Roster::build(scores, &driver_subsets[di], &constructor_subsets[ci], extra_drs)
            })
            .collect();
        rosters.sort_by_key(|r| (r.driver_ids(), r.constructor_ids()));

        for roster in &rosters {
            debug_assert_eq!(Some(roster.points), state.best);
            debug!(
                "Best roster {:?} + {:?}: {}",
                roster.driver_ids(),
                roster.constructor_ids(),
                roster.points
            );
        }

        info!(
            "Evaluated {} rosters ({} over budget): best score {:?} shared by {} roster(s)",
            state.evaluated,
            state.rejected,
            state.best,
            rosters.len()
        );

        OptimizationResult {
            best_score: state.best,
            rosters,
            evaluated: state.evaluated,
            rejected_over_budget: state.rejected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OptimizerError;
    use fantasy_registry::{ConstructorId, DriverId};
    use rust_decimal_macros::dec;

    #[test]
    fn test_consider_keeps_all_ties() {
        let mut state = SearchState::default();
        state.consider(10, (0, 0));
        state.consider(12, (0, 1));
        state.consider(12, (1, 0));
        state.consider(11, (1, 1));

        assert_eq!(state.best, Some(12));
        assert_eq!(state.winners, vec![(0, 1), (1, 0)]);
        assert_eq!(state.evaluated, 4);
    }

    #[test]
    fn test_consider_negative_scores() {
        let mut state = SearchState::default();
        state.consider(-30, (0, 0));
        state.consider(-40, (0, 1));
        assert_eq!(state.best, Some(-30));
        assert_eq!(state.winners, vec![(0, 0)]);
    }

    #[test]
    fn test_merge() {
        let mut a = SearchState::default();
        a.consider(5, (0, 0));
        a.rejected = 2;
        let mut b = SearchState::default();
        b.consider(5, (3, 1));
        let mut c = SearchState::default();
        c.consider(9, (4, 4));

        let merged = a.merge(b);
        assert_eq!(merged.winners, vec![(0, 0), (3, 1)]);
        assert_eq!(merged.rejected, 2);

        let merged = merged.merge(c).merge(SearchState::default());
        assert_eq!(merged.best, Some(9));
        assert_eq!(merged.winners, vec![(4, 4)]);
        assert_eq!(merged.evaluated, 3);
    }

    #[test]
    fn test_nothing_fits_total_budget() {
        let mut registry = FantasyRegistry::new();
        registry.set_qualifying_order(&DriverId::ALL).unwrap();
        registry.set_race_order(&DriverId::ALL).unwrap();
        let optimizer = RosterOptimizer::new(
            ScoringConfig::default(),
            BudgetConfig { max_total_cost: dec!(-1), ..Default::default() },
        );

        let result = optimizer.optimize(&registry, &Exclusions::none()).unwrap();
        assert_eq!(result.best_score, None);
        assert!(result.is_empty());
        assert_eq!(result.evaluated, 0);
        assert_eq!(result.rejected_over_budget, 15504 * 45);
    }

    #[test]
    fn test_invalid_round_is_rejected() {
        let mut registry = FantasyRegistry::new();
        registry.set_qualifying_position(DriverId::Max, Some(1)).unwrap();
        registry.set_qualifying_position(DriverId::Lewis, Some(1)).unwrap();
        let optimizer = RosterOptimizer::new(ScoringConfig::default(), BudgetConfig::default());

        let err = optimizer.optimize(&registry, &Exclusions::none()).unwrap_err();
        assert!(matches!(err, OptimizerError::Scoring(_)));
    }

    #[test]
    fn test_excluding_constructors_limits_search() {
        let mut registry = FantasyRegistry::new();
        registry.set_qualifying_order(&DriverId::ALL).unwrap();
        registry.set_race_order(&DriverId::ALL).unwrap();
        let exclusions = Exclusions {
            constructors: ConstructorId::ALL.into_iter().skip(2).collect(),
            ..Default::default()
        };
        let optimizer = RosterOptimizer::new(ScoringConfig::default(), BudgetConfig::default());

        let result = optimizer.optimize(&registry, &exclusions).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(
            result.rosters[0].constructor_ids(),
            [ConstructorId::RedBull, ConstructorId::Mclaren]
        );
    }
}
