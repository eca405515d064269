use crate::config::ScoringConfig;
use crate::error::Result;
use crate::models::{ConstructorPointsBreakdown, DriverPointsBreakdown, RoundScores};
use crate::{
    DRIVER_OF_THE_DAY_BONUS, FASTEST_LAP_BONUS, FASTEST_PITSTOP_BONUS, NOT_QUALIFIED_PENALTY,
    QUALIFYING_PLACE_POINTS, RACE_PLACE_POINTS, SECOND_FASTEST_PITSTOP_BONUS,
    THIRD_FASTEST_PITSTOP_BONUS,
};
use fantasy_registry::{Constructor, Driver, FantasyRegistry, Position};
use tracing::{debug, info};

/// Qualifying position used for the bracket bonus when a car did not qualify
const NOT_QUALIFIED_POSITION: u8 = 21;

/// Points calculator for drivers and constructors
#[derive(Debug, Clone)]
pub struct PointsCalculator {
    config: ScoringConfig,
}

impl PointsCalculator {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Validate the registry and score every driver and constructor
    pub fn score_round(&self, registry: &FantasyRegistry) -> Result<RoundScores> {
        registry.validate()?;

        let drivers: Vec<_> = registry.drivers().iter().map(|d| self.driver_points(d)).collect();
        let constructors: Vec<_> = registry
            .constructors()
            .iter()
            .map(|c| self.constructor_points(c, registry.constructor_drivers(c.id)))
            .collect();

        info!(
            "Scored round for {} drivers and {} constructors (qualifying_only: {})",
            drivers.len(),
            constructors.len(),
            self.config.qualifying_only
        );
        Ok(RoundScores::new(drivers, constructors))
    }

    /// Unmultiplied points for one driver
    pub fn driver_points(&self, driver: &Driver) -> DriverPointsBreakdown {
        let mut breakdown = DriverPointsBreakdown::empty(driver.id);

        breakdown.qualifying = match driver.qualifying_position {
            Some(p) => place_points(&QUALIFYING_PLACE_POINTS, p),
            None => NOT_QUALIFIED_PENALTY,
        };

        if self.config.qualifying_only {
            return breakdown;
        }

        if let Some(p) = driver.race_position {
            breakdown.race = place_points(&RACE_PLACE_POINTS, p);
            if driver.fastest_lap && breakdown.race > 0 {
                breakdown.fastest_lap = FASTEST_LAP_BONUS;
            }
        }

        if driver.driver_of_the_day {
            breakdown.driver_of_the_day = DRIVER_OF_THE_DAY_BONUS;
        }

        // Without both positions there is nothing to compare.
        if let (Some(quali), Some(race)) = (driver.qualifying_position, driver.race_position) {
            let delta = quali.get() as i32 - race.get() as i32;
            breakdown.positions_changed = delta;
            breakdown.position_change = if delta > 0 { delta * 2 } else { delta };
        }

        debug!("{} scored {}", driver.name(), breakdown.total());
        breakdown
    }

    /// Points for a constructor; `drivers` must be the constructor's own pair
    pub fn constructor_points(
        &self,
        constructor: &Constructor,
        drivers: [&Driver; 2],
    ) -> ConstructorPointsBreakdown {
        debug_assert_eq!(drivers.map(|d| d.id), constructor.driver_ids());

        let driver_points = drivers.map(|d| self.driver_points(d));
        // Flag based, so it applies in qualifying-only mode too.
        let driver_of_the_day_adjustment = -DRIVER_OF_THE_DAY_BONUS
            * drivers.iter().filter(|d| d.driver_of_the_day).count() as i32;

        ConstructorPointsBreakdown {
            constructor: constructor.id,
            drivers: driver_points,
            driver_of_the_day_adjustment,
            fastest_pitstop: if constructor.fastest_pitstop { FASTEST_PITSTOP_BONUS } else { 0 },
            second_fastest_pitstop: if constructor.second_fastest_pitstop {
                SECOND_FASTEST_PITSTOP_BONUS
            } else {
                0
            },
            third_fastest_pitstop: if constructor.third_fastest_pitstop {
                THIRD_FASTEST_PITSTOP_BONUS
            } else {
                0
            },
            qualifying_bonus: Self::qualifying_bonus(drivers.map(|d| d.qualifying_position)),
        }
    }

    /// Bracket bonus from both cars' qualifying positions. First matching rule wins.
    pub fn qualifying_bonus(positions: [Option<Position>; 2]) -> i32 {
        let q = positions.map(|p| p.map_or(NOT_QUALIFIED_POSITION, Position::get));

        if q.iter().all(|&p| p > 15) {
            -1
        } else if q.iter().all(|&p| p < 10) {
            10
        } else if q.iter().any(|&p| p < 10) {
            5
        } else if q.iter().any(|&p| p > 15) {
            2
        } else if q.iter().any(|&p| p < 15) {
            3
        } else {
            0
        }
    }
}

fn place_points(table: &[i32; 10], position: Position) -> i32 {
    table.get(position.get() as usize - 1).copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChipConfig;
    use fantasy_registry::{ConstructorId, DriverId, SpecialAwards};

    fn driver(quali: Option<u32>, race: Option<u32>) -> Driver {
        let mut driver = Driver::new(DriverId::Max);
        driver.qualifying_position = quali.and_then(Position::new);
        driver.race_position = race.and_then(Position::new);
        driver
    }

    fn calculator() -> PointsCalculator {
        PointsCalculator::new(ScoringConfig::default())
    }

    fn qualifying_only() -> PointsCalculator {
        PointsCalculator::new(ScoringConfig { qualifying_only: true, chips: ChipConfig::default() })
    }

    fn pos(value: u32) -> Option<Position> {
        Position::new(value)
    }

    #[test]
    fn test_driver_first() {
        assert_eq!(calculator().driver_points(&driver(Some(1), Some(1))).total(), 35);
    }

    #[test]
    fn test_driver_last() {
        assert_eq!(calculator().driver_points(&driver(Some(20), Some(20))).total(), 0);
    }

    #[test]
    fn test_driver_last_to_first() {
        let breakdown = calculator().driver_points(&driver(Some(20), Some(1)));
        assert_eq!(breakdown.qualifying, 0);
        assert_eq!(breakdown.race, 25);
        assert_eq!(breakdown.positions_changed, 19);
        assert_eq!(breakdown.position_change, 38);
        assert_eq!(breakdown.total(), 63);
    }

    #[test]
    fn test_driver_first_to_last() {
        let breakdown = calculator().driver_points(&driver(Some(1), Some(20)));
        assert_eq!(breakdown.position_change, -19);
        assert_eq!(breakdown.total(), -9);
    }

    #[test]
    fn test_driver_first_fastest_lap_and_driver_of_the_day() {
        let mut d = driver(Some(1), Some(1));
        d.fastest_lap = true;
        d.driver_of_the_day = true;
        assert_eq!(calculator().driver_points(&d).total(), 55);
    }

    #[test]
    fn test_fastest_lap_out_of_points() {
        let mut d = driver(Some(20), Some(20));
        d.fastest_lap = true;
        let breakdown = calculator().driver_points(&d);
        assert_eq!(breakdown.fastest_lap, 0);
        assert_eq!(breakdown.total(), 0);
    }

    #[test]
    fn test_fastest_lap_tenth() {
        let mut d = driver(Some(10), Some(10));
        d.fastest_lap = true;
        assert_eq!(calculator().driver_points(&d).total(), 12);
    }

    #[test]
    fn test_driver_of_the_day_outside_points() {
        let mut d = driver(Some(15), Some(15));
        d.driver_of_the_day = true;
        assert_eq!(calculator().driver_points(&d).total(), 10);
    }

    #[test]
    fn test_not_qualified_penalty() {
        let breakdown = calculator().driver_points(&driver(None, Some(5)));
        assert_eq!(breakdown.qualifying, -20);
        assert_eq!(breakdown.race, 10);
        // no position change without a qualifying position
        assert_eq!(breakdown.position_change, 0);
        assert_eq!(breakdown.total(), -10);
    }

    #[test]
    fn test_not_classified_in_race() {
        let breakdown = calculator().driver_points(&driver(Some(3), None));
        assert_eq!(breakdown.race, 0);
        assert_eq!(breakdown.positions_changed, 0);
        assert_eq!(breakdown.total(), 8);
    }

    #[test]
    fn test_qualifying_only_ignores_race() {
        let mut d = driver(Some(2), Some(20));
        d.driver_of_the_day = true;
        d.fastest_lap = true;
        assert_eq!(qualifying_only().driver_points(&d).total(), 9);
        assert_eq!(qualifying_only().driver_points(&driver(None, None)).total(), -20);
    }

    fn red_bull_round(
        max: (u32, u32),
        sergio: (u32, u32),
        awards: SpecialAwards,
    ) -> FantasyRegistry {
        let mut registry = FantasyRegistry::new();
        registry.set_qualifying_position(DriverId::Max, Some(max.0)).unwrap();
        registry.set_race_position(DriverId::Max, Some(max.1)).unwrap();
        registry.set_qualifying_position(DriverId::Sergio, Some(sergio.0)).unwrap();
        registry.set_race_position(DriverId::Sergio, Some(sergio.1)).unwrap();
        registry.apply_special_awards(&awards);
        registry
    }

    fn red_bull_points(
        calc: &PointsCalculator,
        registry: &FantasyRegistry,
    ) -> ConstructorPointsBreakdown {
        calc.constructor_points(
            registry.constructor(ConstructorId::RedBull),
            registry.constructor_drivers(ConstructorId::RedBull),
        )
    }

    #[test]
    fn test_constructor_driver_of_the_day() {
        let registry = red_bull_round(
            (1, 1),
            (20, 20),
            SpecialAwards { driver_of_the_day: Some(DriverId::Max), ..Default::default() },
        );
        let calc = calculator();

        assert_eq!(calc.driver_points(registry.driver(DriverId::Max)).total(), 45);
        let red_bull = red_bull_points(&calc, &registry);
        assert_eq!(red_bull.driver_of_the_day_adjustment, -10);
        assert_eq!(red_bull.qualifying_bonus, 5);
        assert_eq!(red_bull.total(), 40);
    }

    #[test]
    fn test_constructor_fastest_lap() {
        let registry = red_bull_round(
            (1, 1),
            (20, 20),
            SpecialAwards { fastest_lap: Some(DriverId::Max), ..Default::default() },
        );
        let calc = calculator();

        assert_eq!(calc.driver_points(registry.driver(DriverId::Max)).total(), 45);
        assert_eq!(red_bull_points(&calc, &registry).total(), 50);
    }

    #[test]
    fn test_constructor_fastest_pitstops() {
        let mut registry = red_bull_round((19, 19), (20, 20), SpecialAwards::default());
        let red_bull = registry.constructor_mut(ConstructorId::RedBull);
        red_bull.fastest_pitstop = true;
        red_bull.second_fastest_pitstop = true;
        red_bull.third_fastest_pitstop = true;
        let calc = calculator();

        let points = red_bull_points(&calc, &registry);
        assert_eq!(points.drivers_total(), 0);
        assert_eq!(points.pitstops_total(), 18);
        assert_eq!(points.qualifying_bonus, -1);
        assert_eq!(points.total(), 17);
    }

    #[test]
    fn test_constructor_uses_unmultiplied_driver_sum() {
        let registry = red_bull_round((2, 3), (5, 4), SpecialAwards::default());
        let calc = calculator();
        let max = calc.driver_points(registry.driver(DriverId::Max)).total();
        let sergio = calc.driver_points(registry.driver(DriverId::Sergio)).total();

        let points = red_bull_points(&calc, &registry);
        assert_eq!(points.total(), max + sergio + 10);
    }

    #[test]
    fn test_qualifying_only_still_removes_driver_of_the_day() {
        let registry = red_bull_round(
            (1, 1),
            (2, 2),
            SpecialAwards { driver_of_the_day: Some(DriverId::Max), ..Default::default() },
        );
        let points = red_bull_points(&qualifying_only(), &registry);
        assert_eq!(points.drivers[0].driver_of_the_day, 0);
        assert_eq!(points.driver_of_the_day_adjustment, -10);
        // 10 + 9 qualifying, -10 driver of the day, +10 both in the top ten
        assert_eq!(points.total(), 19);
    }

    #[test]
    fn test_qualifying_bonus_brackets() {
        use PointsCalculator as C;
        assert_eq!(C::qualifying_bonus([pos(16), pos(20)]), -1);
        assert_eq!(C::qualifying_bonus([pos(1), pos(9)]), 10);
        assert_eq!(C::qualifying_bonus([pos(3), pos(18)]), 5);
        assert_eq!(C::qualifying_bonus([pos(12), pos(17)]), 2);
        assert_eq!(C::qualifying_bonus([pos(11), pos(14)]), 3);
    }

    #[test]
    fn test_qualifying_bonus_boundaries_are_strict() {
        use PointsCalculator as C;
        // P10 is not "< 10"
        assert_eq!(C::qualifying_bonus([pos(9), pos(10)]), 5);
        assert_eq!(C::qualifying_bonus([pos(10), pos(12)]), 3);
        // P15 is not "> 15"
        assert_eq!(C::qualifying_bonus([pos(15), pos(16)]), 2);
        assert_eq!(C::qualifying_bonus([pos(15), pos(12)]), 3);
        assert_eq!(C::qualifying_bonus([pos(15), pos(10)]), 3);
    }

    #[test]
    fn test_qualifying_bonus_not_qualified_counts_as_knocked_out() {
        use PointsCalculator as C;
        assert_eq!(C::qualifying_bonus([None, None]), -1);
        assert_eq!(C::qualifying_bonus([None, pos(17)]), -1);
        assert_eq!(C::qualifying_bonus([None, pos(4)]), 5);
        assert_eq!(C::qualifying_bonus([None, pos(12)]), 2);
    }

    #[test]
    fn test_score_round_rejects_duplicate_positions() {
        let mut registry = FantasyRegistry::new();
        registry.set_race_position(DriverId::Max, Some(1)).unwrap();
        registry.set_race_position(DriverId::Lando, Some(1)).unwrap();
        assert!(calculator().score_round(&registry).is_err());
    }

    #[test]
    fn test_score_round_is_repeatable() {
        let mut registry = FantasyRegistry::new();
        registry.set_qualifying_order(&DriverId::ALL).unwrap();
        let mut race = DriverId::ALL.to_vec();
        race.reverse();
        registry.set_race_order(&race).unwrap();

        let calc = calculator();
        let first = calc.score_round(&registry).unwrap();
        let second = calc.score_round(&registry).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.driver(DriverId::Max).total(), 10 - 19);
        assert_eq!(first.driver(DriverId::Pierre).total(), 63);
    }
}
