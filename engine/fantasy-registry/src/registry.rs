use crate::error::{RegistryError, Result};
use crate::types::{
    Constructor, ConstructorId, ConstructorPrice, Driver, DriverId, DriverPrice, Position,
    Session, SpecialAwards,
};
use std::collections::HashMap;
use tracing::{debug, info};

/// Fantasy Registry - Every driver and constructor with their round state
///
/// The catalog is total: every `DriverId` and `ConstructorId` has a record
/// from construction on, so lookups by id cannot fail. Cloning the registry
/// gives a fully isolated copy of the round state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FantasyRegistry {
    /// Indexed by `DriverId::index`
    drivers: Vec<Driver>,

    /// Indexed by `ConstructorId::index`
    constructors: Vec<Constructor>,
}

impl FantasyRegistry {
    /// Create the full catalog with zero prices and no results
    pub fn new() -> Self {
        Self {
            drivers: DriverId::ALL.into_iter().map(Driver::new).collect(),
            constructors: ConstructorId::ALL.into_iter().map(Constructor::new).collect(),
        }
    }

    pub fn driver(&self, id: DriverId) -> &Driver {
        &self.drivers[id.index()]
    }

    pub fn driver_mut(&mut self, id: DriverId) -> &mut Driver {
        &mut self.drivers[id.index()]
    }

    pub fn constructor(&self, id: ConstructorId) -> &Constructor {
        &self.constructors[id.index()]
    }

    pub fn constructor_mut(&mut self, id: ConstructorId) -> &mut Constructor {
        &mut self.constructors[id.index()]
    }

    /// All drivers in catalog order
    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    /// All constructors in catalog order
    pub fn constructors(&self) -> &[Constructor] {
        &self.constructors
    }

    /// The two driver records owned by a constructor
    pub fn constructor_drivers(&self, id: ConstructorId) -> [&Driver; 2] {
        let [first, second] = id.drivers();
        [self.driver(first), self.driver(second)]
    }

    /// Overwrite driver prices. Drivers without a record keep their price.
    pub fn load_driver_prices(&mut self, prices: &[DriverPrice]) {
        for record in prices {
            self.driver_mut(record.name).price = record.price;
        }
        info!("Loaded {} driver prices", prices.len());
    }

    /// Overwrite constructor prices. Constructors without a record keep their price.
    pub fn load_constructor_prices(&mut self, prices: &[ConstructorPrice]) {
        for record in prices {
            self.constructor_mut(record.name).price = record.price;
        }
        info!("Loaded {} constructor prices", prices.len());
    }

    /// Set a single qualifying position (`None` = did not qualify)
    pub fn set_qualifying_position(&mut self, id: DriverId, position: Option<u32>) -> Result<()> {
        let position = Self::checked_position(Session::Qualifying, position)?;
        self.driver_mut(id).qualifying_position = position;
        Ok(())
    }

    /// Set a single race position (`None` = not classified)
    pub fn set_race_position(&mut self, id: DriverId, position: Option<u32>) -> Result<()> {
        let position = Self::checked_position(Session::Race, position)?;
        self.driver_mut(id).race_position = position;
        Ok(())
    }

    /// Replace all qualifying positions from a finishing order (first entry = P1).
    /// Drivers missing from the order end up without a qualifying position.
    pub fn set_qualifying_order(&mut self, order: &[DriverId]) -> Result<()> {
        let positions = Self::positions_from_order(Session::Qualifying, order)?;
        for driver in &mut self.drivers {
            driver.qualifying_position = positions.get(&driver.id).copied();
        }
        debug!("Applied qualifying order with {} classified drivers", order.len());
        Ok(())
    }

    /// Replace all race positions from a finishing order (first entry = P1).
    pub fn set_race_order(&mut self, order: &[DriverId]) -> Result<()> {
        let positions = Self::positions_from_order(Session::Race, order)?;
        for driver in &mut self.drivers {
            driver.race_position = positions.get(&driver.id).copied();
        }
        debug!("Applied race order with {} classified drivers", order.len());
        Ok(())
    }

    /// Replace all special-award flags with the given assignment
    pub fn apply_special_awards(&mut self, awards: &SpecialAwards) {
        for driver in &mut self.drivers {
            driver.fastest_lap = awards.fastest_lap == Some(driver.id);
            driver.driver_of_the_day = awards.driver_of_the_day == Some(driver.id);
        }
        for constructor in &mut self.constructors {
            constructor.fastest_pitstop = awards.fastest_pitstop == Some(constructor.id);
            constructor.second_fastest_pitstop =
                awards.second_fastest_pitstop == Some(constructor.id);
            constructor.third_fastest_pitstop =
                awards.third_fastest_pitstop == Some(constructor.id);
        }
        debug!("Applied special awards: {:?}", awards);
    }

    /// Check that no two drivers share a qualifying or race position
    pub fn validate(&self) -> Result<()> {
        self.check_unique_positions(Session::Qualifying, |d| d.qualifying_position)?;
        self.check_unique_positions(Session::Race, |d| d.race_position)?;
        Ok(())
    }

    /// Clear positions and awards for every entity, keeping prices
    pub fn reset_round(&mut self) {
        self.drivers.iter_mut().for_each(Driver::reset_round);
        self.constructors.iter_mut().for_each(Constructor::reset_round);
    }

    fn checked_position(session: Session, position: Option<u32>) -> Result<Option<Position>> {
        match position {
            None => Ok(None),
            Some(value) => Position::new(value)
                .map(Some)
                .ok_or(RegistryError::PositionOutOfRange { session, position: value }),
        }
    }

    fn positions_from_order(
        session: Session,
        order: &[DriverId],
    ) -> Result<HashMap<DriverId, Position>> {
        let mut positions = HashMap::with_capacity(order.len());
        for (i, &driver) in order.iter().enumerate() {
            let value = (i + 1) as u32;
            let position = Position::new(value)
                .ok_or(RegistryError::PositionOutOfRange { session, position: value })?;
            if positions.insert(driver, position).is_some() {
                return Err(RegistryError::DuplicateEntry { session, driver });
            }
        }
        Ok(positions)
    }

    fn check_unique_positions(
        &self,
        session: Session,
        position_of: impl Fn(&Driver) -> Option<Position>,
    ) -> Result<()> {
        let mut used: HashMap<Position, DriverId> = HashMap::new();
        for driver in &self.drivers {
            let Some(position) = position_of(driver) else {
                continue;
            };
            if let Some(&first) = used.get(&position) {
                return Err(RegistryError::DuplicatePosition {
                    session,
                    position: position.get(),
                    first,
                    second: driver.id,
                });
            }
            used.insert(position, driver.id);
        }
        Ok(())
    }
}

impl Default for FantasyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
