use crate::error::RegistryError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A driver on the grid. Codes in input files use the upper-case form (e.g. "MAX").
///
/// Declaration order is the catalog order and drives `Ord`, so sorted
/// collections of ids iterate the same way the catalog does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DriverId {
    Max,
    Charles,
    George,
    Carlos,
    Sergio,
    Fernando,
    Lando,
    Oscar,
    Lewis,
    Nico,
    Yuki,
    Lance,
    Alexander,
    Daniel,
    Kevin,
    Valtteri,
    Zhou,
    Logan,
    Esteban,
    Pierre,
}

impl DriverId {
    pub const ALL: [DriverId; 20] = [
        DriverId::Max,
        DriverId::Charles,
        DriverId::George,
        DriverId::Carlos,
        DriverId::Sergio,
        DriverId::Fernando,
        DriverId::Lando,
        DriverId::Oscar,
        DriverId::Lewis,
        DriverId::Nico,
        DriverId::Yuki,
        DriverId::Lance,
        DriverId::Alexander,
        DriverId::Daniel,
        DriverId::Kevin,
        DriverId::Valtteri,
        DriverId::Zhou,
        DriverId::Logan,
        DriverId::Esteban,
        DriverId::Pierre,
    ];

    /// Index into the catalog
    pub fn index(self) -> usize {
        self as usize
    }

    /// Input-file code (e.g. "MAX")
    pub fn code(self) -> &'static str {
        match self {
            DriverId::Max => "MAX",
            DriverId::Charles => "CHARLES",
            DriverId::George => "GEORGE",
            DriverId::Carlos => "CARLOS",
            DriverId::Sergio => "SERGIO",
            DriverId::Fernando => "FERNANDO",
            DriverId::Lando => "LANDO",
            DriverId::Oscar => "OSCAR",
            DriverId::Lewis => "LEWIS",
            DriverId::Nico => "NICO",
            DriverId::Yuki => "YUKI",
            DriverId::Lance => "LANCE",
            DriverId::Alexander => "ALEXANDER",
            DriverId::Daniel => "DANIEL",
            DriverId::Kevin => "KEVIN",
            DriverId::Valtteri => "VALTTERI",
            DriverId::Zhou => "ZHOU",
            DriverId::Logan => "LOGAN",
            DriverId::Esteban => "ESTEBAN",
            DriverId::Pierre => "PIERRE",
        }
    }

    /// Full display name (e.g. "Max Verstappen")
    pub fn full_name(self) -> &'static str {
        match self {
            DriverId::Max => "Max Verstappen",
            DriverId::Charles => "Charles Leclerc",
            DriverId::George => "George Russell",
            DriverId::Carlos => "Carlos Sainz",
            DriverId::Sergio => "Sergio Perez",
            DriverId::Fernando => "Fernando Alonso",
            DriverId::Lando => "Lando Norris",
            DriverId::Oscar => "Oscar Piastri",
            DriverId::Lewis => "Lewis Hamilton",
            DriverId::Nico => "Nico Hulkenberg",
            DriverId::Yuki => "Yuki Tsunoda",
            DriverId::Lance => "Lance Stroll",
            DriverId::Alexander => "Alexander Albon",
            DriverId::Daniel => "Daniel Ricciardo",
            DriverId::Kevin => "Kevin Magnussen",
            DriverId::Valtteri => "Valtteri Bottas",
            DriverId::Zhou => "Zhou Guanyu",
            DriverId::Logan => "Logan Sargeant",
            DriverId::Esteban => "Esteban Ocon",
            DriverId::Pierre => "Pierre Gasly",
        }
    }
}

impl fmt::Display for DriverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name())
    }
}

impl FromStr for DriverId {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        DriverId::ALL
            .into_iter()
            .find(|id| id.code() == code)
            .ok_or_else(|| RegistryError::UnknownDriver(s.to_string()))
    }
}

/// A constructor, always fielding exactly two drivers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConstructorId {
    RedBull,
    Mclaren,
    Mercedes,
    Ferrari,
    AstonMartin,
    Rb,
    Alpine,
    Williams,
    Sauber,
    Haas,
}

impl ConstructorId {
    pub const ALL: [ConstructorId; 10] = [
        ConstructorId::RedBull,
        ConstructorId::Mclaren,
        ConstructorId::Mercedes,
        ConstructorId::Ferrari,
        ConstructorId::AstonMartin,
        ConstructorId::Rb,
        ConstructorId::Alpine,
        ConstructorId::Williams,
        ConstructorId::Sauber,
        ConstructorId::Haas,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn code(self) -> &'static str {
        match self {
            ConstructorId::RedBull => "RED_BULL",
            ConstructorId::Mclaren => "MCLAREN",
            ConstructorId::Mercedes => "MERCEDES",
            ConstructorId::Ferrari => "FERRARI",
            ConstructorId::AstonMartin => "ASTON_MARTIN",
            ConstructorId::Rb => "RB",
            ConstructorId::Alpine => "ALPINE",
            ConstructorId::Williams => "WILLIAMS",
            ConstructorId::Sauber => "SAUBER",
            ConstructorId::Haas => "HAAS",
        }
    }

    pub fn full_name(self) -> &'static str {
        match self {
            ConstructorId::RedBull => "Red Bull Racing",
            ConstructorId::Mclaren => "McLaren",
            ConstructorId::Mercedes => "Mercedes",
            ConstructorId::Ferrari => "Ferrari",
            ConstructorId::AstonMartin => "Aston Martin",
            ConstructorId::Rb => "RB",
            ConstructorId::Alpine => "Alpine",
            ConstructorId::Williams => "Williams",
            ConstructorId::Sauber => "Sauber",
            ConstructorId::Haas => "Haas",
        }
    }

    /// The two drivers racing for this constructor
    pub fn drivers(self) -> [DriverId; 2] {
        match self {
            ConstructorId::RedBull => [DriverId::Max, DriverId::Sergio],
            ConstructorId::Mclaren => [DriverId::Lando, DriverId::Oscar],
            ConstructorId::Mercedes => [DriverId::Lewis, DriverId::George],
            ConstructorId::Ferrari => [DriverId::Charles, DriverId::Carlos],
            ConstructorId::AstonMartin => [DriverId::Fernando, DriverId::Lance],
            ConstructorId::Rb => [DriverId::Daniel, DriverId::Yuki],
            ConstructorId::Alpine => [DriverId::Pierre, DriverId::Esteban],
            ConstructorId::Williams => [DriverId::Alexander, DriverId::Logan],
            ConstructorId::Sauber => [DriverId::Zhou, DriverId::Valtteri],
            ConstructorId::Haas => [DriverId::Nico, DriverId::Kevin],
        }
    }
}

impl fmt::Display for ConstructorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name())
    }
}

impl FromStr for ConstructorId {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        ConstructorId::ALL
            .into_iter()
            .find(|id| id.code() == code)
            .ok_or_else(|| RegistryError::UnknownConstructor(s.to_string()))
    }
}

/// Session a finishing position belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Session {
    Qualifying,
    Race,
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Session::Qualifying => f.write_str("Qualifying"),
            Session::Race => f.write_str("Race"),
        }
    }
}

/// A classified finishing position, always within 1..=20
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Position(u8);

impl Position {
    pub const FIRST: u8 = 1;
    pub const LAST: u8 = 20;

    pub fn new(value: u32) -> Option<Self> {
        if (Self::FIRST as u32..=Self::LAST as u32).contains(&value) {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Position {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Position::new(value as u32).ok_or_else(|| format!("position {value} is outside 1..=20"))
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> Self {
        position.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Per-round state of a driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    pub id: DriverId,

    /// Price in millions
    pub price: Decimal,

    /// `None` means the driver did not set a qualifying time
    pub qualifying_position: Option<Position>,

    /// `None` means the driver was not classified in the race
    pub race_position: Option<Position>,

    pub fastest_lap: bool,
    pub driver_of_the_day: bool,
}

impl Driver {
    pub fn new(id: DriverId) -> Self {
        Self {
            id,
            price: Decimal::ZERO,
            qualifying_position: None,
            race_position: None,
            fastest_lap: false,
            driver_of_the_day: false,
        }
    }

    pub fn name(&self) -> &'static str {
        self.id.full_name()
    }

    /// Clear positions and awards, keeping the price
    pub fn reset_round(&mut self) {
        self.qualifying_position = None;
        self.race_position = None;
        self.fastest_lap = false;
        self.driver_of_the_day = false;
    }
}

/// Per-round state of a constructor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constructor {
    pub id: ConstructorId,
    pub price: Decimal,
    pub fastest_pitstop: bool,
    pub second_fastest_pitstop: bool,
    pub third_fastest_pitstop: bool,
}

impl Constructor {
    pub fn new(id: ConstructorId) -> Self {
        Self {
            id,
            price: Decimal::ZERO,
            fastest_pitstop: false,
            second_fastest_pitstop: false,
            third_fastest_pitstop: false,
        }
    }

    pub fn name(&self) -> &'static str {
        self.id.full_name()
    }

    pub fn driver_ids(&self) -> [DriverId; 2] {
        self.id.drivers()
    }

    pub fn reset_round(&mut self) {
        self.fastest_pitstop = false;
        self.second_fastest_pitstop = false;
        self.third_fastest_pitstop = false;
    }
}

/// Price record for a driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverPrice {
    pub name: DriverId,
    pub price: Decimal,
}

/// Price record for a constructor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorPrice {
    pub name: ConstructorId,
    pub price: Decimal,
}

/// One-off awards handed out during a race weekend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecialAwards {
    pub fastest_lap: Option<DriverId>,
    pub driver_of_the_day: Option<DriverId>,
    pub fastest_pitstop: Option<ConstructorId>,
    pub second_fastest_pitstop: Option<ConstructorId>,
    pub third_fastest_pitstop: Option<ConstructorId>,
}

/// Entities that must never be picked for a roster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Exclusions {
    pub drivers: BTreeSet<DriverId>,
    pub constructors: BTreeSet<ConstructorId>,
}

impl Exclusions {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_driver_excluded(&self, id: DriverId) -> bool {
        self.drivers.contains(&id)
    }

    pub fn is_constructor_excluded(&self, id: ConstructorId) -> bool {
        self.constructors.contains(&id)
    }
}
