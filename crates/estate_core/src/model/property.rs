//! Property definitions
//!
//! A property is one parcel on the fixed grid. Properties are created once
//! with the game state and afterwards only change hands.

use serde::{Deserialize, Serialize};

use super::ids::{PlayerId, PropertyId};

#[cfg(feature = "ts")]
use ts_rs::TS;

/// Width of the property grid in cells
pub const GRID_WIDTH: u16 = 20;
/// Height of the property grid in cells
pub const GRID_HEIGHT: u16 = 15;

/// Cell coordinate on the property grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct GridPosition {
    pub x: u16,
    pub y: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Residential,
    Commercial,
    Industrial,
    VacantLot,
}

impl PropertyType {
    /// Human readable name, e.g. "vacant lot"
    pub fn label(self) -> &'static str {
        match self {
            PropertyType::Residential => "residential",
            PropertyType::Commercial => "commercial",
            PropertyType::Industrial => "industrial",
            PropertyType::VacantLot => "vacant lot",
        }
    }
}

/// How built-up a property is, from vacant (0) to fully developed (5)
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
#[serde(try_from = "u8", into = "u8")]
pub struct DevelopmentLevel(u8);

impl DevelopmentLevel {
    pub const VACANT: DevelopmentLevel = DevelopmentLevel(0);
    pub const MAX: DevelopmentLevel = DevelopmentLevel(5);

    /// Returns `None` when `level` is above [`DevelopmentLevel::MAX`]
    pub fn new(level: u8) -> Option<Self> {
        (level <= Self::MAX.0).then_some(DevelopmentLevel(level))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_developed(self) -> bool {
        self > Self::VACANT
    }
}

impl TryFrom<u8> for DevelopmentLevel {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        DevelopmentLevel::new(level)
            .ok_or_else(|| format!("development level {level} exceeds maximum of 5"))
    }
}

impl From<DevelopmentLevel> for u8 {
    fn from(level: DevelopmentLevel) -> Self {
        level.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct Property {
    pub id: PropertyId,
    pub position: GridPosition,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    /// Current market value in dollars
    pub value: f64,
    /// `None` while the property is still held by the bank
    pub owner: Option<PlayerId>,
    pub development_level: DevelopmentLevel,
    /// Only meaningful once the property is developed
    pub monthly_income: f64,
    pub development_cost: f64,
    pub name: String,
}

impl Property {
    pub fn is_owned_by(&self, player_id: PlayerId) -> bool {
        self.owner == Some(player_id)
    }
}
