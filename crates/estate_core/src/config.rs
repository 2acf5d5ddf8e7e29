//! Game setup configuration
//!
//! [`GameConfig`] carries the knobs used when building a fresh game. The
//! defaults reproduce the standard single-player setup.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};
use crate::model::{GRID_HEIGHT, GRID_WIDTH};

pub const STARTING_CASH: f64 = 750_000.0;
pub const DEFAULT_PLAYER_NAME: &str = "Property Mogul";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player_name: String,
    pub starting_cash: f64,
    pub grid_width: u16,
    pub grid_height: u16,
    /// Probability that a cell starts out developed
    pub developed_ratio: f64,
    /// Seed for grid generation; a random seed is drawn when `None`
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            starting_cash: STARTING_CASH,
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            developed_ratio: 0.2,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.player_name.trim().is_empty() {
            return Err(GameError::InvalidArgument(
                "Player name cannot be empty".to_string(),
            ));
        }
        if !self.starting_cash.is_finite() || self.starting_cash < 0.0 {
            return Err(GameError::InvalidArgument(format!(
                "Starting cash must be a non-negative amount, got {}",
                self.starting_cash
            )));
        }
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(GameError::InvalidArgument(
                "Grid must have at least one cell".to_string(),
            ));
        }
        // Property ids are u16 cell indices
        if u32::from(self.grid_width) * u32::from(self.grid_height) > u32::from(u16::MAX) {
            return Err(GameError::InvalidArgument(format!(
                "Grid of {}x{} cells is too large",
                self.grid_width, self.grid_height
            )));
        }
        if !(0.0..=1.0).contains(&self.developed_ratio) {
            return Err(GameError::InvalidArgument(format!(
                "Developed ratio must be between 0 and 1, got {}",
                self.developed_ratio
            )));
        }
        Ok(())
    }
}
