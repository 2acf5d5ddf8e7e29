//! The aggregate game state
//!
//! [`GameState`] is the root value threaded through every operation. Core
//! functions take it by reference and hand back a fresh value, so a failed
//! operation always leaves the caller's state exactly as it was.

use serde::{Deserialize, Serialize};

use super::ids::{PlayerId, PropertyId, TransactionId};
use super::market::MarketConditions;
use super::player::Player;
use super::property::Property;

#[cfg(feature = "ts")]
use ts_rs::TS;

/// Stage of a turn. Only set externally; the core never advances it on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    MarketAnalysis,
    #[default]
    PropertyAcquisition,
    Development,
    IncomeCollection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct GameState {
    /// Starts at 1 and only ever increases
    pub current_turn: u32,
    pub current_player: PlayerId,
    pub phase: GamePhase,
    pub players: Vec<Player>,
    pub properties: Vec<Property>,
    pub market: MarketConditions,
    /// Snapshot taken at selection time; not refreshed by later changes
    pub selected_property: Option<Property>,
    pub activity_log: Vec<String>,
    /// Next value handed out by [`GameState::mint_transaction_id`]
    #[serde(default)]
    pub next_transaction_id: u64,
}

impl GameState {
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn property(&self, id: PropertyId) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// The player whose turn it is, if the id resolves
    pub fn active_player(&self) -> Option<&Player> {
        self.player(self.current_player)
    }

    /// Look up the property occupying a grid cell
    pub fn property_at(&self, x: u16, y: u16) -> Option<&Property> {
        self.properties
            .iter()
            .find(|p| p.position.x == x && p.position.y == y)
    }

    /// Move the id counter past every transaction already recorded.
    ///
    /// Saves written before the counter existed deserialize it as 0.
    pub(crate) fn resume_transaction_ids(&mut self) {
        let next_unused = self
            .players
            .iter()
            .flat_map(|p| &p.transaction_history)
            .map(|t| t.id.0 + 1)
            .max()
            .unwrap_or(1);
        self.next_transaction_id = self.next_transaction_id.max(next_unused);
    }

    pub(crate) fn mint_transaction_id(&mut self) -> TransactionId {
        let id = TransactionId(self.next_transaction_id);
        self.next_transaction_id += 1;
        id
    }
}
