//! Tests for the game core
//!
//! Tests are organized by topic:
//! - `financial` - Transactions, transfers, audits and exports
//! - `property_transactions` - Buying and selling against the bank
//! - `game_state` - Initial state, turns, selection and validation
//! - `persistence` - Save/load through a key-value store
//! - `handlers` - UI action dispatch and activity log messages

mod persistence;
mod property_transactions;

use crate::game_state::create_player;
use crate::model::{
    DevelopmentLevel, GamePhase, GameState, GridPosition, MarketConditions, Player, PlayerId,
    Property, PropertyId, PropertyType,
};

pub(crate) const MOGUL: PlayerId = PlayerId(1);
pub(crate) const RIVAL: PlayerId = PlayerId(2);

pub(crate) fn lot(id: u16, value: f64) -> Property {
    Property {
        id: PropertyId(id),
        position: GridPosition { x: id, y: 0 },
        property_type: PropertyType::VacantLot,
        value,
        owner: None,
        development_level: DevelopmentLevel::VACANT,
        monthly_income: 0.0,
        development_cost: (value * 0.5).round(),
        name: format!("Lot {id}"),
    }
}

/// A small hand-built game: two players and three unowned lots.
///
/// Lot 0 is worth 100,000, lot 1 is worth 250,000 and lot 2 is worth 40,000.
pub(crate) fn small_game(mogul_cash: f64, rival_cash: f64) -> GameState {
    let players: Vec<Player> = vec![
        create_player(MOGUL, "Mogul", false, mogul_cash),
        create_player(RIVAL, "Rival", true, rival_cash),
    ];
    GameState {
        current_turn: 1,
        current_player: MOGUL,
        phase: GamePhase::PropertyAcquisition,
        players,
        properties: vec![lot(0, 100_000.0), lot(1, 250_000.0), lot(2, 40_000.0)],
        market: MarketConditions::default(),
        selected_property: None,
        activity_log: Vec::new(),
        next_transaction_id: 1,
    }
}

pub(crate) fn cash_of(state: &GameState, id: PlayerId) -> f64 {
    state.player(id).map(|p| p.cash).unwrap_or(f64::NAN)
}
