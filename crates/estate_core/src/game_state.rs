//! Game state manager
//!
//! Builds the starting state and provides the non-financial transitions:
//! turns, phase, selection and the activity log.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::model::{
    AiStrategy, DevelopmentLevel, GamePhase, GameState, GridPosition, MarketConditions, Player,
    PlayerId, Property, PropertyId, PropertyType,
};

/// Id of the human player in a fresh game
pub const HUMAN_PLAYER_ID: PlayerId = PlayerId(1);

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 6;

// ============================================================================
// Construction
// ============================================================================

pub fn create_player(id: PlayerId, name: &str, is_ai: bool, starting_cash: f64) -> Player {
    Player {
        id,
        name: name.to_string(),
        cash: starting_cash,
        net_worth: starting_cash,
        properties: Vec::new(),
        transaction_history: Vec::new(),
        is_ai,
        strategy: Some(AiStrategy::Balanced),
    }
}

/// Create a table of players with sequential ids starting at 1.
///
/// A game seats between two and six players, each with a distinct name.
pub fn create_players(names: &[&str], starting_cash: f64) -> Result<Vec<Player>> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&names.len()) {
        return Err(GameError::InvalidArgument(format!(
            "Game must have between {MIN_PLAYERS} and {MAX_PLAYERS} players"
        )));
    }
    if names.iter().any(|n| n.trim().is_empty()) {
        return Err(GameError::InvalidArgument(
            "Player names cannot be empty".to_string(),
        ));
    }
    let unique: FxHashSet<&str> = names.iter().copied().collect();
    if unique.len() != names.len() {
        return Err(GameError::InvalidArgument(
            "All player names must be unique".to_string(),
        ));
    }

    Ok(names
        .iter()
        .zip(1u16..)
        .map(|(name, id)| create_player(PlayerId(id), name, false, starting_cash))
        .collect())
}

fn developed_type(rng: &mut SmallRng) -> PropertyType {
    match rng.random_range(0..3) {
        0 => PropertyType::Residential,
        1 => PropertyType::Commercial,
        _ => PropertyType::Industrial,
    }
}

/// Roll a single grid cell
fn generate_property(rng: &mut SmallRng, id: PropertyId, x: u16, y: u16, developed: bool) -> Property {
    let property_type = if developed {
        developed_type(rng)
    } else {
        PropertyType::VacantLot
    };

    // (value band, max starting level, income band)
    let (value_range, max_level, income_range) = match property_type {
        PropertyType::VacantLot => (10_000u32..=50_000, 0u8, 0u32..=0),
        PropertyType::Residential => (50_000..=150_000, 2, 500..=2_000),
        PropertyType::Commercial => (100_000..=300_000, 3, 1_500..=5_000),
        PropertyType::Industrial => (80_000..=250_000, 2, 1_000..=4_000),
    };

    let value = f64::from(rng.random_range(value_range));
    let level = if max_level == 0 {
        DevelopmentLevel::VACANT
    } else {
        DevelopmentLevel::new(rng.random_range(1..=max_level)).unwrap_or(DevelopmentLevel::MAX)
    };
    let monthly_income = f64::from(rng.random_range(income_range));
    let cost_share = if developed {
        rng.random_range(0.3..=0.5)
    } else {
        rng.random_range(0.4..=0.6)
    };

    let name = match property_type {
        PropertyType::VacantLot => format!("Vacant Lot {x}-{y}"),
        PropertyType::Residential => format!("Residence {x}-{y}"),
        PropertyType::Commercial => format!("Storefront {x}-{y}"),
        PropertyType::Industrial => format!("Warehouse {x}-{y}"),
    };

    Property {
        id,
        position: GridPosition { x, y },
        property_type,
        value,
        owner: None,
        development_level: level,
        monthly_income,
        development_cost: (value * cost_share).round(),
        name,
    }
}

/// Fill every grid cell, row by row
pub fn generate_properties(config: &GameConfig, rng: &mut SmallRng) -> Vec<Property> {
    let mut properties =
        Vec::with_capacity(usize::from(config.grid_width) * usize::from(config.grid_height));
    for y in 0..config.grid_height {
        for x in 0..config.grid_width {
            let id = PropertyId(y * config.grid_width + x);
            let developed = rng.random_bool(config.developed_ratio);
            properties.push(generate_property(rng, id, x, y, developed));
        }
    }
    properties
}

fn welcome_log() -> Vec<String> {
    vec![
        "Game started - Welcome to Real Estate Empire!".to_string(),
        "Turn 1 - Your turn to make a move".to_string(),
        "Select a property to begin building your empire".to_string(),
    ]
}

fn build_state(config: &GameConfig, seed: u64) -> GameState {
    let mut rng = SmallRng::seed_from_u64(seed);
    tracing::debug!(seed, "generating property grid");

    let player = create_player(
        HUMAN_PLAYER_ID,
        &config.player_name,
        false,
        config.starting_cash,
    );

    GameState {
        current_turn: 1,
        current_player: player.id,
        phase: GamePhase::PropertyAcquisition,
        players: vec![player],
        properties: generate_properties(config, &mut rng),
        market: MarketConditions::default(),
        selected_property: None,
        activity_log: welcome_log(),
        next_transaction_id: 1,
    }
}

/// Build a fresh game from a configuration.
pub fn create_game_state(config: &GameConfig) -> Result<GameState> {
    config.validate()?;
    let seed = config.seed.unwrap_or_else(rand::random);
    Ok(build_state(config, seed))
}

/// Build a fresh standard game: one player with $750,000 on a 20x15 grid.
pub fn create_initial_game_state() -> GameState {
    build_state(&GameConfig::default(), rand::random())
}

// ============================================================================
// Transitions
// ============================================================================

pub fn advance_turn(state: &GameState) -> GameState {
    let next_turn = state.current_turn + 1;
    let mut next = state.clone();
    next.current_turn = next_turn;
    next.activity_log
        .push(format!("Turn {next_turn} - Your turn to make a move"));
    next
}

/// Set the phase explicitly. Nothing in the core calls this on its own.
pub fn set_phase(state: &GameState, phase: GamePhase) -> GameState {
    GameState {
        phase,
        ..state.clone()
    }
}

pub fn add_to_activity_log(state: &GameState, message: impl Into<String>) -> GameState {
    let mut next = state.clone();
    next.activity_log.push(message.into());
    next
}

/// Select a property by id, or clear the selection with `None`.
///
/// The stored selection is a copy of the property at this moment.
pub fn select_property(state: &GameState, property_id: Option<PropertyId>) -> Result<GameState> {
    let selected_property = match property_id {
        None => None,
        Some(id) => Some(
            state
                .property(id)
                .ok_or_else(|| GameError::property_not_found(id))?
                .clone(),
        ),
    };

    Ok(GameState {
        selected_property,
        ..state.clone()
    })
}

// ============================================================================
// Validation
// ============================================================================

fn invalid(message: String) -> GameError {
    GameError::ValidationFailure(vec![message])
}

/// Structural check run on startup and on every load. Stops at the first problem.
pub fn validate_game_state(state: &GameState) -> Result<()> {
    if state.players.is_empty() {
        return Err(invalid("Game must have at least one player".to_string()));
    }
    if state.active_player().is_none() {
        return Err(invalid(format!(
            "Current player {} not found in players list",
            state.current_player
        )));
    }

    let property_index: FxHashMap<PropertyId, &Property> =
        state.properties.iter().map(|p| (p.id, p)).collect();

    for player in &state.players {
        if player.cash < 0.0 {
            return Err(invalid(format!("Player {} has negative cash", player.name)));
        }
        for property_id in &player.properties {
            let Some(property) = property_index.get(property_id) else {
                return Err(invalid(format!(
                    "Player {} owns non-existent property {}",
                    player.name, property_id
                )));
            };
            if !property.is_owned_by(player.id) {
                return Err(invalid(format!("Property {property_id} ownership mismatch")));
            }
        }
    }

    Ok(())
}
