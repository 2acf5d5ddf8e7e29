//! Real estate trading game core
//!
//! This crate holds the rules of a single-player property trading game played
//! on a 20x15 grid of lots. It covers:
//! - A financial engine that owns every cash movement and audits consistency
//! - Property purchase and sale built on top of the financial engine
//! - Game state construction, turns, phase and selection
//! - JSON persistence through an injected key-value store
//! - Event handlers that turn UI actions into state transitions
//!
//! Every operation takes the current [`GameState`] by reference and returns a
//! new one, so a failed operation leaves the caller's state untouched.
//!
//! ```ignore
//! use estate_core::{GameAction, GameConfig, create_game_state, handle_action};
//!
//! let state = create_game_state(&GameConfig::default().with_seed(7))?;
//! let lot = state.property_at(3, 4).map(|p| p.id);
//! let state = handle_action(&state, &GameAction::Select { property_id: lot });
//! let state = handle_action(&state, &GameAction::Buy);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod financial;
pub mod game_state;
pub mod handlers;
pub mod persistence;
pub mod property_transactions;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod display;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::GameConfig;
pub use error::{GameError, PersistenceError, Result, StorageError};
pub use game_state::{create_game_state, create_initial_game_state};
pub use handlers::{available_actions, handle_action};
pub use model::{
    GameAction, GamePhase, GameState, Player, PlayerId, Property, PropertyId, PropertyType,
    Transaction, TransactionKind,
};
pub use persistence::{KeyValueStore, MemoryStore, load_game_state, save_game_state};
