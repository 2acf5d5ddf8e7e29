//! A running game bound to its storage.
//!
//! [`Session`] owns the current [`GameState`] and the store it is saved to.
//! Every dispatched action replaces the state and is saved straight away.

use estate_core::config::GameConfig;
use estate_core::game_state::{add_to_activity_log, create_game_state, validate_game_state};
use estate_core::{
    GameAction, GameError, GameState, KeyValueStore, PersistenceError, Result, handle_action,
    load_game_state, save_game_state,
};

pub struct Session<S: KeyValueStore> {
    state: GameState,
    storage: S,
}

impl<S: KeyValueStore> Session<S> {
    /// Resume the saved game, or start a new one from `config` when there is
    /// nothing usable in storage.
    pub fn open(storage: S, config: &GameConfig) -> Result<Self> {
        let state = match load_game_state(&storage) {
            Ok(state) => {
                tracing::info!(turn = state.current_turn, "resumed saved game");
                state
            }
            Err(GameError::Persistence(PersistenceError::Missing)) => {
                tracing::info!("no saved game, starting fresh");
                create_game_state(config)?
            }
            Err(e) => {
                tracing::warn!(error = %e, "saved game unusable, starting fresh");
                create_game_state(config)?
            }
        };

        let state = match validate_game_state(&state) {
            Ok(()) => state,
            Err(e) => {
                tracing::error!(error = %e, "game state failed validation");
                add_to_activity_log(&state, format!("Game state error: {e}"))
            }
        };

        Ok(Self { state, storage })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Apply an action and save the result.
    ///
    /// A failed save is logged and the new state is kept in memory.
    pub fn dispatch(&mut self, action: &GameAction) -> &GameState {
        self.state = handle_action(&self.state, action);
        if let Err(e) = self.save() {
            tracing::warn!(error = %e, "failed to save game");
        }
        &self.state
    }

    pub fn save(&self) -> Result<()> {
        save_game_state(&self.storage, &self.state)
    }

    pub fn into_parts(self) -> (GameState, S) {
        (self.state, self.storage)
    }
}
