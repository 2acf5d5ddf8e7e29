//! Save and load through an injected key-value store.
//!
//! The core never reaches for a process-wide storage singleton. Callers pass
//! a [`KeyValueStore`]; the platform crate provides file system and browser
//! LocalStorage backends, and [`MemoryStore`] covers tests and headless use.

use std::cell::RefCell;

use rustc_hash::FxHashMap;

use crate::error::{GameError, PersistenceError, Result, StorageError};
use crate::game_state::validate_game_state;
use crate::model::GameState;

/// Slot holding the whole serialized game
pub const STORAGE_KEY: &str = "real_estate_empire_game_state";

/// A string-to-string store with a single synchronous get/set pair.
///
/// Failures surface immediately; implementations do not retry.
pub trait KeyValueStore {
    /// Read a value, `Ok(None)` when the key has never been written
    fn get(&self, key: &str) -> std::result::Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> std::result::Result<(), StorageError>;
}

/// In-memory store that echoes back exactly what was written
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<FxHashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> std::result::Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> std::result::Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> std::result::Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> std::result::Result<(), StorageError> {
        (**self).set(key, value)
    }
}

pub fn serialize_game_state(state: &GameState) -> Result<String> {
    serde_json::to_string(state).map_err(|e| PersistenceError::Serialize(e).into())
}

/// Parse a saved game and reject it if it fails [`validate_game_state`].
///
/// The transaction id counter is never left behind ids already in a history.
pub fn deserialize_game_state(serialized: &str) -> Result<GameState> {
    let mut state: GameState = serde_json::from_str(serialized)
        .map_err(|e| GameError::from(PersistenceError::Parse(e)))?;
    validate_game_state(&state)?;
    state.resume_transaction_ids();
    Ok(state)
}

pub fn save_game_state(store: &impl KeyValueStore, state: &GameState) -> Result<()> {
    let serialized = serialize_game_state(state)?;
    store
        .set(STORAGE_KEY, &serialized)
        .map_err(PersistenceError::from)?;
    tracing::debug!(bytes = serialized.len(), "game state saved");
    Ok(())
}

pub fn load_game_state(store: &impl KeyValueStore) -> Result<GameState> {
    let serialized = store
        .get(STORAGE_KEY)
        .map_err(PersistenceError::from)?
        .ok_or(PersistenceError::Missing)?;
    deserialize_game_state(&serialized)
}
