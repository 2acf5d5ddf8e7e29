//! Tests for saving and loading the game
//!
//! These tests verify:
//! - A saved game loads back identical
//! - Missing, corrupt and structurally invalid saves are rejected
//! - Storage failures surface as persistence errors

use super::{MOGUL, small_game};
use crate::error::{GameError, PersistenceError, StorageError};
use crate::game_state::{add_to_activity_log, create_initial_game_state, select_property};
use crate::model::{PropertyId, TransactionId};
use crate::persistence::{
    KeyValueStore, MemoryStore, STORAGE_KEY, deserialize_game_state, load_game_state,
    save_game_state, serialize_game_state,
};
use crate::property_transactions::{purchase_property, sell_property};

/// Store whose backend is always unavailable
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::NotAvailable("quota exceeded".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::NotAvailable("quota exceeded".to_string()))
    }
}

#[test]
fn test_round_trip_fresh_game() {
    let store = MemoryStore::new();
    let state = create_initial_game_state();

    save_game_state(&store, &state).unwrap();
    let loaded = load_game_state(&store).unwrap();

    assert_eq!(loaded, state);
}

#[test]
fn test_round_trip_after_play() {
    let store = MemoryStore::new();
    let state = small_game(300_000.0, 10.0);
    let state = select_property(&state, Some(PropertyId(1))).unwrap();
    let (state, _) = purchase_property(&state, MOGUL, PropertyId(1)).unwrap();
    let state = add_to_activity_log(&state, "bought the big one");

    save_game_state(&store, &state).unwrap();
    let loaded = load_game_state(&store).unwrap();

    assert_eq!(loaded, state);
    assert_eq!(loaded.players[0].transaction_history.len(), 1);
    assert_eq!(loaded.next_transaction_id, 2);
}

#[test]
fn test_save_overwrites_previous_slot() {
    let store = MemoryStore::new();
    let first = small_game(1.0, 2.0);
    let second = add_to_activity_log(&first, "later");

    save_game_state(&store, &first).unwrap();
    save_game_state(&store, &second).unwrap();

    assert_eq!(load_game_state(&store).unwrap(), second);
}

#[test]
fn test_load_missing_slot() {
    let store = MemoryStore::new();
    let err = load_game_state(&store).unwrap_err();

    assert!(matches!(err, GameError::Persistence(PersistenceError::Missing)));
    assert_eq!(err.to_string(), "No saved game state found");
}

#[test]
fn test_load_corrupt_json() {
    let store = MemoryStore::new();
    store.set(STORAGE_KEY, "{not json").unwrap();

    let err = load_game_state(&store).unwrap_err();
    assert!(matches!(err, GameError::Persistence(PersistenceError::Parse(_))));
    assert!(err.to_string().starts_with("Failed to parse game state"));
}

#[test]
fn test_load_rejects_invalid_state() {
    let mut state = small_game(1_000.0, 0.0);
    state.players[0].cash = -50.0;
    let serialized = serialize_game_state(&state).unwrap();

    let err = deserialize_game_state(&serialized).unwrap_err();
    assert!(matches!(err, GameError::ValidationFailure(_)));
}

#[test]
fn test_serialized_field_names() {
    let state = small_game(1_000.0, 0.0);
    let value: serde_json::Value =
        serde_json::from_str(&serialize_game_state(&state).unwrap()).unwrap();

    assert_eq!(value["current_turn"], 1);
    assert_eq!(value["phase"], "property_acquisition");
    assert_eq!(value["properties"][0]["type"], "vacant_lot");
    assert_eq!(value["properties"][0]["development_level"], 0);
    assert!(value["selected_property"].is_null());
}

#[test]
fn test_storage_failure_surfaces() {
    let state = small_game(1_000.0, 0.0);

    let err = save_game_state(&BrokenStore, &state).unwrap_err();
    assert!(matches!(
        err,
        GameError::Persistence(PersistenceError::Storage(StorageError::NotAvailable(_)))
    ));
    assert!(matches!(
        load_game_state(&BrokenStore),
        Err(GameError::Persistence(PersistenceError::Storage(_)))
    ));
}

#[test]
fn test_save_without_id_counter_keeps_ids_unique() {
    let state = small_game(300_000.0, 0.0);
    let (state, _) = purchase_property(&state, MOGUL, PropertyId(0)).unwrap();

    let mut value: serde_json::Value =
        serde_json::from_str(&serialize_game_state(&state).unwrap()).unwrap();
    value
        .as_object_mut()
        .unwrap()
        .remove("next_transaction_id");
    let loaded = deserialize_game_state(&value.to_string()).unwrap();
    assert_eq!(loaded.next_transaction_id, 2);

    let (loaded, _) = purchase_property(&loaded, MOGUL, PropertyId(2)).unwrap();
    let (loaded, _) = sell_property(&loaded, MOGUL, PropertyId(0)).unwrap();

    let ids: Vec<TransactionId> = loaded.players[0]
        .transaction_history
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(ids, vec![TransactionId(1), TransactionId(2), TransactionId(3)]);
}

#[test]
fn test_loaded_counter_never_moves_backwards() {
    let mut state = small_game(1_000.0, 0.0);
    state.next_transaction_id = 40;

    let loaded = deserialize_game_state(&serialize_game_state(&state).unwrap()).unwrap();
    assert_eq!(loaded.next_transaction_id, 40);
}
