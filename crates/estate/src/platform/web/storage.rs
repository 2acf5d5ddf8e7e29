//! Web storage implementation using browser LocalStorage.

use estate_core::{KeyValueStore, StorageError};
use gloo_storage::{LocalStorage, Storage as GlooStorage};

/// Raw string access to the browser's LocalStorage.
///
/// Values are stored exactly as given; the game core already produces JSON.
#[derive(Debug, Default)]
pub struct WebStorage;

impl WebStorage {
    pub fn new() -> Self {
        Self
    }
}

impl KeyValueStore for WebStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| StorageError::NotAvailable(format!("Failed to read {key}: {e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StorageError::NotAvailable(format!("Failed to write {key}: {e:?}")))
    }
}
