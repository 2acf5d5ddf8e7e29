//! Native storage implementation using the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use estate_core::{KeyValueStore, StorageError};

/// Stores each key as `{key}.json` inside a data directory.
pub struct NativeStorage {
    root: PathBuf,
}

impl NativeStorage {
    /// Create a new native storage with the given root path.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create native storage with the default path (~/.estate/).
    pub fn with_default_path() -> Self {
        Self::new(Self::default_path())
    }

    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".estate")
    }

    /// Get the root path of the storage directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", sanitize_key(key)))
    }
}

/// Keep keys to a safe file name: anything outside `[A-Za-z0-9_-]` becomes `_`
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

impl KeyValueStore for NativeStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", path.display(), e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root).map_err(|e| {
            StorageError::Io(format!("Failed to create data directory: {}", e))
        })?;

        // Stage the write, then rename over the target
        let path = self.key_path(key);
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value)
            .map_err(|e| StorageError::Io(format!("Failed to write {}: {}", staging.display(), e)))?;
        fs::rename(&staging, &path)
            .map_err(|e| StorageError::Io(format!("Failed to replace {}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use estate_core::persistence::STORAGE_KEY;
    use estate_core::{create_initial_game_state, load_game_state, save_game_state};
    use tempfile::TempDir;

    #[test]
    fn test_missing_key_reads_none() {
        let temp_dir = TempDir::new().unwrap();
        let storage = NativeStorage::new(temp_dir.path().join(".estate"));

        assert_eq!(storage.get("anything").unwrap(), None);
        assert!(!storage.root().exists());
    }

    #[test]
    fn test_set_creates_directory_and_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let storage = NativeStorage::new(temp_dir.path().join(".estate"));

        storage.set(STORAGE_KEY, "first").unwrap();
        storage.set(STORAGE_KEY, "second").unwrap();

        assert_eq!(storage.get(STORAGE_KEY).unwrap().as_deref(), Some("second"));
        assert!(
            storage
                .root()
                .join("real_estate_empire_game_state.json")
                .exists()
        );
    }

    #[test]
    fn test_keys_are_sanitized() {
        let temp_dir = TempDir::new().unwrap();
        let storage = NativeStorage::new(temp_dir.path().to_path_buf());

        storage.set("../escape/attempt", "x").unwrap();

        assert!(temp_dir.path().join("___escape_attempt.json").exists());
        assert_eq!(storage.get("../escape/attempt").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn test_game_round_trip_on_disk() {
        let temp_dir = TempDir::new().unwrap();
        let storage = NativeStorage::new(temp_dir.path().join("saves"));
        let state = create_initial_game_state();

        save_game_state(&storage, &state).unwrap();
        let loaded = load_game_state(&storage).unwrap();

        assert_eq!(loaded, state);
    }

    #[test]
    fn test_default_path_is_estate_dir() {
        let path = NativeStorage::default_path();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(".estate"));

        let storage = NativeStorage::with_default_path();
        assert_eq!(storage.root(), path.as_path());
        match dirs::home_dir() {
            Some(home) => assert_eq!(path, home.join(".estate")),
            None => assert_eq!(path, PathBuf::from("./.estate")),
        }
    }
}
