use std::fmt;

use crate::display::format_currency;
use crate::model::{PlayerId, PropertyId};

/// Kind of entity named in a [`GameError::NotFound`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Player,
    Property,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Player => write!(f, "Player"),
            Entity::Property => write!(f, "Property"),
        }
    }
}

/// Errors returned by the game core
///
/// None of these cross the UI boundary: handlers turn them into activity log
/// lines instead.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: Entity, id: String },

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Forbidden(String),

    #[error(
        "Insufficient funds. Required: ${}, Available: ${}",
        money(.required),
        money(.available)
    )]
    InsufficientFunds { required: f64, available: f64 },

    #[error("{0}")]
    InvalidArgument(String),

    /// Every inconsistency found, not just the first
    #[error("Validation failed:\n{}", lines(.0))]
    ValidationFailure(Vec<String>),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl GameError {
    pub fn player_not_found(id: PlayerId) -> Self {
        GameError::NotFound {
            entity: Entity::Player,
            id: id.to_string(),
        }
    }

    pub fn property_not_found(id: PropertyId) -> Self {
        GameError::NotFound {
            entity: Entity::Property,
            id: id.to_string(),
        }
    }

    /// Findings carried by a validation failure, empty for other variants
    pub fn findings(&self) -> &[String] {
        match self {
            GameError::ValidationFailure(findings) => findings,
            _ => &[],
        }
    }
}

/// Failures while moving the saved game in or out of storage
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("No saved game state found")]
    Missing,

    #[error("Failed to access storage: {0}")]
    Storage(#[from] StorageError),

    #[error("Failed to serialize game state: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to parse game state: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Errors raised by a [`crate::persistence::KeyValueStore`] backend
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error (file not found, permission denied, etc.)
    #[error("IO error: {0}")]
    Io(String),
    /// Storage not available (e.g. LocalStorage disabled or full)
    #[error("Storage not available: {0}")]
    NotAvailable(String),
}

fn money(amount: &f64) -> String {
    format_currency(*amount)
}

fn lines(findings: &[String]) -> String {
    findings.join("\n")
}

pub type Result<T> = std::result::Result<T, GameError>;
