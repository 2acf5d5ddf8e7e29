use serde::{Deserialize, Serialize};

use super::ids::{PlayerId, PropertyId};
use super::transaction::Transaction;

#[cfg(feature = "ts")]
use ts_rs::TS;

/// Play style tag for computer players. Stored only; no game logic reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
#[serde(rename_all = "snake_case")]
pub enum AiStrategy {
    Aggressive,
    Conservative,
    #[default]
    Balanced,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub cash: f64,
    /// Cash plus owned property values. Recomputed after every change and
    /// checked by the audit; never trusted on its own.
    pub net_worth: f64,
    pub properties: Vec<PropertyId>,
    #[serde(default)]
    pub transaction_history: Vec<Transaction>,
    pub is_ai: bool,
    #[serde(default)]
    pub strategy: Option<AiStrategy>,
}

impl Player {
    pub fn owns(&self, property_id: PropertyId) -> bool {
        self.properties.contains(&property_id)
    }
}
