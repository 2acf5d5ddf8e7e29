//! Result bundles returned by the transaction layers

use serde::{Deserialize, Serialize};

use super::player::Player;
use super::property::Property;
use super::transaction::Transaction;

/// Outcome of a successful property purchase, reflecting the post-purchase state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyPurchase {
    pub transaction: Transaction,
    pub property: Property,
    pub player: Player,
}

/// Outcome of a property changing hands for cash
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyTransfer {
    pub transaction: Transaction,
    pub property: Property,
    pub from_player: Player,
    /// `None` when the property goes back to the bank
    pub to_player: Option<Player>,
}

/// Aggregate money supply across the whole game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub players: Vec<Player>,
    pub total_cash: f64,
    pub total_property_value: f64,
    /// Total cash plus total property value
    pub market_cap: f64,
}
