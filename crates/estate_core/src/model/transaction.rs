//! Transaction records
//!
//! Every movement of cash produces a [`Transaction`]. Transactions are
//! immutable once created and are appended to the owning player's history.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::ids::{PlayerId, PropertyId, TransactionId};

#[cfg(feature = "ts")]
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Purchase,
    Sale,
    Income,
    Expense,
    Transfer,
}

impl TransactionKind {
    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Purchase => "purchase",
            TransactionKind::Sale => "sale",
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
            TransactionKind::Transfer => "transfer",
        }
    }

    /// Purchases and expenses draw cash down and need a funds check
    pub fn is_outgoing(self) -> bool {
        matches!(self, TransactionKind::Purchase | TransactionKind::Expense)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct Transaction {
    pub id: TransactionId,
    pub player_id: PlayerId,
    pub kind: TransactionKind,
    /// Amount as requested; transfers carry their sign (negative for the sender)
    pub amount: f64,
    pub description: String,
    pub timestamp: Timestamp,
    pub related_property_id: Option<PropertyId>,
}

/// Input to [`crate::financial::process_transaction`]
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRequest {
    pub kind: TransactionKind,
    pub amount: f64,
    pub description: String,
    pub related_property_id: Option<PropertyId>,
}

impl TransactionRequest {
    pub fn new(kind: TransactionKind, amount: f64, description: impl Into<String>) -> Self {
        Self {
            kind,
            amount,
            description: description.into(),
            related_property_id: None,
        }
    }

    pub fn with_property(mut self, property_id: PropertyId) -> Self {
        self.related_property_id = Some(property_id);
        self
    }
}
