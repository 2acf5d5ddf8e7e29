mod action;
mod ids;
mod market;
mod player;
mod property;
mod records;
mod state;
mod transaction;

pub use action::GameAction;
pub use ids::{PlayerId, PropertyId, TransactionId};
pub use market::{MarketConditions, MarketTrend, Volatility};
pub use player::{AiStrategy, Player};
pub use property::{
    DevelopmentLevel, GRID_HEIGHT, GRID_WIDTH, GridPosition, Property, PropertyType,
};
pub use records::{FinancialSummary, PropertyPurchase, PropertyTransfer};
pub use state::{GamePhase, GameState};
pub use transaction::{Transaction, TransactionKind, TransactionRequest};
