use serde::{Deserialize, Serialize};

use super::ids::PropertyId;

#[cfg(feature = "ts")]
use ts_rs::TS;

/// A semantic UI action, as delivered by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameAction {
    /// Buy the selected property for the current player
    Buy,
    /// Sell the selected property back to the bank
    Sell,
    Develop,
    Pass,
    NextTurn,
    /// Select a grid cell, or clear the selection with `None`
    Select { property_id: Option<PropertyId> },
    /// Step the selection to a neighbouring cell, e.g. `dx: 1` for the arrow right key
    MoveSelection { dx: i8, dy: i8 },
    Resize { width: u32, height: u32 },
    Settings,
    Help,
    ZoomIn,
    ZoomOut,
    CenterView,
}
