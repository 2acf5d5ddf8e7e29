use serde::{Deserialize, Serialize};

#[cfg(feature = "ts")]
use ts_rs::TS;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
#[serde(rename_all = "snake_case")]
pub enum MarketTrend {
    Rising,
    Falling,
    #[default]
    Stable,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
#[serde(rename_all = "snake_case")]
pub enum Volatility {
    Low,
    #[default]
    Medium,
    High,
}

/// Economic backdrop shown to the player. Read-only for the transaction core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct MarketConditions {
    pub trend: MarketTrend,
    pub volatility: Volatility,
    pub demand_level: f64,
    /// Annual rate in percent
    pub interest_rate: f64,
}

impl Default for MarketConditions {
    fn default() -> Self {
        Self {
            trend: MarketTrend::Stable,
            volatility: Volatility::Medium,
            demand_level: 50.0,
            interest_rate: 3.5,
        }
    }
}
