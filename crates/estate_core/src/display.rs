//! Derived display text
//!
//! Plain string builders the presentation layer renders verbatim. Nothing
//! here touches the game state beyond reading it.

use crate::model::{GamePhase, GameState, MarketConditions, MarketTrend, Property};

/// Format a dollar amount with thousands separators and no currency sign.
///
/// Whole amounts print without decimals (`750,000`); fractional amounts keep
/// two (`1,234.50`).
pub fn format_currency(value: f64) -> String {
    let cents_total = (value.abs() * 100.0).round() as u64;
    let dollars = cents_total / 100;
    let cents = cents_total % 100;

    // Add thousands separators
    let dollars_str = dollars.to_string();
    let mut result = String::new();
    for (i, c) in dollars_str.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    let mut formatted: String = result.chars().rev().collect();

    if cents != 0 {
        formatted.push_str(&format!(".{cents:02}"));
    }
    if value < 0.0 && cents_total != 0 {
        format!("-{formatted}")
    } else {
        formatted
    }
}

pub fn phase_label(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::MarketAnalysis => "market analysis",
        GamePhase::PropertyAcquisition => "property acquisition",
        GamePhase::Development => "development",
        GamePhase::IncomeCollection => "income collection",
    }
}

pub fn market_status(market: &MarketConditions) -> &'static str {
    match market.trend {
        MarketTrend::Rising => "Rising",
        MarketTrend::Falling => "Falling",
        MarketTrend::Stable => "Stable",
    }
}

/// Footer hint describing what the player can do next
pub fn action_status_text(state: &GameState) -> String {
    match &state.selected_property {
        Some(property) => format!("Property selected: {}", property.name),
        None => "Choose your next action".to_string(),
    }
}

pub fn property_tooltip(property: &Property) -> String {
    let mut lines = vec![
        format!(
            "Property ({},{})",
            property.position.x, property.position.y
        ),
        format!("Type: {}", property.property_type.label()),
        format!("Value: ${}", format_currency(property.value)),
    ];
    lines.push(match property.owner {
        Some(_) => "Owner: Player".to_string(),
        None => "Available for purchase".to_string(),
    });
    if property.monthly_income > 0.0 {
        lines.push(format!(
            "Income: ${}/month",
            format_currency(property.monthly_income)
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DevelopmentLevel, GridPosition, PlayerId, PropertyId, PropertyType};

    fn lot() -> Property {
        Property {
            id: PropertyId(3),
            position: GridPosition { x: 3, y: 0 },
            property_type: PropertyType::VacantLot,
            value: 25_000.0,
            owner: None,
            development_level: DevelopmentLevel::VACANT,
            monthly_income: 0.0,
            development_cost: 15_000.0,
            name: "Downtown Lot A".to_string(),
        }
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "0");
        assert_eq!(format_currency(999.0), "999");
        assert_eq!(format_currency(750_000.0), "750,000");
        assert_eq!(format_currency(1_234_567.0), "1,234,567");
        assert_eq!(format_currency(1_234.5), "1,234.50");
        assert_eq!(format_currency(-20_000.0), "-20,000");
    }

    #[test]
    fn test_phase_label_uses_spaces() {
        assert_eq!(
            phase_label(GamePhase::PropertyAcquisition),
            "property acquisition"
        );
        assert_eq!(phase_label(GamePhase::IncomeCollection), "income collection");
    }

    #[test]
    fn test_tooltip_for_available_lot() {
        let text = property_tooltip(&lot());
        assert_eq!(
            text,
            "Property (3,0)\nType: vacant lot\nValue: $25,000\nAvailable for purchase"
        );
    }

    #[test]
    fn test_tooltip_for_owned_income_property() {
        let property = Property {
            owner: Some(PlayerId(1)),
            monthly_income: 1_200.0,
            property_type: PropertyType::Residential,
            ..lot()
        };
        let text = property_tooltip(&property);
        assert!(text.contains("Owner: Player"));
        assert!(text.ends_with("Income: $1,200/month"));
    }
}
