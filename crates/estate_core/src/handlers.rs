//! Event handlers
//!
//! Translate semantic UI actions into state transitions. Handlers never fail:
//! any error from the layers below becomes an activity log line and the rest
//! of the state is returned as it was.

use crate::display::format_currency;
use crate::game_state::{add_to_activity_log, advance_turn, select_property};
use crate::model::{GameAction, GameState, PropertyId};
use crate::property_transactions::{
    can_purchase, can_sell, purchase_property, sell_property, validate_development,
};

/// Apply one UI action and return the resulting state
pub fn handle_action(state: &GameState, action: &GameAction) -> GameState {
    tracing::trace!(?action, turn = state.current_turn, "handling action");
    match *action {
        GameAction::Buy => handle_buy(state),
        GameAction::Sell => handle_sell(state),
        GameAction::Develop => handle_develop(state),
        GameAction::Pass => handle_pass(state),
        GameAction::NextTurn => handle_next_turn(state),
        GameAction::Select { property_id } => handle_select(state, property_id),
        GameAction::MoveSelection { dx, dy } => handle_move_selection(state, dx, dy),
        GameAction::Resize { width, height } => handle_window_resize(state, width, height),
        GameAction::Settings => add_to_activity_log(state, "Settings panel opened"),
        GameAction::Help => add_to_activity_log(state, "Help documentation opened"),
        GameAction::ZoomIn => add_to_activity_log(state, "Zoomed in on property grid"),
        GameAction::ZoomOut => add_to_activity_log(state, "Zoomed out on property grid"),
        GameAction::CenterView => add_to_activity_log(state, "Centered view on property grid"),
    }
}

pub fn handle_buy(state: &GameState) -> GameState {
    let Some(selected) = &state.selected_property else {
        return add_to_activity_log(state, "No property selected");
    };

    match purchase_property(state, state.current_player, selected.id) {
        Ok((mut next, purchase)) => {
            next.activity_log.push(format!(
                "{} purchased {} for ${}",
                purchase.player.name,
                purchase.property.name,
                format_currency(purchase.property.value)
            ));
            next.selected_property = Some(purchase.property);
            next
        }
        Err(e) => add_to_activity_log(state, format!("Purchase failed: {e}")),
    }
}

pub fn handle_sell(state: &GameState) -> GameState {
    let Some(selected) = &state.selected_property else {
        return add_to_activity_log(state, "No property selected");
    };

    match sell_property(state, state.current_player, selected.id) {
        Ok((mut next, sale)) => {
            next.activity_log.push(format!(
                "{} sold {} for ${}",
                sale.from_player.name,
                sale.property.name,
                format_currency(sale.transaction.amount)
            ));
            next.selected_property = Some(sale.property);
            next
        }
        Err(e) => add_to_activity_log(state, format!("Sale failed: {e}")),
    }
}

/// Development only checks ownership and records the intent
pub fn handle_develop(state: &GameState) -> GameState {
    let Some(selected) = &state.selected_property else {
        return state.clone();
    };

    match validate_development(state, state.current_player, selected.id) {
        Ok(property) => add_to_activity_log(state, format!("Developing {}", property.name)),
        Err(e) => add_to_activity_log(state, format!("Development failed: {e}")),
    }
}

pub fn handle_pass(state: &GameState) -> GameState {
    let passed = add_to_activity_log(state, "Turn passed - no action taken");
    let advanced = advance_turn(&passed);
    let turn = advanced.current_turn;
    add_to_activity_log(&advanced, format!("Turn {turn} started"))
}

pub fn handle_next_turn(state: &GameState) -> GameState {
    let advanced = advance_turn(state);
    let turn = advanced.current_turn;
    add_to_activity_log(&advanced, format!("Turn {turn} started"))
}

pub fn handle_select(state: &GameState, property_id: Option<PropertyId>) -> GameState {
    select_property(state, property_id)
        .unwrap_or_else(|e| add_to_activity_log(state, format!("Selection failed: {e}")))
}

/// Move the selection by one step, clamped to the grid edges.
///
/// With nothing selected the top-left cell is selected instead.
pub fn handle_move_selection(state: &GameState, dx: i8, dy: i8) -> GameState {
    let Some((max_x, max_y)) = grid_extent(state) else {
        return state.clone();
    };
    let (x, y) = match &state.selected_property {
        Some(selected) => (
            step(selected.position.x, dx, max_x),
            step(selected.position.y, dy, max_y),
        ),
        None => (0, 0),
    };

    match state.property_at(x, y) {
        Some(property) => handle_select(state, Some(property.id)),
        None => state.clone(),
    }
}

/// Largest x and y on the grid
fn grid_extent(state: &GameState) -> Option<(u16, u16)> {
    let max_x = state.properties.iter().map(|p| p.position.x).max()?;
    let max_y = state.properties.iter().map(|p| p.position.y).max()?;
    Some((max_x, max_y))
}

fn step(from: u16, delta: i8, max: u16) -> u16 {
    let moved = (i32::from(from) + i32::from(delta)).clamp(0, i32::from(max));
    u16::try_from(moved).unwrap_or(from)
}

/// Actions the current player can take right now.
///
/// Buy, develop and sell depend on the selected property's live record;
/// pass is always available.
pub fn available_actions(state: &GameState) -> Vec<GameAction> {
    let mut actions = Vec::new();
    if let Some(selected) = &state.selected_property {
        let player = state.current_player;
        if can_purchase(state, player, selected.id) {
            actions.push(GameAction::Buy);
        }
        if validate_development(state, player, selected.id).is_ok() {
            actions.push(GameAction::Develop);
        }
        if can_sell(state, player, selected.id) {
            actions.push(GameAction::Sell);
        }
    }
    actions.push(GameAction::Pass);
    actions
}

pub fn handle_window_resize(state: &GameState, width: u32, height: u32) -> GameState {
    add_to_activity_log(state, format!("Window resized to {width}x{height}"))
}
