//! Property purchase and sale
//!
//! Each operation pairs an ownership change with the matching cash movement
//! from the financial engine, and only the fully updated state is ever
//! returned: there is no observable state where cash has moved but ownership
//! has not, or the reverse.

use crate::error::{GameError, Result};
use crate::financial::{
    calculate_net_worth, process_transaction, validate_player, validate_property,
    validate_sufficient_funds,
};
use crate::model::{
    GameState, Player, PlayerId, Property, PropertyId, PropertyPurchase, PropertyTransfer,
    TransactionKind, TransactionRequest,
};

/// Fraction of a property's value the bank pays back on a sale
pub const SALE_RATIO: f64 = 0.8;

/// Price the bank pays for a property: a fixed 20% loss, rounded down
pub fn sale_price(property: &Property) -> f64 {
    (property.value * SALE_RATIO).floor()
}

fn player_mut(players: &mut [Player], player_id: PlayerId) -> Result<&mut Player> {
    players
        .iter_mut()
        .find(|p| p.id == player_id)
        .ok_or_else(|| GameError::player_not_found(player_id))
}

fn property_mut(properties: &mut [Property], property_id: PropertyId) -> Result<&mut Property> {
    properties
        .iter_mut()
        .find(|p| p.id == property_id)
        .ok_or_else(|| GameError::property_not_found(property_id))
}

/// Re-read the final player and property records out of a finished state
fn final_records(
    state: &GameState,
    player_id: PlayerId,
    property_id: PropertyId,
) -> Result<(Player, Property)> {
    let player = validate_player(&state.players, player_id)?.clone();
    let property = validate_property(&state.properties, property_id)?.clone();
    Ok((player, property))
}

/// Buy an unowned property from the bank at its full value.
pub fn purchase_property(
    state: &GameState,
    player_id: PlayerId,
    property_id: PropertyId,
) -> Result<(GameState, PropertyPurchase)> {
    let player = validate_player(&state.players, player_id)?;
    let property = validate_property(&state.properties, property_id)?;

    if let Some(owner) = property.owner {
        return Err(GameError::Conflict(format!(
            "Property {} is already owned by {}",
            property.name, owner
        )));
    }
    validate_sufficient_funds(player, property.value)?;

    let request = TransactionRequest::new(
        TransactionKind::Purchase,
        property.value,
        format!("Purchase of {}", property.name),
    )
    .with_property(property_id);
    let (mut next, transaction) = process_transaction(state, player_id, request)?;

    property_mut(&mut next.properties, property_id)?.owner = Some(player_id);

    let buyer = player_mut(&mut next.players, player_id)?;
    if !buyer.owns(property_id) {
        buyer.properties.push(property_id);
    }
    buyer.net_worth = calculate_net_worth(buyer, &next.properties);

    let (player, property) = final_records(&next, player_id, property_id)?;
    tracing::info!(
        player = %player_id,
        property = %property_id,
        price = property.value,
        "property purchased"
    );

    Ok((
        next,
        PropertyPurchase {
            transaction,
            property,
            player,
        },
    ))
}

/// Sell an owned property back to the bank at [`sale_price`].
pub fn sell_property(
    state: &GameState,
    player_id: PlayerId,
    property_id: PropertyId,
) -> Result<(GameState, PropertyTransfer)> {
    let player = validate_player(&state.players, player_id)?;
    let property = validate_property(&state.properties, property_id)?;

    if !property.is_owned_by(player_id) {
        return Err(GameError::Forbidden(format!(
            "Player {} does not own property {}",
            player.name, property.name
        )));
    }

    let price = sale_price(property);
    let request = TransactionRequest::new(
        TransactionKind::Sale,
        price,
        format!("Sale of {}", property.name),
    )
    .with_property(property_id);
    let (mut next, transaction) = process_transaction(state, player_id, request)?;

    property_mut(&mut next.properties, property_id)?.owner = None;

    let seller = player_mut(&mut next.players, player_id)?;
    seller.properties.retain(|id| *id != property_id);
    seller.net_worth = calculate_net_worth(seller, &next.properties);

    let (from_player, property) = final_records(&next, player_id, property_id)?;
    tracing::info!(
        player = %player_id,
        property = %property_id,
        price,
        "property sold"
    );

    Ok((
        next,
        PropertyTransfer {
            transaction,
            property,
            from_player,
            to_player: None,
        },
    ))
}

/// True when [`purchase_property`] would go through: the property is
/// unowned and the player can cover its full value.
pub fn can_purchase(state: &GameState, player_id: PlayerId, property_id: PropertyId) -> bool {
    match (state.player(player_id), state.property(property_id)) {
        (Some(player), Some(property)) => property.owner.is_none() && player.cash >= property.value,
        _ => false,
    }
}

pub fn can_sell(state: &GameState, player_id: PlayerId, property_id: PropertyId) -> bool {
    state.player(player_id).is_some()
        && state
            .property(property_id)
            .is_some_and(|p| p.is_owned_by(player_id))
}

/// Check that a player may develop a property: both exist and the player owns it.
///
/// Level advancement itself is not modelled; callers only record the intent.
pub fn validate_development<'a>(
    state: &'a GameState,
    player_id: PlayerId,
    property_id: PropertyId,
) -> Result<&'a Property> {
    let player = validate_player(&state.players, player_id)?;
    let property = validate_property(&state.properties, property_id)?;
    if !property.is_owned_by(player_id) {
        return Err(GameError::Forbidden(format!(
            "Player {} does not own property {}",
            player.name, property.name
        )));
    }
    Ok(property)
}

/// Reassign a property without any cash changing hands.
///
/// The previous owner (if any) drops the property from their list, the new
/// owner (if any) gains it, and both net worths are recomputed.
pub fn transfer_property_ownership(
    state: &GameState,
    property_id: PropertyId,
    new_owner: Option<PlayerId>,
) -> Result<GameState> {
    let property = validate_property(&state.properties, property_id)?;
    if let Some(owner_id) = new_owner {
        validate_player(&state.players, owner_id)?;
    }
    let old_owner = property.owner;

    let mut next = state.clone();
    property_mut(&mut next.properties, property_id)?.owner = new_owner;

    if let Some(old_id) = old_owner {
        // A dangling owner reference has no list to clean up
        if let Ok(previous) = player_mut(&mut next.players, old_id) {
            previous.properties.retain(|id| *id != property_id);
            previous.net_worth = calculate_net_worth(previous, &next.properties);
        }
    }
    if let Some(new_id) = new_owner {
        let owner = player_mut(&mut next.players, new_id)?;
        if !owner.owns(property_id) {
            owner.properties.push(property_id);
        }
        owner.net_worth = calculate_net_worth(owner, &next.properties);
    }

    Ok(next)
}
