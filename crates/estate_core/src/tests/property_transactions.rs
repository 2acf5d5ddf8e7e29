//! Tests for buying and selling property
//!
//! These tests verify:
//! - Purchases move cash and ownership together
//! - Sales pay back 80% of value, rounded down
//! - Rejected operations leave the state exactly as it was
//! - Ownership transfers keep both sides in sync

use super::{MOGUL, RIVAL, cash_of, small_game};
use crate::error::GameError;
use crate::financial::audit_financial_state;
use crate::model::{PlayerId, PropertyId, TransactionKind};
use crate::property_transactions::{
    purchase_property, sale_price, sell_property, transfer_property_ownership,
    validate_development,
};

#[test]
fn test_purchase_updates_cash_and_ownership() {
    let state = small_game(300_000.0, 0.0);

    let (next, purchase) = purchase_property(&state, MOGUL, PropertyId(0)).unwrap();

    assert_eq!(cash_of(&next, MOGUL), 200_000.0);
    assert_eq!(next.property(PropertyId(0)).unwrap().owner, Some(MOGUL));

    let player = next.player(MOGUL).unwrap();
    assert_eq!(player.properties, vec![PropertyId(0)]);
    assert_eq!(player.net_worth, 300_000.0);

    assert_eq!(purchase.transaction.kind, TransactionKind::Purchase);
    assert_eq!(purchase.transaction.amount, 100_000.0);
    assert_eq!(purchase.transaction.description, "Purchase of Lot 0");
    assert_eq!(purchase.transaction.related_property_id, Some(PropertyId(0)));
    assert_eq!(purchase.property.owner, Some(MOGUL));
    assert_eq!(purchase.player.cash, 200_000.0);

    assert!(audit_financial_state(&next).is_ok());
    // Input untouched
    assert_eq!(state.property(PropertyId(0)).unwrap().owner, None);
}

#[test]
fn test_purchase_with_exact_cash() {
    let state = small_game(250_000.0, 0.0);

    let (next, _) = purchase_property(&state, MOGUL, PropertyId(1)).unwrap();

    assert_eq!(cash_of(&next, MOGUL), 0.0);
    assert_eq!(next.player(MOGUL).unwrap().net_worth, 250_000.0);
}

#[test]
fn test_purchase_one_dollar_short() {
    let state = small_game(249_999.0, 0.0);

    match purchase_property(&state, MOGUL, PropertyId(1)) {
        Err(GameError::InsufficientFunds {
            required,
            available,
        }) => {
            assert_eq!(required, 250_000.0);
            assert_eq!(available, 249_999.0);
        }
        other => panic!("expected InsufficientFunds, got {other:?}"),
    }
    assert_eq!(cash_of(&state, MOGUL), 249_999.0);
    assert_eq!(state.property(PropertyId(1)).unwrap().owner, None);
}

#[test]
fn test_purchase_already_owned_conflict() {
    let state = small_game(500_000.0, 500_000.0);
    let (state, _) = purchase_property(&state, RIVAL, PropertyId(2)).unwrap();

    let err = purchase_property(&state, MOGUL, PropertyId(2)).unwrap_err();
    assert!(matches!(err, GameError::Conflict(_)));
    assert_eq!(err.to_string(), "Property Lot 2 is already owned by player2");

    // Buying your own property again is also a conflict
    assert!(matches!(
        purchase_property(&state, RIVAL, PropertyId(2)),
        Err(GameError::Conflict(_))
    ));
}

#[test]
fn test_purchase_unknown_entities() {
    let state = small_game(500_000.0, 0.0);

    assert!(matches!(
        purchase_property(&state, PlayerId(5), PropertyId(0)),
        Err(GameError::NotFound { .. })
    ));
    let err = purchase_property(&state, MOGUL, PropertyId(300)).unwrap_err();
    assert_eq!(err.to_string(), "Property with id prop300 not found");
}

#[test]
fn test_sale_price_rounds_down() {
    let mut state = small_game(0.0, 0.0);
    state.properties[0].value = 123_457.0;
    assert_eq!(sale_price(&state.properties[0]), 98_765.0);
    assert_eq!(sale_price(&state.properties[1]), 200_000.0);
}

#[test]
fn test_purchase_then_sell_loses_twenty_percent() {
    let state = small_game(300_000.0, 0.0);
    let (state, _) = purchase_property(&state, MOGUL, PropertyId(1)).unwrap();
    let (next, sale) = sell_property(&state, MOGUL, PropertyId(1)).unwrap();

    assert_eq!(cash_of(&next, MOGUL), 250_000.0);
    assert_eq!(next.property(PropertyId(1)).unwrap().owner, None);

    let player = next.player(MOGUL).unwrap();
    assert!(player.properties.is_empty());
    assert_eq!(player.net_worth, 250_000.0);
    assert_eq!(player.transaction_history.len(), 2);

    assert_eq!(sale.transaction.kind, TransactionKind::Sale);
    assert_eq!(sale.transaction.amount, 200_000.0);
    assert_eq!(sale.transaction.description, "Sale of Lot 1");
    assert_eq!(sale.from_player.id, MOGUL);
    assert!(sale.to_player.is_none());
    assert!(audit_financial_state(&next).is_ok());
}

#[test]
fn test_sell_unowned_is_forbidden() {
    let state = small_game(300_000.0, 300_000.0);
    let (state, _) = purchase_property(&state, RIVAL, PropertyId(0)).unwrap();

    let err = sell_property(&state, MOGUL, PropertyId(0)).unwrap_err();
    assert!(matches!(err, GameError::Forbidden(_)));
    assert_eq!(err.to_string(), "Player Mogul does not own property Lot 0");

    // Bank-held property cannot be sold either
    assert!(matches!(
        sell_property(&state, MOGUL, PropertyId(1)),
        Err(GameError::Forbidden(_))
    ));

    assert_eq!(cash_of(&state, MOGUL), 300_000.0);
    assert_eq!(cash_of(&state, RIVAL), 200_000.0);
    assert_eq!(state.property(PropertyId(0)).unwrap().owner, Some(RIVAL));
}

#[test]
fn test_validate_development_requires_ownership() {
    let state = small_game(300_000.0, 0.0);
    assert!(matches!(
        validate_development(&state, MOGUL, PropertyId(0)),
        Err(GameError::Forbidden(_))
    ));

    let (state, _) = purchase_property(&state, MOGUL, PropertyId(0)).unwrap();
    let property = validate_development(&state, MOGUL, PropertyId(0)).unwrap();
    assert_eq!(property.name, "Lot 0");
}

#[test]
fn test_transfer_ownership_between_players() {
    let state = small_game(300_000.0, 0.0);
    let (state, _) = purchase_property(&state, MOGUL, PropertyId(0)).unwrap();

    let next = transfer_property_ownership(&state, PropertyId(0), Some(RIVAL)).unwrap();

    assert_eq!(next.property(PropertyId(0)).unwrap().owner, Some(RIVAL));
    assert!(next.player(MOGUL).unwrap().properties.is_empty());
    assert_eq!(next.player(RIVAL).unwrap().properties, vec![PropertyId(0)]);
    assert_eq!(next.player(RIVAL).unwrap().net_worth, 100_000.0);
    // No cash changes hands
    assert_eq!(cash_of(&next, MOGUL), 200_000.0);
    assert_eq!(cash_of(&next, RIVAL), 0.0);
    assert!(audit_financial_state(&next).is_ok());

    let released = transfer_property_ownership(&next, PropertyId(0), None).unwrap();
    assert_eq!(released.property(PropertyId(0)).unwrap().owner, None);
    assert!(released.player(RIVAL).unwrap().properties.is_empty());

    assert!(matches!(
        transfer_property_ownership(&state, PropertyId(0), Some(PlayerId(8))),
        Err(GameError::NotFound { .. })
    ));
}
