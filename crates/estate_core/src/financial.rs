//! Financial engine
//!
//! Validation, cash movement and auditing. [`process_transaction`] is the
//! single choke point for every change to a player's cash; the property
//! layer and transfers are built on top of it.

use jiff::Timestamp;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::error::{GameError, PersistenceError, Result};
use crate::model::{
    FinancialSummary, GameState, Player, PlayerId, Property, PropertyId, Transaction,
    TransactionKind, TransactionRequest,
};

/// Largest tolerated gap between stored and recomputed net worth
pub const NET_WORTH_TOLERANCE: f64 = 0.01;

// ============================================================================
// Validation
// ============================================================================

pub fn validate_sufficient_funds(player: &Player, amount: f64) -> Result<()> {
    if amount < 0.0 {
        return Err(GameError::InvalidArgument(
            "Transaction amount cannot be negative".to_string(),
        ));
    }
    if player.cash < amount {
        return Err(GameError::InsufficientFunds {
            required: amount,
            available: player.cash,
        });
    }
    Ok(())
}

pub fn validate_player(players: &[Player], player_id: PlayerId) -> Result<&Player> {
    players
        .iter()
        .find(|p| p.id == player_id)
        .ok_or_else(|| GameError::player_not_found(player_id))
}

pub fn validate_property(properties: &[Property], property_id: PropertyId) -> Result<&Property> {
    properties
        .iter()
        .find(|p| p.id == property_id)
        .ok_or_else(|| GameError::property_not_found(property_id))
}

// ============================================================================
// Calculations
// ============================================================================

/// Cash plus the value of every property in the player's list.
///
/// A listed property that no longer exists counts as zero; it is reported
/// with a warning rather than failing, and the audit flags it separately.
pub fn calculate_net_worth(player: &Player, properties: &[Property]) -> f64 {
    let holdings: f64 = player
        .properties
        .iter()
        .map(|id| match properties.iter().find(|p| p.id == *id) {
            Some(property) => property.value,
            None => {
                tracing::warn!(
                    player = %player.id,
                    property = %id,
                    "net worth references a property that does not exist"
                );
                0.0
            }
        })
        .sum();

    player.cash + holdings
}

pub fn calculate_total_cash(players: &[Player]) -> f64 {
    players.iter().map(|p| p.cash).sum()
}

pub fn calculate_total_property_value(properties: &[Property]) -> f64 {
    properties.iter().map(|p| p.value).sum()
}

pub fn calculate_financial_summary(state: &GameState) -> FinancialSummary {
    let total_cash = calculate_total_cash(&state.players);
    let total_property_value = calculate_total_property_value(&state.properties);
    FinancialSummary {
        players: state.players.clone(),
        total_cash,
        total_property_value,
        market_cap: total_cash + total_property_value,
    }
}

// ============================================================================
// Transactions
// ============================================================================

fn cash_change(kind: TransactionKind, amount: f64) -> f64 {
    match kind {
        TransactionKind::Purchase | TransactionKind::Expense => -amount,
        TransactionKind::Sale | TransactionKind::Income => amount,
        // Transfers carry their own sign
        TransactionKind::Transfer => amount,
    }
}

/// Apply one cash movement to a player and record it in their history.
///
/// Returns the updated state together with the new transaction record. The
/// input state is left untouched on every path.
pub fn process_transaction(
    state: &GameState,
    player_id: PlayerId,
    request: TransactionRequest,
) -> Result<(GameState, Transaction)> {
    let player = validate_player(&state.players, player_id)?;

    if !request.amount.is_finite() {
        return Err(GameError::InvalidArgument(format!(
            "Transaction amount must be a finite number, got {}",
            request.amount
        )));
    }
    if request.kind != TransactionKind::Transfer && request.amount < 0.0 {
        return Err(GameError::InvalidArgument(format!(
            "{} amount cannot be negative",
            request.kind.label()
        )));
    }
    if request.kind.is_outgoing() && request.amount > 0.0 {
        validate_sufficient_funds(player, request.amount)?;
    }

    let delta = cash_change(request.kind, request.amount);
    let new_cash = player.cash + delta;
    if new_cash < 0.0 {
        return Err(GameError::InsufficientFunds {
            required: -delta,
            available: player.cash,
        });
    }

    let mut next = state.clone();
    let transaction = Transaction {
        id: next.mint_transaction_id(),
        player_id,
        kind: request.kind,
        amount: request.amount,
        description: request.description,
        timestamp: Timestamp::now(),
        related_property_id: request.related_property_id,
    };

    let player = next
        .players
        .iter_mut()
        .find(|p| p.id == player_id)
        .ok_or_else(|| GameError::player_not_found(player_id))?;
    player.cash = new_cash;
    player.transaction_history.push(transaction.clone());
    player.net_worth = calculate_net_worth(player, &next.properties);

    tracing::debug!(
        player = %player_id,
        transaction = %transaction.id,
        kind = transaction.kind.label(),
        amount = transaction.amount,
        cash = new_cash,
        "transaction committed"
    );

    Ok((next, transaction))
}

/// Parameters for a player-to-player cash transfer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferRequest {
    pub from: PlayerId,
    pub to: PlayerId,
    pub amount: f64,
}

/// Move cash between two players as an outgoing and an incoming transfer leg.
///
/// Both legs succeed or neither is visible: the state after the first leg is
/// only a local value and is dropped if the second leg fails.
pub fn transfer_funds(
    state: &GameState,
    request: TransferRequest,
) -> Result<(GameState, [Transaction; 2])> {
    let TransferRequest { from, to, amount } = request;

    if amount.is_nan() || amount <= 0.0 {
        return Err(GameError::InvalidArgument(
            "Transfer amount must be positive".to_string(),
        ));
    }
    if from == to {
        return Err(GameError::InvalidArgument(
            "Cannot transfer funds to the same player".to_string(),
        ));
    }

    let sender = validate_player(&state.players, from)?;
    let recipient = validate_player(&state.players, to)?;
    validate_sufficient_funds(sender, amount)?;

    let outgoing = TransactionRequest::new(
        TransactionKind::Transfer,
        -amount,
        format!("Transfer to {}", recipient.name),
    );
    let incoming = TransactionRequest::new(
        TransactionKind::Transfer,
        amount,
        format!("Transfer from {}", sender.name),
    );

    let (after_outgoing, sent) = process_transaction(state, from, outgoing)?;
    let (after_incoming, received) = process_transaction(&after_outgoing, to, incoming)?;

    Ok((after_incoming, [sent, received]))
}

// ============================================================================
// Audit
// ============================================================================

fn audit_player(
    player: &Player,
    properties: &[Property],
    property_index: &FxHashMap<PropertyId, &Property>,
) -> Vec<String> {
    let mut findings = Vec::new();

    if player.cash < 0.0 {
        findings.push(format!(
            "Player {} has negative cash: ${}",
            player.name, player.cash
        ));
    }

    let calculated = calculate_net_worth(player, properties);
    if (player.net_worth - calculated).abs() > NET_WORTH_TOLERANCE {
        findings.push(format!(
            "Player {} net worth mismatch: stored={}, calculated={}",
            player.name, player.net_worth, calculated
        ));
    }

    for property_id in &player.properties {
        match property_index.get(property_id) {
            None => findings.push(format!(
                "Player {} owns non-existent property: {}",
                player.name, property_id
            )),
            Some(property) if property.owner != Some(player.id) => {
                let owner = property
                    .owner
                    .map_or_else(|| "none".to_string(), |id| id.to_string());
                findings.push(format!(
                    "Property {property_id} ownership mismatch: player claims ownership but property owner is {owner}"
                ));
            }
            Some(_) => {}
        }
    }

    findings
}

fn audit_property_ownership(
    properties: &[Property],
    player_index: &FxHashMap<PlayerId, &Player>,
) -> Vec<String> {
    let mut findings = Vec::new();

    for property in properties {
        let Some(owner_id) = property.owner else {
            continue;
        };
        match player_index.get(&owner_id) {
            None => findings.push(format!(
                "Property {} owned by non-existent player: {}",
                property.id, owner_id
            )),
            Some(owner) if !owner.owns(property.id) => findings.push(format!(
                "Property {} not listed in owner's property list",
                property.id
            )),
            Some(_) => {}
        }
    }

    findings
}

/// Cross-check players and properties, collecting every inconsistency.
pub fn audit_financial_state(state: &GameState) -> Result<()> {
    let property_index: FxHashMap<PropertyId, &Property> =
        state.properties.iter().map(|p| (p.id, p)).collect();
    let player_index: FxHashMap<PlayerId, &Player> =
        state.players.iter().map(|p| (p.id, p)).collect();

    let mut findings: Vec<String> = state
        .players
        .iter()
        .flat_map(|player| audit_player(player, &state.properties, &property_index))
        .collect();
    findings.extend(audit_property_ownership(&state.properties, &player_index));

    if findings.is_empty() {
        Ok(())
    } else {
        tracing::debug!(count = findings.len(), "financial audit failed");
        Err(GameError::ValidationFailure(findings))
    }
}

// ============================================================================
// Export
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

/// Wrap a free-text field in quotes, doubling any quote inside it
fn csv_quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn csv_row(transaction: &Transaction) -> String {
    format!(
        "{},{},{},{},{}",
        transaction.timestamp,
        transaction.kind.label(),
        transaction.amount,
        csv_quote(&transaction.description),
        transaction
            .related_property_id
            .map(|id| id.to_string())
            .unwrap_or_default()
    )
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| GameError::Persistence(PersistenceError::Serialize(e)))
}

pub fn export_transaction_history(player: &Player, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => to_json(&player.transaction_history),
        ExportFormat::Csv => {
            let mut lines = vec!["timestamp,type,amount,description,relatedPropertyId".to_string()];
            lines.extend(player.transaction_history.iter().map(csv_row));
            Ok(lines.join("\n"))
        }
    }
}

#[derive(Serialize)]
struct PlayerHistory<'a> {
    player_id: PlayerId,
    player_name: &'a str,
    transactions: &'a [Transaction],
}

pub fn export_all_transaction_histories(players: &[Player], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => {
            let histories: Vec<PlayerHistory<'_>> = players
                .iter()
                .map(|p| PlayerHistory {
                    player_id: p.id,
                    player_name: &p.name,
                    transactions: &p.transaction_history,
                })
                .collect();
            to_json(&histories)
        }
        ExportFormat::Csv => {
            let mut lines = vec![
                "playerId,playerName,timestamp,type,amount,description,relatedPropertyId"
                    .to_string(),
            ];
            for player in players {
                for transaction in &player.transaction_history {
                    lines.push(format!(
                        "{},{},{}",
                        player.id,
                        csv_quote(&player.name),
                        csv_row(transaction)
                    ));
                }
            }
            Ok(lines.join("\n"))
        }
    }
}
