//! Error types for round operations.

use thiserror::Error;

/// Errors that can occur when placing a bet.
///
/// A failed bet never mutates state: the balance is untouched and the
/// phase stays at betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bets are only accepted during the betting phase.
    #[error("bets are only accepted during the betting phase")]
    InvalidPhase,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet amount is below the table minimum.
    #[error("bet is below the table minimum")]
    BelowMinimum,
    /// Bet amount exceeds the current balance.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur during player actions and round flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is not valid in the current phase. The engine state
    /// is unchanged.
    #[error("action is not valid in the current phase")]
    InvalidPhase,
    /// The balance is empty; no further rounds until the table is reset.
    #[error("balance is empty, reset the table to continue")]
    OutOfFunds,
    /// The deck ran out of cards mid-round. The round has been aborted,
    /// the bet refunded, and the phase returned to betting.
    #[error("deck exhausted, round aborted and bet refunded")]
    DeckExhausted,
}

/// Error returned when drawing from an empty deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct DeckExhausted;

impl From<DeckExhausted> for ActionError {
    fn from(_: DeckExhausted) -> Self {
        Self::DeckExhausted
    }
}
