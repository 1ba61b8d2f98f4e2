//! Read-only round state exposed to the presentation side.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::round::Phase;

/// Resolution of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher score).
    PlayerWin,
    /// Dealer wins (player busts, dealer blackjack, or higher dealer score).
    DealerWin,
    /// Push (tie); the stake is returned.
    Push,
    /// Player has a natural two-card 21; pays 3:2.
    PlayerBlackjack,
}

/// A dealt card together with its visibility toward the player.
///
/// Only the dealer's second card is ever concealed, and only until the
/// dealer's turn or an early resolution. The engine itself always holds
/// full information; concealment is purely a presentation flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealtCard {
    /// The card.
    pub card: Card,
    /// Whether the card is currently concealed from the player view.
    pub concealed: bool,
}

/// A read-only view of the round, rebuilt after every mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSnapshot {
    /// Current phase.
    pub phase: Phase,
    /// The player's cards, always fully visible.
    pub player_cards: Vec<Card>,
    /// The dealer's cards with per-card concealment flags.
    pub dealer_cards: Vec<DealtCard>,
    /// The player's score.
    pub player_score: u8,
    /// The dealer's score as visible to the player: the up card's value
    /// alone while the hole card is concealed, the full value otherwise.
    pub dealer_score: u8,
    /// Current balance.
    pub balance: usize,
    /// The bet in play (0 outside a round).
    pub bet: usize,
    /// The outcome of the last settled round, if any.
    pub outcome: Option<Outcome>,
}
