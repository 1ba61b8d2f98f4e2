//! Presentation port: the one-way notification channel out of the engine.
//!
//! The engine emits [`TableEvent`]s synchronously after each state
//! mutation and never renders, schedules, or animates anything itself.
//! A host implements [`Presenter`] to drive whatever surface it likes;
//! any pacing or animation delay it introduces must not feed back into
//! engine state.

use crate::card::Card;
use crate::round::Phase;
use crate::snapshot::Outcome;

/// Which participant a card was dealt to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

/// A discrete notification from the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEvent {
    /// The phase changed.
    PhaseChanged(Phase),
    /// A card was dealt to a seat. `concealed` is true only for the
    /// dealer's hole card; the card itself is still carried in full.
    CardDealt {
        /// Receiving seat.
        seat: Seat,
        /// The dealt card.
        card: Card,
        /// Whether the card is concealed from the player view.
        concealed: bool,
    },
    /// The dealer's hole card was turned face up.
    HoleRevealed(Card),
    /// The round settled with an outcome and its payout.
    RoundSettled {
        /// How the round resolved.
        outcome: Outcome,
        /// Amount credited back to the balance (stake included).
        payout: usize,
        /// Balance after the payout.
        balance: usize,
    },
    /// The round was aborted (deck exhausted) and the bet refunded.
    RoundAborted {
        /// Amount returned to the balance.
        refunded: usize,
    },
}

/// Receiver for engine notifications.
pub trait Presenter {
    /// Called synchronously after each engine mutation.
    fn on_event(&mut self, event: &TableEvent);
}

/// No-op presenter for headless use.
impl Presenter for () {
    fn on_event(&mut self, _event: &TableEvent) {}
}
