//! Round state machine and orchestration.
//!
//! [`Round`] is the only component that mutates shared state: it owns
//! the deck, both hands, the wallet, and the phase, and every intent
//! (bet, deal, hit, stand, next round, reset) flows through it as one
//! atomic `&mut self` transition. The presenter port only ever observes.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::ActionError;
use crate::hand::{DealerHand, Hand};
use crate::options::TableOptions;
use crate::port::{Presenter, TableEvent};
use crate::snapshot::{DealtCard, Outcome, RoundSnapshot};
use crate::wallet::Wallet;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::Phase;

/// A single-player blackjack round engine.
///
/// Exactly one round is ever in flight. The engine starts in
/// [`Phase::Betting`] with the configured starting balance and keeps
/// the balance across rounds until [`Round::reset`].
pub struct Round<P: Presenter = ()> {
    /// Table options.
    options: TableOptions,
    /// Cards for the current round; rebuilt fresh at every bet.
    deck: Deck,
    /// The player's hand.
    player_hand: Hand,
    /// The dealer's hand.
    dealer_hand: DealerHand,
    /// Balance and bet in play.
    wallet: Wallet,
    /// Current phase.
    phase: Phase,
    /// Outcome of the last settled round.
    outcome: Option<Outcome>,
    /// Random number generator for shuffling.
    rng: ChaCha8Rng,
    /// Notification sink.
    presenter: P,
}

impl Round<()> {
    /// Creates a headless round engine with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use solojack::{Phase, Round, TableOptions};
    ///
    /// let round = Round::new(TableOptions::default(), 42);
    /// assert_eq!(round.phase(), Phase::Betting);
    /// assert_eq!(round.balance(), 1000);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self::with_presenter(options, seed, ())
    }
}

impl<P: Presenter> Round<P> {
    /// Creates a round engine that reports to the given presenter.
    #[must_use]
    pub fn with_presenter(options: TableOptions, seed: u64, presenter: P) -> Self {
        Self {
            options,
            deck: Deck::build(),
            player_hand: Hand::new(),
            dealer_hand: DealerHand::new(),
            wallet: Wallet::new(options.starting_balance),
            phase: Phase::Betting,
            outcome: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
            presenter,
        }
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.wallet.balance()
    }

    /// Returns the bet in play (0 outside a round).
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.wallet.bet()
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the outcome of the last settled round, if any.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Replaces the current deck.
    ///
    /// Together with [`Deck::from_draw_order`] this allows
    /// deterministic replay of full rounds. Call it after
    /// [`Round::place_bet`], which builds a fresh shuffled deck.
    pub fn set_deck(&mut self, deck: Deck) {
        self.deck = deck;
    }

    /// Reinitializes the engine: starting balance restored, hands and
    /// bet cleared, phase back to [`Phase::Betting`].
    ///
    /// Valid in any phase. This is the only way to continue after the
    /// balance reaches zero.
    pub fn reset(&mut self) {
        self.wallet = Wallet::new(self.options.starting_balance);
        self.player_hand.clear();
        self.dealer_hand.clear();
        self.outcome = None;
        self.set_phase(Phase::Betting);
    }

    /// Builds a read-only snapshot of the round.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        let hole_concealed = !self.dealer_hand.is_hole_revealed();
        let dealer_cards: Vec<DealtCard> = self
            .dealer_hand
            .cards()
            .iter()
            .enumerate()
            .map(|(index, &card)| DealtCard {
                card,
                concealed: index == 1 && hole_concealed,
            })
            .collect();

        RoundSnapshot {
            phase: self.phase,
            player_cards: self.player_hand.cards().to_vec(),
            dealer_cards,
            player_score: self.player_hand.value(),
            dealer_score: self.dealer_hand.visible_value(),
            balance: self.wallet.balance(),
            bet: self.wallet.bet(),
            outcome: self.outcome,
        }
    }

    /// Sets the phase and notifies the presenter.
    pub(super) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
        self.emit(TableEvent::PhaseChanged(phase));
    }

    /// Delivers an event to the presenter.
    pub(super) fn emit(&mut self, event: TableEvent) {
        self.presenter.on_event(&event);
    }

    /// Draws a card, aborting the round if the deck is exhausted.
    ///
    /// On exhaustion the bet is refunded, hands are cleared, and the
    /// phase returns to betting before the error is surfaced.
    pub(super) fn draw_or_abort(&mut self) -> Result<Card, ActionError> {
        match self.deck.draw() {
            Ok(card) => Ok(card),
            Err(exhausted) => {
                self.abort_round();
                Err(exhausted.into())
            }
        }
    }

    fn abort_round(&mut self) {
        let refunded = self.wallet.refund();
        self.player_hand.clear();
        self.dealer_hand.clear();
        self.outcome = None;
        self.set_phase(Phase::Betting);
        self.emit(TableEvent::RoundAborted { refunded });
    }

    /// Turns the dealer's hole card face up, if it is still concealed.
    pub(super) fn reveal_dealer_hole(&mut self) {
        if self.dealer_hand.is_hole_revealed() {
            return;
        }
        self.dealer_hand.reveal_hole();
        if let Some(&card) = self.dealer_hand.hole_card() {
            self.emit(TableEvent::HoleRevealed(card));
        }
    }

    /// Resolves the round: applies the payout exactly once, records the
    /// outcome, and moves to [`Phase::RoundOver`].
    pub(super) fn settle(&mut self, outcome: Outcome) {
        self.reveal_dealer_hole();
        let payout = self.wallet.settle(outcome);
        self.outcome = Some(outcome);
        self.set_phase(Phase::RoundOver);
        self.emit(TableEvent::RoundSettled {
            outcome,
            payout,
            balance: self.wallet.balance(),
        });
    }
}
