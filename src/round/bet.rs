use crate::deck::Deck;
use crate::error::{ActionError, BetError};
use crate::port::{Presenter, Seat, TableEvent};
use crate::snapshot::Outcome;

use super::{Phase, Round};

impl<P: Presenter> Round<P> {
    /// Places a bet and opens a round.
    ///
    /// On success the amount is deducted from the balance, a fresh deck
    /// is built and shuffled, both hands are cleared, and the phase
    /// moves to [`Phase::Dealing`]. Call [`Round::deal`] next.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine is not in the betting phase or
    /// the amount is zero, below the table minimum, or above the
    /// balance. A rejected bet leaves all state unchanged.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if self.phase != Phase::Betting {
            return Err(BetError::InvalidPhase);
        }

        self.wallet.place_bet(amount, self.options.min_bet)?;

        self.player_hand.clear();
        self.dealer_hand.clear();
        self.outcome = None;

        self.deck = Deck::build();
        self.deck.shuffle(&mut self.rng);

        self.set_phase(Phase::Dealing);
        Ok(())
    }

    /// Deals the initial cards: player, dealer, player, dealer.
    ///
    /// The dealer's second card is dealt concealed toward the player
    /// view; the engine itself always knows it. After dealing, the
    /// round either resolves immediately (player natural, or a dealer
    /// natural behind a ten-value or Ace up card) or moves to
    /// [`Phase::PlayerTurn`].
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidPhase`] outside the dealing phase,
    /// or [`ActionError::DeckExhausted`] if the deck runs dry (the
    /// round is aborted and the bet refunded).
    pub fn deal(&mut self) -> Result<(), ActionError> {
        if self.phase != Phase::Dealing {
            return Err(ActionError::InvalidPhase);
        }

        for pass in 0..2 {
            let card = self.draw_or_abort()?;
            self.player_hand.add_card(card);
            self.emit(TableEvent::CardDealt {
                seat: Seat::Player,
                card,
                concealed: false,
            });

            let card = self.draw_or_abort()?;
            self.dealer_hand.add_card(card);
            self.emit(TableEvent::CardDealt {
                seat: Seat::Dealer,
                card,
                concealed: pass == 1,
            });
        }

        if self.player_hand.value() == 21 {
            // Player natural: reveal and check for a matching dealer 21.
            if self.dealer_hand.value() == 21 {
                self.settle(Outcome::Push);
            } else {
                self.settle(Outcome::PlayerBlackjack);
            }
            return Ok(());
        }

        // House peek: only a ten-value or Ace up card (both value >= 10)
        // exposes a dealer natural before the player acts.
        let strong_up_card = self
            .dealer_hand
            .up_card()
            .is_some_and(|card| card.value() >= 10);
        if strong_up_card && self.dealer_hand.value() == 21 {
            self.settle(Outcome::DealerWin);
            return Ok(());
        }

        self.set_phase(Phase::PlayerTurn);
        Ok(())
    }
}
