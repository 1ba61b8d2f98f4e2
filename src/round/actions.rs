use crate::error::ActionError;
use crate::port::{Presenter, Seat, TableEvent};
use crate::snapshot::Outcome;

use super::{Phase, Round};

impl<P: Presenter> Round<P> {
    /// Player action: Hit (draw a card).
    ///
    /// Busting settles the round immediately as a dealer win without
    /// any dealer play. Reaching exactly 21 stands automatically.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidPhase`] outside the player's turn
    /// (state unchanged), or [`ActionError::DeckExhausted`] if the deck
    /// runs dry (round aborted, bet refunded).
    pub fn hit(&mut self) -> Result<(), ActionError> {
        if self.phase != Phase::PlayerTurn {
            return Err(ActionError::InvalidPhase);
        }

        let card = self.draw_or_abort()?;
        self.player_hand.add_card(card);
        self.emit(TableEvent::CardDealt {
            seat: Seat::Player,
            card,
            concealed: false,
        });

        let score = self.player_hand.value();
        if score > 21 {
            self.settle(Outcome::DealerWin);
        } else if score == 21 {
            self.run_dealer()?;
        }
        Ok(())
    }

    /// Player action: Stand (end the player's turn).
    ///
    /// Hands control to the dealer, who draws to 17 and settles the
    /// round.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidPhase`] outside the player's turn
    /// (state unchanged), or [`ActionError::DeckExhausted`] if the deck
    /// runs dry while the dealer draws (round aborted, bet refunded).
    pub fn stand(&mut self) -> Result<(), ActionError> {
        if self.phase != Phase::PlayerTurn {
            return Err(ActionError::InvalidPhase);
        }
        self.run_dealer()
    }

    /// Returns to the betting phase for another round.
    ///
    /// The bet, hands, and last outcome are cleared; the balance
    /// carries over.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidPhase`] unless the round is over,
    /// or [`ActionError::OutOfFunds`] when the balance is zero, in
    /// which case only [`Round::reset`] can continue play.
    pub fn next_round(&mut self) -> Result<(), ActionError> {
        if self.phase != Phase::RoundOver {
            return Err(ActionError::InvalidPhase);
        }
        if self.wallet.is_broke() {
            return Err(ActionError::OutOfFunds);
        }

        self.wallet.clear_bet();
        self.player_hand.clear();
        self.dealer_hand.clear();
        self.outcome = None;
        self.set_phase(Phase::Betting);
        Ok(())
    }
}
