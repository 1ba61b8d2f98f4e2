use crate::error::ActionError;
use crate::port::{Presenter, Seat, TableEvent};
use crate::snapshot::Outcome;

use super::{Phase, Round};

impl<P: Presenter> Round<P> {
    /// Plays out the dealer's hand and settles the round.
    ///
    /// The dealer reveals the hole card and draws while under 17. Any
    /// 17 stops the dealer, soft or hard; the evaluator's ace logic is
    /// the only soft-hand rule applied.
    pub(super) fn run_dealer(&mut self) -> Result<(), ActionError> {
        self.set_phase(Phase::DealerTurn);
        self.reveal_dealer_hole();

        while self.dealer_hand.value() < 17 {
            let card = self.draw_or_abort()?;
            self.dealer_hand.add_card(card);
            self.emit(TableEvent::CardDealt {
                seat: Seat::Dealer,
                card,
                concealed: false,
            });
        }

        let dealer_score = self.dealer_hand.value();
        let player_score = self.player_hand.value();

        let outcome = if dealer_score > 21 || player_score > dealer_score {
            Outcome::PlayerWin
        } else if player_score < dealer_score {
            Outcome::DealerWin
        } else {
            Outcome::Push
        };

        self.settle(outcome);
        Ok(())
    }
}
