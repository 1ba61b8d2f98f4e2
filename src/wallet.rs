//! Wager and payout ledger.

use crate::error::BetError;
use crate::snapshot::Outcome;

/// A single wallet tracking the balance and the bet in play.
///
/// [`Wallet::place_bet`] is the sole debit path and
/// [`Wallet::settle`] (plus the abort-time [`Wallet::refund`]) the sole
/// credit path, so the balance can never go negative: the bet is
/// bounds-checked against the balance before it is deducted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wallet {
    balance: usize,
    bet: usize,
}

impl Wallet {
    /// Creates a wallet with the given starting balance and no bet.
    #[must_use]
    pub const fn new(balance: usize) -> Self {
        Self { balance, bet: 0 }
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the bet currently in play.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Validates and places a bet, deducting it from the balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero, below `min_bet`, or
    /// exceeds the balance. On error nothing is deducted.
    pub const fn place_bet(&mut self, amount: usize, min_bet: usize) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount < min_bet {
            return Err(BetError::BelowMinimum);
        }
        if amount > self.balance {
            return Err(BetError::InsufficientFunds);
        }

        self.balance -= amount;
        self.bet = amount;
        Ok(())
    }

    /// Applies the payout for an outcome and returns the amount credited.
    ///
    /// The stake was already deducted when the bet was placed, so a win
    /// credits stake plus profit, a push returns the stake, and a loss
    /// credits nothing. Blackjack pays 3:2, floored to a whole unit.
    /// The bet stays recorded until [`Self::clear_bet`] so that it can
    /// still be observed in the round-over snapshot.
    pub const fn settle(&mut self, outcome: Outcome) -> usize {
        let payout = match outcome {
            Outcome::PlayerBlackjack => self.bet * 5 / 2,
            Outcome::PlayerWin => self.bet * 2,
            Outcome::Push => self.bet,
            Outcome::DealerWin => 0,
        };
        self.balance += payout;
        payout
    }

    /// Returns the bet to the balance and clears it (round abort).
    ///
    /// Returns the refunded amount.
    pub const fn refund(&mut self) -> usize {
        let refunded = self.bet;
        self.balance += refunded;
        self.bet = 0;
        refunded
    }

    /// Clears the recorded bet without touching the balance.
    pub const fn clear_bet(&mut self) {
        self.bet = 0;
    }

    /// Returns whether the wallet can no longer cover any bet.
    #[must_use]
    pub const fn is_broke(&self) -> bool {
        self.balance == 0
    }
}
