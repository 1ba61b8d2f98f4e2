//! Round phase type.

/// Phase of the round state machine.
///
/// Phases advance `Betting -> Dealing -> PlayerTurn -> DealerTurn ->
/// RoundOver` and cycle back to `Betting`. Early resolutions (naturals,
/// player bust) skip straight to `RoundOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting a bet for the next round.
    Betting,
    /// A bet is placed; initial cards have not been distributed yet.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has settled; awaiting `next_round` or `reset`.
    RoundOver,
}
