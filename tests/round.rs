//! Round engine integration tests.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use solojack::{
    ActionError, BetError, Card, DECK_SIZE, Deck, Outcome, Phase, Presenter, Round, RoundSnapshot,
    Seat, Suit, TableEvent, TableOptions, score,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Opens a round with the given bet and stacks the deck so that cards
/// come out in listed order (deal order: player, dealer, player, dealer).
fn start_round(bet: usize, draws: &[Card]) -> Round {
    let mut round = Round::new(TableOptions::default(), 1);
    round.place_bet(bet).unwrap();
    round.set_deck(Deck::from_draw_order(draws));
    round
}

#[test]
fn score_revalues_aces_from_scratch() {
    let cases: &[(&[Card], u8)] = &[
        (&[card(Suit::Hearts, 1), card(Suit::Spades, 1), card(Suit::Clubs, 9)], 21),
        (
            &[
                card(Suit::Hearts, 1),
                card(Suit::Spades, 1),
                card(Suit::Diamonds, 1),
                card(Suit::Clubs, 8),
            ],
            21,
        ),
        (&[card(Suit::Hearts, 13), card(Suit::Spades, 13)], 20),
        (&[card(Suit::Hearts, 1), card(Suit::Spades, 13)], 21),
        (&[card(Suit::Hearts, 1), card(Suit::Spades, 6)], 17),
        (&[card(Suit::Hearts, 13), card(Suit::Spades, 12), card(Suit::Clubs, 2)], 22),
        (&[], 0),
    ];

    for (cards, expected) in cases {
        assert_eq!(score(cards), *expected, "cards: {cards:?}");
    }
}

#[test]
fn built_deck_is_complete_and_unique() {
    let deck = Deck::build();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn shuffle_preserves_the_card_multiset() {
    let mut deck = Deck::build();
    let before: HashSet<Card> = deck.cards().iter().copied().collect();

    deck.shuffle(&mut rand::rng());

    assert_eq!(deck.len(), DECK_SIZE);
    let after: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(before, after);
}

#[test]
fn bet_validation_bounds() {
    let mut round = Round::new(TableOptions::default(), 1);

    assert_eq!(round.place_bet(0).unwrap_err(), BetError::ZeroBet);
    assert_eq!(round.place_bet(4).unwrap_err(), BetError::BelowMinimum);
    assert_eq!(
        round.place_bet(1001).unwrap_err(),
        BetError::InsufficientFunds
    );
    assert_eq!(round.balance(), 1000);
    assert_eq!(round.phase(), Phase::Betting);

    round.place_bet(10).unwrap();
    assert_eq!(round.balance(), 990);
    assert_eq!(round.bet(), 10);
    assert_eq!(round.phase(), Phase::Dealing);

    // Only one bet per round.
    assert_eq!(round.place_bet(10).unwrap_err(), BetError::InvalidPhase);
}

#[test]
fn player_blackjack_pays_three_to_two() {
    let mut round = start_round(
        10,
        &[
            card(Suit::Hearts, 1),   // player
            card(Suit::Clubs, 9),    // dealer up
            card(Suit::Spades, 13),  // player (natural 21)
            card(Suit::Diamonds, 7), // dealer hole
        ],
    );

    round.deal().unwrap();

    assert_eq!(round.phase(), Phase::RoundOver);
    assert_eq!(round.outcome(), Some(Outcome::PlayerBlackjack));
    // 1000 - 10 + floor(10 * 2.5) = 1015, a net profit of 1.5x the bet.
    assert_eq!(round.balance(), 1015);
}

#[test]
fn matching_naturals_push() {
    let mut round = start_round(
        50,
        &[
            card(Suit::Hearts, 1),  // player
            card(Suit::Clubs, 1),   // dealer up
            card(Suit::Spades, 13), // player
            card(Suit::Diamonds, 10), // dealer hole
        ],
    );

    round.deal().unwrap();

    assert_eq!(round.outcome(), Some(Outcome::Push));
    assert_eq!(round.balance(), 1000);
}

#[test]
fn dealer_natural_behind_strong_up_card_ends_round() {
    let mut round = start_round(
        10,
        &[
            card(Suit::Hearts, 9),   // player
            card(Suit::Clubs, 13),   // dealer up (value 10 triggers peek)
            card(Suit::Spades, 7),   // player
            card(Suit::Diamonds, 1), // dealer hole (natural 21)
        ],
    );

    round.deal().unwrap();

    assert_eq!(round.phase(), Phase::RoundOver);
    assert_eq!(round.outcome(), Some(Outcome::DealerWin));
    assert_eq!(round.balance(), 990);
    // The player never got a turn.
    assert_eq!(round.hit().unwrap_err(), ActionError::InvalidPhase);
}

#[test]
fn weak_dealer_up_card_goes_to_player_turn() {
    let mut round = start_round(
        10,
        &[
            card(Suit::Hearts, 9),   // player
            card(Suit::Clubs, 6),    // dealer up
            card(Suit::Spades, 7),   // player
            card(Suit::Diamonds, 5), // dealer hole
        ],
    );

    round.deal().unwrap();
    assert_eq!(round.phase(), Phase::PlayerTurn);
}

#[test]
fn player_bust_loses_without_dealer_play() {
    let mut round = start_round(
        10,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 9),    // dealer up
            card(Suit::Spades, 6),   // player
            card(Suit::Diamonds, 7), // dealer hole
            card(Suit::Hearts, 13),  // player hit (bust at 26)
        ],
    );

    round.deal().unwrap();
    round.hit().unwrap();

    assert_eq!(round.phase(), Phase::RoundOver);
    assert_eq!(round.outcome(), Some(Outcome::DealerWin));
    assert_eq!(round.balance(), 990);
    // Dealer never drew past the initial two cards.
    assert_eq!(round.dealer_hand().len(), 2);
}

#[test]
fn hitting_to_exactly_21_stands_automatically() {
    let mut round = start_round(
        10,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Spades, 6),   // player
            card(Suit::Diamonds, 7), // dealer hole (17, stands)
            card(Suit::Hearts, 5),   // player hit (21)
        ],
    );

    round.deal().unwrap();
    round.hit().unwrap();

    assert_eq!(round.phase(), Phase::RoundOver);
    assert_eq!(round.outcome(), Some(Outcome::PlayerWin));
    assert_eq!(round.balance(), 1010);
}

#[test]
fn dealer_draws_below_17_and_busts() {
    let mut round = start_round(
        10,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 10),   // dealer up
            card(Suit::Spades, 8),   // player (18, will stand)
            card(Suit::Diamonds, 6), // dealer hole (16, must draw)
            card(Suit::Hearts, 9),   // dealer draw (25, bust)
        ],
    );

    round.deal().unwrap();
    round.stand().unwrap();

    assert_eq!(round.dealer_hand().len(), 3);
    assert_eq!(round.outcome(), Some(Outcome::PlayerWin));
    assert_eq!(round.balance(), 1010);
}

#[test]
fn dealer_stands_on_soft_17() {
    let mut round = start_round(
        10,
        &[
            card(Suit::Hearts, 10), // player
            card(Suit::Clubs, 1),   // dealer up (Ace)
            card(Suit::Spades, 9),  // player (19)
            card(Suit::Diamonds, 6), // dealer hole (soft 17)
        ],
    );

    round.deal().unwrap();
    round.stand().unwrap();

    // Soft 17 stops the dealer like any other 17.
    assert_eq!(round.dealer_hand().len(), 2);
    assert_eq!(round.outcome(), Some(Outcome::PlayerWin));
    assert_eq!(round.balance(), 1010);
}

#[test]
fn equal_standing_scores_push() {
    let mut round = start_round(
        25,
        &[
            card(Suit::Hearts, 10),   // player
            card(Suit::Clubs, 10),    // dealer up
            card(Suit::Spades, 8),    // player (18)
            card(Suit::Diamonds, 8),  // dealer hole (18)
        ],
    );

    round.deal().unwrap();
    round.stand().unwrap();

    assert_eq!(round.outcome(), Some(Outcome::Push));
    assert_eq!(round.balance(), 1000);
}

#[test]
fn actions_outside_their_phase_are_rejected() {
    let mut round = Round::new(TableOptions::default(), 1);

    assert_eq!(round.hit().unwrap_err(), ActionError::InvalidPhase);
    assert_eq!(round.stand().unwrap_err(), ActionError::InvalidPhase);
    assert_eq!(round.next_round().unwrap_err(), ActionError::InvalidPhase);
    assert_eq!(round.deal().unwrap_err(), ActionError::InvalidPhase);

    // Nothing moved.
    assert_eq!(round.balance(), 1000);
    assert!(round.player_hand().is_empty());
    assert_eq!(round.phase(), Phase::Betting);
}

#[test]
fn exhausted_deck_aborts_the_round_and_refunds() {
    let mut round = start_round(
        10,
        &[
            card(Suit::Hearts, 9),
            card(Suit::Clubs, 5),
            card(Suit::Spades, 7),
            // Missing dealer hole card.
        ],
    );

    assert_eq!(round.deal().unwrap_err(), ActionError::DeckExhausted);
    assert_eq!(round.phase(), Phase::Betting);
    assert_eq!(round.balance(), 1000);
    assert_eq!(round.bet(), 0);
    assert!(round.player_hand().is_empty());
}

#[test]
fn exhausted_deck_during_hit_refunds_too() {
    let mut round = start_round(
        10,
        &[
            card(Suit::Hearts, 9),   // player
            card(Suit::Clubs, 5),    // dealer up
            card(Suit::Spades, 7),   // player
            card(Suit::Diamonds, 9), // dealer hole
        ],
    );

    round.deal().unwrap();
    assert_eq!(round.phase(), Phase::PlayerTurn);

    assert_eq!(round.hit().unwrap_err(), ActionError::DeckExhausted);
    assert_eq!(round.phase(), Phase::Betting);
    assert_eq!(round.balance(), 1000);
}

#[test]
fn next_round_keeps_balance_and_clears_round_state() {
    let mut round = start_round(
        10,
        &[
            card(Suit::Hearts, 1),
            card(Suit::Clubs, 9),
            card(Suit::Spades, 13),
            card(Suit::Diamonds, 7),
        ],
    );

    round.deal().unwrap();
    assert_eq!(round.phase(), Phase::RoundOver);

    round.next_round().unwrap();
    assert_eq!(round.phase(), Phase::Betting);
    assert_eq!(round.balance(), 1015);
    assert_eq!(round.bet(), 0);
    assert!(round.player_hand().is_empty());
    assert!(round.dealer_hand().is_empty());
    assert_eq!(round.outcome(), None);
}

#[test]
fn broke_wallet_requires_reset() {
    let options = TableOptions::default().with_starting_balance(10);
    let mut round = Round::new(options, 1);
    round.place_bet(10).unwrap();
    round.set_deck(Deck::from_draw_order(&[
        card(Suit::Hearts, 9),    // player
        card(Suit::Clubs, 13),    // dealer up
        card(Suit::Spades, 7),    // player
        card(Suit::Diamonds, 1),  // dealer hole (dealer natural)
    ]));

    round.deal().unwrap();
    assert_eq!(round.balance(), 0);
    assert_eq!(round.next_round().unwrap_err(), ActionError::OutOfFunds);
    assert_eq!(round.place_bet(5).unwrap_err(), BetError::InvalidPhase);

    round.reset();
    assert_eq!(round.phase(), Phase::Betting);
    assert_eq!(round.balance(), 10);
    assert_eq!(round.outcome(), None);
}

#[test]
fn snapshot_conceals_only_the_hole_card_until_dealer_turn() {
    let mut round = start_round(
        10,
        &[
            card(Suit::Hearts, 9),   // player
            card(Suit::Clubs, 5),    // dealer up
            card(Suit::Spades, 7),   // player
            card(Suit::Diamonds, 9), // dealer hole
            card(Suit::Hearts, 8),   // dealer draw
        ],
    );

    round.deal().unwrap();

    let during: RoundSnapshot = round.snapshot();
    assert_eq!(during.phase, Phase::PlayerTurn);
    assert_eq!(during.player_score, 16);
    assert!(!during.dealer_cards[0].concealed);
    assert!(during.dealer_cards[1].concealed);
    // Visible dealer score is the up card alone.
    assert_eq!(during.dealer_score, 5);
    assert_eq!(during.bet, 10);
    assert_eq!(during.outcome, None);

    round.stand().unwrap();

    let after = round.snapshot();
    assert_eq!(after.phase, Phase::RoundOver);
    assert!(after.dealer_cards.iter().all(|dealt| !dealt.concealed));
    assert_eq!(after.dealer_score, 22);
    assert_eq!(after.outcome, Some(Outcome::PlayerWin));
}

#[test]
fn invalid_bet_leaves_snapshot_unchanged() {
    let mut round = Round::new(TableOptions::default(), 1);
    let before = round.snapshot();

    assert!(round.place_bet(4).is_err());
    assert!(round.place_bet(2000).is_err());

    assert_eq!(round.snapshot(), before);
}

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<TableEvent>>>);

impl Presenter for Recorder {
    fn on_event(&mut self, event: &TableEvent) {
        self.0.borrow_mut().push(*event);
    }
}

#[test]
fn presenter_receives_the_full_event_stream() {
    let recorder = Recorder::default();
    let events = recorder.0.clone();

    let mut round = Round::with_presenter(TableOptions::default(), 1, recorder);
    round.place_bet(10).unwrap();
    round.set_deck(Deck::from_draw_order(&[
        card(Suit::Hearts, 10),  // player
        card(Suit::Clubs, 10),   // dealer up
        card(Suit::Spades, 8),   // player
        card(Suit::Diamonds, 7), // dealer hole
    ]));
    round.deal().unwrap();
    round.stand().unwrap();

    let events = events.borrow();
    assert_eq!(events[0], TableEvent::PhaseChanged(Phase::Dealing));
    assert!(matches!(
        events[1],
        TableEvent::CardDealt {
            seat: Seat::Player,
            concealed: false,
            ..
        }
    ));
    // Fourth card is the concealed dealer hole card.
    assert!(matches!(
        events[4],
        TableEvent::CardDealt {
            seat: Seat::Dealer,
            concealed: true,
            ..
        }
    ));
    assert_eq!(events[5], TableEvent::PhaseChanged(Phase::PlayerTurn));
    assert_eq!(events[6], TableEvent::PhaseChanged(Phase::DealerTurn));
    assert_eq!(
        events[7],
        TableEvent::HoleRevealed(card(Suit::Diamonds, 7))
    );
    assert_eq!(events[8], TableEvent::PhaseChanged(Phase::RoundOver));
    assert_eq!(
        events[9],
        TableEvent::RoundSettled {
            outcome: Outcome::PlayerWin,
            payout: 20,
            balance: 1010,
        }
    );
}
