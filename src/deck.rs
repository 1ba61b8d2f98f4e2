//! Deck lifecycle: build, shuffle, draw.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DeckExhausted;

/// An ordered sequence of cards, drawn from the back.
///
/// A deck is built fresh for every round and never replenished
/// mid-round; its length strictly decreases as cards are dealt.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds an unshuffled 52-card deck.
    ///
    /// Contains every (suit, rank) combination exactly once, in
    /// suit-major, rank-minor order.
    #[must_use]
    pub fn build() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Creates a deck that yields the given cards from [`Self::draw`]
    /// in listed order.
    ///
    /// Intended for deterministic replay in tests and simulations.
    #[must_use]
    pub fn from_draw_order(draws: &[Card]) -> Self {
        let mut cards: Vec<Card> = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Shuffles the deck in place with an unbiased Fisher-Yates shuffle.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the last card of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckExhausted`] if the deck is empty. A round never
    /// legitimately consumes a full deck, but callers must treat this
    /// as a round-aborting condition rather than ignore it.
    pub fn draw(&mut self) -> Result<Card, DeckExhausted> {
        self.cards.pop().ok_or(DeckExhausted)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::build()
    }
}
