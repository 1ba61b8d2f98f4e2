//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that owns the full round state
//! machine: betting, dealing, player actions, the dealer's drawing
//! policy, and payout settlement against a single wallet. Rendering,
//! animation, and input belong to the host, which observes the engine
//! through the [`Presenter`] port and read-only [`RoundSnapshot`]s.
//!
//! # Example
//!
//! ```
//! use solojack::{Round, TableOptions};
//!
//! let mut round = Round::new(TableOptions::default(), 42);
//! round.place_bet(10).unwrap();
//! assert_eq!(round.snapshot().balance, 990);
//! round.deal().unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod port;
pub mod round;
pub mod snapshot;
pub mod wallet;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{ActionError, BetError, DeckExhausted};
pub use hand::{DealerHand, Hand, score};
pub use options::TableOptions;
pub use port::{Presenter, Seat, TableEvent};
pub use round::{Phase, Round};
pub use snapshot::{DealtCard, Outcome, RoundSnapshot};
pub use wallet::Wallet;
