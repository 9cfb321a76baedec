//! A single-player blackjack table against a scripted dealer.
//!
//! The rules engine (deck, hand scoring, the player and dealer turns, and
//! settlement) is pure and works without `std`. A [`GameSession`] runs rounds
//! against a persistent balance and talks to the player only through the
//! [`Console`] trait; [`terminal::Terminal`] implements it over any
//! `BufRead`/`Write` pair.
//!
//! # Example
//!
//! ```
//! use bjsolo::{Card, Deck, GameOptions, Hand, Suit, settle};
//!
//! let mut deck = Deck::from_draws(&[Card::new(Suit::Spades, 9)]);
//! let player = Hand::from_cards(&[Card::new(Suit::Hearts, 1), Card::new(Suit::Clubs, 13)]);
//! let dealer = Hand::from_cards(&[Card::new(Suit::Diamonds, 10), deck.draw().unwrap()]);
//!
//! let settlement = settle(&player, &dealer, 100, &GameOptions::default());
//! assert_eq!(settlement.payout, 250);
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
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod terminal;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{ActionError, BetError, DealError, RoundError};
pub use game::{
    Console, Decision, Event, GameSession, PlayerTurn, Question, SessionEnd, SessionSummary,
    TurnOutcome, TurnState, deal_initial, dealer_should_draw, parse_bet, play_dealer, settle,
    validate_bet,
};
pub use hand::{Hand, hand_value};
pub use options::{DoubleOption, GameOptions, RoundingMode};
pub use result::{HandOutcome, Settlement};
