//! The per-round deck.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};

/// A single 52-card deck, dealt from the top without replacement.
///
/// A fresh deck is built and shuffled for every round; nothing is carried
/// over between rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Remaining cards. The top of the deck is the end of the vector.
    cards: Vec<Card>,
}

impl Deck {
    /// Builds all 52 cards and shuffles them with `rng`.
    ///
    /// Every permutation is equally likely for a uniform `rng`.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Self::ordered_cards();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Creates a deck that deals `draws` in the given order.
    ///
    /// Useful for replaying a known round.
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    fn ordered_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }
        cards
    }

    /// Removes and returns the top card.
    ///
    /// Returns `None` once the deck is empty. A round never needs more than
    /// 52 cards, so callers treat `None` as a logic error.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
