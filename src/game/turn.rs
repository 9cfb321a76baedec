use crate::card::Card;
use crate::deck::Deck;
use crate::error::ActionError;
use crate::hand::Hand;
use crate::options::{DoubleOption, GameOptions};

use super::state::{TurnOutcome, TurnState};

/// The player's side of a round.
///
/// Owns the player's hand and bet for the round and moves through
/// [`TurnState`] as actions are applied. It never prompts or prints; the
/// caller asks for decisions and reports the returned cards.
#[derive(Debug, Clone)]
pub struct PlayerTurn {
    hand: Hand,
    bet: usize,
    state: TurnState,
    double: DoubleOption,
}

impl PlayerTurn {
    /// Starts a turn on a freshly dealt hand.
    ///
    /// A natural finishes the turn immediately.
    #[must_use]
    pub fn new(hand: Hand, bet: usize, options: &GameOptions) -> Self {
        let state = if hand.is_natural() {
            TurnState::Finished(TurnOutcome::Natural)
        } else {
            TurnState::Start
        };

        Self {
            hand,
            bet,
            state,
            double: options.double,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> TurnState {
        self.state
    }

    /// Returns the outcome if the turn is over.
    #[must_use]
    pub const fn outcome(&self) -> Option<TurnOutcome> {
        self.state.outcome()
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Consumes the turn and returns the final hand.
    #[must_use]
    pub fn into_hand(self) -> Hand {
        self.hand
    }

    /// Returns the bet, doubled after a double down.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns whether a double down is on offer.
    ///
    /// `balance` is what is left after the original stake was placed; it
    /// must cover a second stake of the same size.
    #[must_use]
    pub fn can_double(&self, balance: usize) -> bool {
        self.state == TurnState::Start
            && self.hand.len() == 2
            && self.double.allows(self.hand.value())
            && balance >= self.bet
    }

    fn ensure_active(&self) -> Result<(), ActionError> {
        match self.state {
            TurnState::Finished(_) => Err(ActionError::TurnOver),
            TurnState::Start | TurnState::Deciding => Ok(()),
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// The turn finishes as [`TurnOutcome::Bust`] as soon as the total
    /// exceeds 21.
    ///
    /// # Errors
    ///
    /// Returns an error if the turn is over or the deck is empty.
    pub fn hit(&mut self, deck: &mut Deck) -> Result<Card, ActionError> {
        self.ensure_active()?;

        let card = deck.draw().ok_or(ActionError::NoCards)?;
        self.hand.add_card(card);

        self.state = if self.hand.is_bust() {
            TurnState::Finished(TurnOutcome::Bust)
        } else {
            TurnState::Deciding
        };
        tracing::debug!(%card, value = self.hand.value(), "player hits");

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the turn is over.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_active()?;
        self.state = TurnState::Finished(TurnOutcome::Stand);
        tracing::debug!(value = self.hand.value(), "player stands");
        Ok(())
    }

    /// Player action: Double down (double bet, receive one card, then stop).
    ///
    /// The extra stake is taken from `balance` right away, so settlement
    /// only has to credit the payout.
    ///
    /// # Errors
    ///
    /// Returns an error if the turn is over, the hand is not eligible, the
    /// balance cannot cover the extra stake, or the deck is empty.
    pub fn double_down(&mut self, deck: &mut Deck, balance: &mut usize) -> Result<Card, ActionError> {
        self.ensure_active()?;

        if self.state != TurnState::Start
            || self.hand.len() != 2
            || !self.double.allows(self.hand.value())
        {
            return Err(ActionError::CannotDouble);
        }

        if *balance < self.bet {
            return Err(ActionError::InsufficientFunds);
        }

        let card = deck.draw().ok_or(ActionError::NoCards)?;
        *balance -= self.bet;
        self.bet = self.bet.saturating_mul(2);
        self.hand.add_card(card);

        // A bust on the double card still loses the doubled stake.
        self.state = if self.hand.is_bust() {
            TurnState::Finished(TurnOutcome::Bust)
        } else {
            TurnState::Finished(TurnOutcome::DoubledDown)
        };
        tracing::debug!(%card, bet = self.bet, value = self.hand.value(), "player doubles down");

        Ok(card)
    }
}
