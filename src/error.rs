//! Error types for game operations.

use thiserror::Error;

/// Errors in a bet entered by the player.
///
/// The messages are shown to the player before asking again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Input is not an integer.
    #[error("Please enter a valid number.")]
    NotANumber,
    /// Bet is zero, negative, or larger than the balance.
    #[error("Bet must be within your available balance.")]
    OutOfRange {
        /// Balance the bet was checked against.
        balance: usize,
    },
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards in the deck for the initial deal.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during the player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The turn has already reached a terminal state.
    #[error("the turn is already over")]
    TurnOver,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors that abort a round.
///
/// Every variant is a logic error: the rules never need more than 52 cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Initial deal failed.
    #[error("deal failed: {0}")]
    Deal(#[from] DealError),
    /// Player turn failed.
    #[error("player turn failed: {0}")]
    Action(#[from] ActionError),
    /// Deck ran out while the dealer was drawing.
    #[error("no cards left in the deck for the dealer")]
    DealerNoCards,
}
