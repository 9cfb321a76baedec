use crate::deck::Deck;
use crate::error::{BetError, DealError};
use crate::hand::Hand;

/// Checks that `amount` is a legal bet against `balance`.
///
/// # Errors
///
/// Returns [`BetError::OutOfRange`] unless `0 < amount <= balance`.
pub const fn validate_bet(amount: usize, balance: usize) -> Result<usize, BetError> {
    if amount == 0 || amount > balance {
        return Err(BetError::OutOfRange { balance });
    }
    Ok(amount)
}

/// Parses a bet typed by the player.
///
/// Surrounding whitespace is ignored. Negative and oversized numbers are
/// range errors, anything that is not an integer is a format error.
///
/// ```
/// use bjsolo::{BetError, parse_bet};
///
/// assert_eq!(parse_bet("abc", 100), Err(BetError::NotANumber));
/// assert_eq!(parse_bet("-5", 100), Err(BetError::OutOfRange { balance: 100 }));
/// assert_eq!(parse_bet("50", 100), Ok(50));
/// ```
///
/// # Errors
///
/// Returns [`BetError::NotANumber`] or [`BetError::OutOfRange`].
pub fn parse_bet(input: &str, balance: usize) -> Result<usize, BetError> {
    let amount: i128 = input.trim().parse().map_err(|_| BetError::NotANumber)?;
    let amount = usize::try_from(amount).map_err(|_| BetError::OutOfRange { balance })?;
    validate_bet(amount, balance)
}

/// Deals the opening two cards each, alternating player and dealer.
///
/// Returns `(player, dealer)`; the dealer's first card is the up card.
///
/// # Errors
///
/// Returns an error if the deck holds fewer than four cards.
pub fn deal_initial(deck: &mut Deck) -> Result<(Hand, Hand), DealError> {
    if deck.remaining() < 4 {
        return Err(DealError::NotEnoughCards);
    }

    let mut player = Hand::new();
    let mut dealer = Hand::new();

    for _ in 0..2 {
        player.add_card(deck.draw().ok_or(DealError::NotEnoughCards)?);
        dealer.add_card(deck.draw().ok_or(DealError::NotEnoughCards)?);
    }

    tracing::debug!(
        player = player.value(),
        dealer_up = ?dealer.up_card(),
        "initial deal"
    );

    Ok((player, dealer))
}
