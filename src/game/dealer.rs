use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::hand::Hand;
use crate::options::{GameOptions, RoundingMode};
use crate::result::{HandOutcome, Settlement};

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

fn signed(amount: usize) -> isize {
    isize::try_from(amount).unwrap_or(isize::MAX)
}

/// Returns whether the dealer must take another card.
///
/// The dealer draws below 17 and stands on hard 17 or more. Soft 17 is
/// drawn to only when `stand_on_soft_17` is off.
#[must_use]
pub fn dealer_should_draw(hand: &Hand, options: &GameOptions) -> bool {
    let value = hand.value();
    if value > 17 {
        return false;
    }
    if value == 17 {
        return hand.is_soft() && !options.stand_on_soft_17;
    }
    true
}

/// Dealer plays their hand according to the rules.
///
/// Returns the cards drawn by the dealer, in order.
///
/// # Errors
///
/// Returns an error if the deck is empty while the dealer must draw.
pub fn play_dealer(
    hand: &mut Hand,
    deck: &mut Deck,
    options: &GameOptions,
) -> Result<Vec<Card>, RoundError> {
    let mut drawn_cards = Vec::new();

    while dealer_should_draw(hand, options) {
        let card = deck.draw().ok_or(RoundError::DealerNoCards)?;
        hand.add_card(card);
        drawn_cards.push(card);
        tracing::debug!(%card, value = hand.value(), "dealer draws");
    }

    Ok(drawn_cards)
}

/// Settles a round between the player's final hand and the dealer's.
///
/// Rules are checked in order:
/// 1. A player natural pays the stake plus `blackjack_pays`, whatever the
///    dealer holds.
/// 2. A busted player loses.
/// 3. A busted dealer, or a higher player total, wins even money.
/// 4. A higher dealer total loses.
/// 5. Equal totals push.
///
/// `bet` is the final bet; pass the doubled amount after a double down.
/// Payouts saturate at `usize::MAX` and `net` at the `isize` bounds.
#[must_use]
pub fn settle(player: &Hand, dealer: &Hand, bet: usize, options: &GameOptions) -> Settlement {
    let player_value = player.value();
    let dealer_value = dealer.value();

    let (outcome, payout) = if player.is_natural() {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for monetary values"
        )]
        let winnings = (bet as f64) * options.blackjack_pays;
        (
            HandOutcome::Blackjack,
            bet.saturating_add(round_amount(winnings, options.rounding_blackjack)),
        )
    } else if player_value > 21 {
        (HandOutcome::Bust, 0)
    } else if dealer_value > 21 || player_value > dealer_value {
        (HandOutcome::Win, bet.saturating_mul(2))
    } else if player_value < dealer_value {
        (HandOutcome::Lose, 0)
    } else {
        (HandOutcome::Push, bet)
    };

    let net = signed(payout).saturating_sub(signed(bet));

    Settlement {
        outcome,
        bet,
        payout,
        net,
        player_value,
        dealer_value,
    }
}
