//! Round result types.

/// Result of the player's hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player has a natural.
    Blackjack,
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Dealer has the higher value.
    Lose,
    /// Push (tie).
    Push,
    /// Player busted.
    Bust,
}

/// Settlement of a single round.
///
/// The stake is taken from the balance when the bet is placed (and again for
/// the extra stake of a double down), so `payout` is what goes back onto the
/// balance and `net` is the change relative to before the bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The final bet, doubled if the player doubled down.
    pub bet: usize,
    /// Amount credited back to the balance, stake included.
    pub payout: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's hand value.
    pub dealer_value: u8,
}
