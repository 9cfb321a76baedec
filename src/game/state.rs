//! Turn state types.

/// How the player's turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The first two cards made 21; no decisions were asked for.
    Natural,
    /// Player stood.
    Stand,
    /// Player went over 21. The dealer does not play.
    Bust,
    /// Player doubled the bet and took exactly one card.
    DoubledDown,
}

/// Player turn state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Two cards dealt, nothing decided yet. Double down is only offered here.
    Start,
    /// Player has hit at least once and may hit again or stand.
    Deciding,
    /// The turn is over.
    Finished(TurnOutcome),
}

impl TurnState {
    /// Returns the outcome if the turn is over.
    #[must_use]
    pub const fn outcome(self) -> Option<TurnOutcome> {
        match self {
            Self::Finished(outcome) => Some(outcome),
            Self::Start | Self::Deciding => None,
        }
    }
}
