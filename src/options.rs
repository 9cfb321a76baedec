//! Table configuration options.

/// Hand totals on which the player is offered a double down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DoubleOption {
    /// Double down offered on any two-card total.
    Any,
    /// Double down offered only on 9 through 11.
    NineThrough11,
    /// Double down offered only on 10 or 11.
    #[default]
    TenOrEleven,
    /// Double down never offered.
    None,
}

impl DoubleOption {
    /// Returns whether a two-card `total` qualifies for a double down.
    #[must_use]
    pub const fn allows(self, total: u8) -> bool {
        match self {
            Self::Any => true,
            Self::NineThrough11 => matches!(total, 9..=11),
            Self::TenOrEleven => matches!(total, 10 | 11),
            Self::None => false,
        }
    }
}

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsolo::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_balance(500)
///     .with_blackjack_pays(1.2)
///     .with_stand_on_soft_17(false);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Balance the session starts with.
    pub starting_balance: usize,
    /// Blackjack winnings ratio on top of the returned stake (typically 1.5).
    pub blackjack_pays: f64,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
    /// Whether the dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Double down conditions.
    pub double: DoubleOption,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_balance: 1000,
            blackjack_pays: 1.5,
            rounding_blackjack: RoundingMode::Down,
            stand_on_soft_17: true,
            double: DoubleOption::TenOrEleven,
        }
    }
}

impl GameOptions {
    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_balance(250);
    /// assert_eq!(options.starting_balance, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: usize) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameOptions;
    ///
    /// let options = GameOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets whether the dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets the double down conditions.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{DoubleOption, GameOptions};
    ///
    /// let options = GameOptions::default().with_double(DoubleOption::Any);
    /// assert_eq!(options.double, DoubleOption::Any);
    /// ```
    #[must_use]
    pub const fn with_double(mut self, double: DoubleOption) -> Self {
        self.double = double;
        self
    }
}
