use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::options::GameOptions;
use crate::result::Settlement;

use super::bet::{deal_initial, validate_bet};
use super::dealer::{play_dealer, settle};
use super::state::TurnOutcome;
use super::turn::PlayerTurn;

/// A yes/no question put to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    /// Double down on the opening `total`?
    DoubleDown {
        /// The two-card total.
        total: u8,
    },
    /// Play another round?
    PlayAgain,
}

/// A hit-or-stand decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Take another card.
    Hit,
    /// Keep the hand.
    Stand,
}

/// Something the player should see.
///
/// Card slices are exactly what is visible at that moment; for
/// [`Event::Dealt`] the dealer slice holds only the up card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'a> {
    /// Opening hands after the bet was placed.
    Dealt {
        /// The player's two cards.
        player: &'a [Card],
        /// The dealer's visible cards.
        dealer: &'a [Card],
    },
    /// The player hit.
    PlayerDrew {
        /// The card drawn.
        card: Card,
        /// The player's hand including `card`.
        hand: &'a [Card],
    },
    /// The player doubled down.
    DoubledDown {
        /// The single card drawn.
        card: Card,
        /// The player's final hand.
        hand: &'a [Card],
        /// The doubled bet.
        bet: usize,
    },
    /// The dealer turned over the hole card.
    DealerRevealed {
        /// The dealer's opening hand.
        hand: &'a [Card],
    },
    /// The dealer drew a card.
    DealerDrew {
        /// The card drawn.
        card: Card,
        /// The dealer's hand including `card`.
        hand: &'a [Card],
    },
    /// The round was settled.
    Settled {
        /// The settlement.
        settlement: Settlement,
        /// The balance after the payout.
        balance: usize,
    },
    /// The balance reached zero.
    OutOfMoney,
    /// The session is over.
    Farewell {
        /// The final balance.
        balance: usize,
    },
}

/// The presentation side of a session.
///
/// The session calls these synchronously and blocks until they return.
pub trait Console {
    /// Asks for a bet between 1 and `balance`.
    ///
    /// Returns `None` if the player has left the table. Implementations
    /// re-prompt on bad input themselves; an out-of-range answer is asked
    /// for again.
    fn request_bet(&mut self, balance: usize) -> Option<usize>;

    /// Asks a yes/no question.
    fn ask(&mut self, question: Question) -> bool;

    /// Asks whether to hit or stand on `hand`.
    fn decide(&mut self, hand: &[Card]) -> Decision;

    /// Shows an event to the player.
    fn notify(&mut self, event: &Event<'_>);
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player chose to stop.
    Quit,
    /// The balance reached zero.
    OutOfMoney,
}

/// Summary returned when a session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Why the session ended.
    pub end: SessionEnd,
    /// Number of rounds settled.
    pub rounds: usize,
    /// Balance at the end of the session.
    pub balance: usize,
}

/// A run of rounds against one balance.
///
/// Each round gets a freshly shuffled deck from the session's seeded RNG;
/// only the balance carries over.
#[derive(Debug)]
pub struct GameSession<C> {
    console: C,
    options: GameOptions,
    balance: usize,
    rounds: usize,
    rng: ChaCha8Rng,
}

impl<C: Console> GameSession<C> {
    /// Creates a session with the given seed.
    #[must_use]
    pub fn new(console: C, options: GameOptions, seed: u64) -> Self {
        Self {
            console,
            balance: options.starting_balance,
            options,
            rounds: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the number of rounds settled so far.
    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    /// Returns the session options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the console.
    #[must_use]
    pub const fn console(&self) -> &C {
        &self.console
    }

    /// Consumes the session and returns the console.
    #[must_use]
    pub fn into_console(self) -> C {
        self.console
    }

    /// Plays rounds until the balance runs out or the player stops.
    ///
    /// # Errors
    ///
    /// Returns an error if a round runs out of cards, which the rules never
    /// allow with a full deck.
    pub fn run(&mut self) -> Result<SessionSummary, RoundError> {
        let end = loop {
            if self.balance == 0 {
                self.console.notify(&Event::OutOfMoney);
                break SessionEnd::OutOfMoney;
            }

            let deck = Deck::shuffled(&mut self.rng);
            if self.play_round(deck)?.is_none() {
                break SessionEnd::Quit;
            }

            if self.balance == 0 {
                self.console.notify(&Event::OutOfMoney);
                break SessionEnd::OutOfMoney;
            }

            if !self.console.ask(Question::PlayAgain) {
                break SessionEnd::Quit;
            }
        };

        self.console.notify(&Event::Farewell {
            balance: self.balance,
        });

        let summary = SessionSummary {
            end,
            rounds: self.rounds,
            balance: self.balance,
        };
        tracing::info!(
            end = ?summary.end,
            rounds = summary.rounds,
            balance = summary.balance,
            "session over"
        );

        Ok(summary)
    }

    fn request_valid_bet(&mut self) -> Option<usize> {
        loop {
            let amount = self.console.request_bet(self.balance)?;
            match validate_bet(amount, self.balance) {
                Ok(bet) => return Some(bet),
                Err(err) => {
                    tracing::warn!(amount, balance = self.balance, %err, "console returned an invalid bet");
                }
            }
        }
    }

    /// Plays one round from `deck`.
    ///
    /// Returns `None` if the player left at the bet prompt; nothing is
    /// deducted in that case.
    ///
    /// # Errors
    ///
    /// Returns an error if `deck` runs out of cards.
    pub fn play_round(&mut self, mut deck: Deck) -> Result<Option<Settlement>, RoundError> {
        let (player, mut dealer) = deal_initial(&mut deck)?;

        let Some(bet) = self.request_valid_bet() else {
            return Ok(None);
        };
        self.balance -= bet;

        self.console.notify(&Event::Dealt {
            player: player.cards(),
            dealer: &dealer.cards()[..1],
        });

        let mut turn = PlayerTurn::new(player, bet, &self.options);

        if turn.can_double(self.balance)
            && self.console.ask(Question::DoubleDown {
                total: turn.hand().value(),
            })
        {
            let card = turn.double_down(&mut deck, &mut self.balance)?;
            self.console.notify(&Event::DoubledDown {
                card,
                hand: turn.hand().cards(),
                bet: turn.bet(),
            });
        }

        while turn.outcome().is_none() {
            match self.console.decide(turn.hand().cards()) {
                Decision::Hit => {
                    let card = turn.hit(&mut deck)?;
                    self.console.notify(&Event::PlayerDrew {
                        card,
                        hand: turn.hand().cards(),
                    });
                }
                Decision::Stand => turn.stand()?,
            }
        }

        if turn.outcome() != Some(TurnOutcome::Bust) {
            self.console.notify(&Event::DealerRevealed {
                hand: dealer.cards(),
            });

            let drawn = play_dealer(&mut dealer, &mut deck, &self.options)?;
            let opening = dealer.len() - drawn.len();
            for (index, &card) in drawn.iter().enumerate() {
                self.console.notify(&Event::DealerDrew {
                    card,
                    hand: &dealer.cards()[..=opening + index],
                });
            }
        }

        let settlement = settle(turn.hand(), &dealer, turn.bet(), &self.options);
        self.balance = self.balance.saturating_add(settlement.payout);
        self.rounds += 1;

        tracing::info!(
            outcome = ?settlement.outcome,
            bet = settlement.bet,
            net = settlement.net,
            balance = self.balance,
            "round settled"
        );

        self.console.notify(&Event::Settled {
            settlement,
            balance: self.balance,
        });

        Ok(Some(settlement))
    }
}
