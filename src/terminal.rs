//! Line-oriented text front-end.
//!
//! [`Terminal`] implements [`Console`] over any reader/writer pair. Prompts
//! and messages go to the writer; each answer is one line from the reader.
//! Write errors are ignored, the same as a closed stdout in an interactive
//! game.

use std::io::{BufRead, Write};

use crate::card::Card;
use crate::game::{Console, Decision, Event, Question};
use crate::hand::hand_value;
use crate::result::HandOutcome;

/// A [`Console`] reading answers from `R` and writing to `W`.
#[derive(Debug)]
pub struct Terminal<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Creates a terminal with colored suits.
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            color: true,
        }
    }

    /// Sets whether suits are colored with ANSI escapes.
    #[must_use]
    pub const fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Consumes the terminal and returns the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn say(&mut self, text: &str) {
        let _ = writeln!(self.output, "{text}");
    }

    /// Prints `prompt` and reads one trimmed, lowercased line.
    ///
    /// Returns `None` once the input is closed.
    fn prompt_line(&mut self, prompt: &str) -> Option<String> {
        let _ = write!(self.output, "{prompt}");
        let _ = self.output.flush();

        let mut input = String::new();
        match self.input.read_line(&mut input) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(input.trim().to_lowercase()),
        }
    }

    fn format_card(&self, card: &Card) -> String {
        if !self.color {
            return card.to_string();
        }
        let code = if card.suit.is_red() { "31" } else { "30" };
        format!(
            "{}\u{1b}[{code}m{}\u{1b}[0m",
            card.rank_label(),
            card.suit.symbol()
        )
    }

    fn print_hand(&mut self, cards: &[Card], title: &str) {
        let shown = cards
            .iter()
            .map(|card| self.format_card(card))
            .collect::<Vec<_>>()
            .join(" ");
        let total = hand_value(cards);
        self.say(&format!("{title}: [{shown}] Total: {total}"));
    }

    fn report_settlement(&mut self, outcome: HandOutcome, bet: usize, payout: usize, balance: usize) {
        match outcome {
            HandOutcome::Blackjack => {
                self.say("Blackjack! 🃏");
                self.say(&format!("You win ${payout}!"));
            }
            HandOutcome::Win => {
                self.say(&format!("You won ${bet}! Your balance is now ${balance}. 🎉"));
            }
            HandOutcome::Lose => {
                self.say(&format!("You lost ${bet}. Your balance is now ${balance}. 😭"));
            }
            HandOutcome::Push => self.say("It's a push! 😐"),
            HandOutcome::Bust => {
                self.say(&format!("You bust! 😢 Your balance is now ${balance}."));
            }
        }
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn request_bet(&mut self, balance: usize) -> Option<usize> {
        loop {
            let line = self.prompt_line(&format!(
                "\nYou have ${balance}. How much do you want to bet? $"
            ))?;
            match crate::game::parse_bet(&line, balance) {
                Ok(bet) => return Some(bet),
                Err(err) => self.say(&err.to_string()),
            }
        }
    }

    fn ask(&mut self, question: Question) -> bool {
        let prompt = match question {
            Question::DoubleDown { total } => {
                format!("You have {total}. Do you want to double down? (y/n): ")
            }
            Question::PlayAgain => "Play again? (y/n): ".to_string(),
        };
        self.prompt_line(&prompt)
            .is_some_and(|answer| answer == "y" || answer == "yes")
    }

    fn decide(&mut self, _hand: &[Card]) -> Decision {
        loop {
            let Some(action) = self.prompt_line("\nDo you want to (h)it or (s)tand? ") else {
                return Decision::Stand;
            };
            match action.as_str() {
                "h" | "hit" => return Decision::Hit,
                "s" | "stand" => return Decision::Stand,
                _ => {}
            }
        }
    }

    fn notify(&mut self, event: &Event<'_>) {
        match *event {
            Event::Dealt { player, dealer } => {
                self.print_hand(player, "Your hand");
                self.print_hand(dealer, "Dealer's hand");
            }
            Event::PlayerDrew { card, hand } => {
                let shown = self.format_card(&card);
                self.say(&format!("\nYou drew: {shown}"));
                if hand_value(hand) > 21 {
                    self.say("\nYou bust! 😢");
                } else {
                    self.print_hand(hand, "Your hand");
                }
            }
            Event::DoubledDown { hand, .. } => {
                self.print_hand(hand, "Your final hand after doubling down");
            }
            Event::DealerRevealed { hand } => self.print_hand(hand, "Dealer's hand"),
            Event::DealerDrew { card, hand } => {
                let shown = self.format_card(&card);
                self.say(&format!("Dealer draws: {shown}"));
                self.print_hand(hand, "Dealer's hand");
            }
            Event::Settled {
                settlement,
                balance,
            } => self.report_settlement(
                settlement.outcome,
                settlement.bet,
                settlement.payout,
                balance,
            ),
            Event::OutOfMoney => self.say("You're out of money! Game over. 😔"),
            Event::Farewell { .. } => self.say("\nThank you for playing! Goodbye."),
        }
    }
}
