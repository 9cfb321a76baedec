//! Round flow: betting, the player and dealer turns, settlement, and the
//! session loop that ties them together.
//!
//! Everything here is free of I/O. A [`GameSession`] asks its [`Console`]
//! for decisions and reports [`Event`]s back to it, so whole sessions can be
//! driven from a script as easily as from a terminal.

mod bet;
mod dealer;
mod session;
pub mod state;
mod turn;

pub use bet::{deal_initial, parse_bet, validate_bet};
pub use dealer::{dealer_should_draw, play_dealer, settle};
pub use session::{Console, Decision, Event, GameSession, Question, SessionEnd, SessionSummary};
pub use state::{TurnOutcome, TurnState};
pub use turn::PlayerTurn;
