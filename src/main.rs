//! Interactive blackjack at the terminal.

use std::io;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use bjsolo::terminal::Terminal;
use bjsolo::{DoubleOption, GameOptions, GameSession};
use clap::builder::RangedU64ValueParser;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Largest starting balance accepted on the command line.
const MAX_BALANCE: u64 = 1_000_000_000;

fn parse_ratio(input: &str) -> Result<f64, String> {
    let ratio: f64 = input
        .parse()
        .map_err(|_| format!("`{input}` is not a number"))?;
    if !ratio.is_finite() || ratio < 0.0 {
        return Err(format!("`{input}` must be a finite ratio of 0 or more"));
    }
    Ok(ratio)
}

#[derive(Parser)]
#[command(
    name = "bjsolo",
    version,
    about = "Play blackjack against a dealer who stands on 17"
)]
struct Args {
    /// Shuffle seed; derived from the clock when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Starting balance
    #[arg(
        long,
        default_value_t = 1000,
        value_parser = RangedU64ValueParser::<usize>::new().range(0..=MAX_BALANCE)
    )]
    balance: usize,

    /// Blackjack winnings ratio on top of the returned stake
    #[arg(long, default_value_t = 1.5, value_parser = parse_ratio)]
    blackjack_pays: f64,

    /// Dealer hits soft 17
    #[arg(long)]
    hit_soft_17: bool,

    /// Totals on which double down is offered
    #[arg(long, value_enum, default_value_t = DoubleArg::TenOrEleven)]
    double: DoubleArg,

    /// Print suits without ANSI colors
    #[arg(long)]
    no_color: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum DoubleArg {
    Any,
    #[value(name = "nine-through-11")]
    NineThrough11,
    TenOrEleven,
    None,
}

impl From<DoubleArg> for DoubleOption {
    fn from(arg: DoubleArg) -> Self {
        match arg {
            DoubleArg::Any => Self::Any,
            DoubleArg::NineThrough11 => Self::NineThrough11,
            DoubleArg::TenOrEleven => Self::TenOrEleven,
            DoubleArg::None => Self::None,
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    tracing::debug!(seed, "starting session");

    let options = GameOptions::default()
        .with_starting_balance(args.balance)
        .with_blackjack_pays(args.blackjack_pays)
        .with_stand_on_soft_17(!args.hit_soft_17)
        .with_double(args.double.into());

    let terminal = Terminal::new(io::stdin().lock(), io::stdout().lock()).with_color(!args.no_color);
    let mut session = GameSession::new(terminal, options, seed);

    match session.run() {
        Ok(summary) => {
            tracing::debug!(?summary, "exiting");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "session aborted");
            ExitCode::FAILURE
        }
    }
}
