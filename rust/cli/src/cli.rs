//! Command-line argument definitions.

use clap::{Parser, Subcommand};

/// Poker study tools: hand evaluation, equity, pot odds and practice deals.
#[derive(Parser, Debug)]
#[command(name = "pokerschool", version)]
pub struct PokerschoolCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate up to seven cards (e.g. `eval As Ks Qs Js Ts`)
    Eval {
        /// Cards such as `A♠`, `As`, `10h`; commas or spaces separate them
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
        /// Append the result to a JSONL file
        #[arg(long)]
        log: Option<String>,
    },
    /// Estimate equity for two hole cards and an optional board
    Equity {
        /// Exactly two hole cards, e.g. "As Kd"
        #[arg(long)]
        hole: String,
        /// Flop, turn or river board (0, 3, 4 or 5 cards)
        #[arg(long, default_value = "")]
        board: String,
        /// Append the result to a JSONL file
        #[arg(long)]
        log: Option<String>,
    },
    /// Pot odds for calling a bet
    Odds {
        /// Chips already in the pot
        #[arg(long, allow_negative_numbers = true)]
        pot: f64,
        /// Chips needed to call
        #[arg(long, allow_negative_numbers = true)]
        call: f64,
    },
    /// List hand categories from strongest to weakest
    Rankings,
    /// Deal a practice hand and walk it street by street
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}
