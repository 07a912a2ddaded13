//! Command handler modules for the pokerschool CLI.
//!
//! Each command lives in its own file and exposes
//! `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`, with output
//! streams passed in as `&mut dyn Write` so tests can capture them.

mod cfg;
mod deal;
mod equity;
mod eval;
mod odds;
mod rankings;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use equity::handle_equity_command;
pub use eval::handle_eval_command;
pub use odds::handle_odds_command;
pub use rankings::handle_rankings_command;

use crate::error::CliError;
use pokerschool_engine::cards::{Card, parse_cards};
use pokerschool_engine::hand::EvaluationResult;
use pokerschool_engine::logger::{EvaluationLogger, EvaluationRecord};

/// Parses card arguments; each argument may hold several cards.
fn parse_card_args<S: AsRef<str>>(args: &[S]) -> Result<Vec<Card>, CliError> {
    let mut cards = Vec::new();
    for a in args {
        cards.extend(parse_cards(a.as_ref())?);
    }
    Ok(cards)
}

/// Appends one evaluation to the JSONL file at `path`.
fn append_record(
    path: &str,
    cards: Vec<Card>,
    result: EvaluationResult,
    equity: Option<f64>,
) -> Result<(), CliError> {
    let mut logger = EvaluationLogger::create(path)?;
    let record = EvaluationRecord {
        id: logger.next_id(),
        cards,
        category: result.category,
        score: result.score,
        equity,
        ts: None,
    };
    logger.write(&record)?;
    tracing::info!(path, id = %record.id, "evaluation logged");
    Ok(())
}
