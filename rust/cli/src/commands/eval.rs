//! Hand evaluation command.
//!
//! Prints the category, score and reference description for up to seven
//! cards. With fewer than five cards the engine returns a placeholder
//! (High Card, score 0); the command says so on stderr.

use super::{append_record, parse_card_args};
use crate::error::CliError;
use crate::formatters::{CardStyle, format_cards};
use crate::ui;
use pokerschool_engine::hand::{description, evaluate_checked};
use std::io::Write;

pub fn handle_eval_command(
    cards: &[String],
    log: Option<&str>,
    style: CardStyle,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cards = parse_card_args(cards)?;
    let result = evaluate_checked(&cards)?;

    writeln!(out, "Cards: {}", format_cards(&cards, style))?;
    writeln!(out, "Hand: {}", result.category)?;
    writeln!(out, "Score: {}", result.score)?;
    if result.is_incomplete() {
        ui::display_warning(
            err,
            "fewer than 5 cards; the result is a placeholder, not an evaluation",
        )?;
    } else {
        writeln!(out, "About: {}", description(result.category))?;
    }

    if let Some(path) = log {
        append_record(path, cards, result, None)?;
    }
    Ok(())
}
