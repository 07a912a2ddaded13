//! Equity estimate command.

use super::{append_record, parse_card_args};
use crate::error::CliError;
use crate::formatters::{CardStyle, format_board, format_cards, format_percent};
use pokerschool_engine::equity::{Street, estimate_equity};
use pokerschool_engine::hand::evaluate_checked;
use std::io::Write;

/// Handle the equity command.
///
/// Requires exactly two hole cards and a board of 0, 3, 4 or 5 cards, so the
/// street is always one the estimator has coefficients for.
///
/// # Errors
///
/// Returns `CliError::InvalidInput` for wrong card counts and
/// `CliError::Engine` for unparsable or duplicated cards.
pub fn handle_equity_command(
    hole: &str,
    board: &str,
    log: Option<&str>,
    style: CardStyle,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let hole = parse_card_args(&[hole])?;
    let board = parse_card_args(&[board])?;
    if hole.len() != 2 {
        return Err(CliError::InvalidInput(format!(
            "hole needs exactly 2 cards, got {}",
            hole.len()
        )));
    }
    if !matches!(board.len(), 0 | 3 | 4 | 5) {
        return Err(CliError::InvalidInput(format!(
            "board must have 0, 3, 4 or 5 cards, got {}",
            board.len()
        )));
    }

    let all: Vec<_> = hole.iter().chain(&board).copied().collect();
    let result = evaluate_checked(&all)?;
    let street = Street::from_card_count(all.len());
    let equity = estimate_equity(&hole, &board);

    writeln!(out, "Hole: {}", format_cards(&hole, style))?;
    writeln!(out, "Board: {}", format_board(&board, style))?;
    writeln!(out, "Street: {}", street.name())?;
    if !result.is_incomplete() {
        writeln!(out, "Hand: {}", result.category)?;
    }
    writeln!(out, "Equity: {}", format_percent(equity))?;

    if let Some(path) = log {
        append_record(path, all, result, Some(equity))?;
    }
    Ok(())
}
