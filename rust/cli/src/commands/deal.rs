//! Deal command handler for one practice hand.
//!
//! Deals the player and an opponent two hole cards each plus a five-card
//! board, walks the player's hand through every street with its category and
//! equity estimate, then shows the opponent's cards and the showdown result.
//! The same seed always produces the same output.

use crate::error::CliError;
use crate::formatters::{CardStyle, format_board, format_cards, format_percent};
use pokerschool_engine::equity::STREETS;
use pokerschool_engine::table::{Table, Winner};
use std::io::Write;

/// Handle the deal command.
///
/// # Arguments
///
/// * `seed` - Optional RNG seed; a random one is drawn and printed otherwise
/// * `style` - Card rendering style
/// * `out` - Output stream for command results
pub fn handle_deal_command(
    seed: Option<u64>,
    style: CardStyle,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut table = Table::new(seed);
    let hand = table.deal()?;

    writeln!(out, "Seed: {}", hand.seed)?;
    writeln!(out, "You: {}", format_cards(&hand.player, style))?;
    for street in STREETS {
        let result = hand.player_result(street);
        let shown = if result.is_incomplete() {
            "-".to_string()
        } else {
            result.category.to_string()
        };
        writeln!(
            out,
            "{:<8} {:<16} {:<16} equity {}",
            street.name(),
            format_board(hand.board_at(street), style),
            shown,
            format_percent(hand.player_equity(street))
        )?;
    }

    let showdown = hand.showdown();
    writeln!(out, "Opponent: {}", format_cards(&hand.opponent, style))?;
    let verdict = match showdown.winner {
        Winner::Player => "you win",
        Winner::Opponent => "opponent wins",
        Winner::Split => "split pot",
    };
    writeln!(
        out,
        "Showdown: {} vs {} - {}",
        showdown.player.category, showdown.opponent.category, verdict
    )?;
    Ok(())
}
