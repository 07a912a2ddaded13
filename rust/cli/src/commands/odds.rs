//! Pot odds command.

use crate::error::CliError;
use crate::formatters::format_percent;
use pokerschool_engine::equity::{pot_odds, pot_odds_ratio};
use std::io::Write;

pub fn handle_odds_command(pot: f64, call: f64, out: &mut dyn Write) -> Result<(), CliError> {
    if !pot.is_finite() || !call.is_finite() || pot < 0.0 || call < 0.0 {
        return Err(CliError::InvalidInput(
            "pot and call must be non-negative numbers".into(),
        ));
    }
    let odds = pot_odds(pot, call);
    let pct = format_percent(odds);
    writeln!(out, "Pot odds: {}", pct)?;
    writeln!(out, "Ratio: {}", pot_odds_ratio(pot, call))?;
    writeln!(
        out,
        "Tip: You need to win at least {} of the time to make calling profitable.",
        pct
    )?;
    Ok(())
}
