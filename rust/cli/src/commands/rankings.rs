use crate::error::CliError;
use pokerschool_engine::hand::{HAND_RANKINGS, description};
use std::io::Write;

pub fn handle_rankings_command(out: &mut dyn Write) -> Result<(), CliError> {
    for category in HAND_RANKINGS {
        writeln!(
            out,
            "{:>2}. {:<16} {}",
            category.score(),
            category.name(),
            description(category)
        )?;
    }
    Ok(())
}
