//! # Pokerschool CLI Library
//!
//! Command-line front end for the pokerschool engine: hand evaluation,
//! equity estimates, pot odds, the ranking reference and practice deals.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = pokerschool_cli::run(["pokerschool", "odds", "--pot", "100", "--call", "20"], &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Pot odds: 16.7%"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `eval`: Evaluate up to seven cards
//! - `equity`: Estimate equity from hole cards and board
//! - `odds`: Pot odds for a call
//! - `rankings`: Hand categories with descriptions
//! - `deal`: Deal and walk through a practice hand
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;

use cli::{Commands, PokerschoolCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_equity_command, handle_eval_command,
    handle_odds_command, handle_rankings_command,
};
use formatters::CardStyle;

pub use error::CliError;

const COMMANDS: &[&str] = &["eval", "equity", "odds", "rankings", "deal", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses `args`, resolves configuration, installs the stderr log subscriber
/// and dispatches to the subcommand handler.
///
/// # Returns
///
/// Exit code: `0` for success (including `--help` and `--version`), `2` for
/// usage, configuration and command errors.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match PokerschoolCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = write_usage(err, &e.to_string());
                    exit_code::ERROR
                }
            };
        }
    };

    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            let _ = ui::write_error(err, &CliError::from(e).to_string());
            return exit_code::ERROR;
        }
    };
    logging::init_logging(&resolved.config.log_level);
    tracing::debug!(command = ?cli.cmd, "dispatching");

    match dispatch(cli.cmd, &resolved, out, err) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::warn!(error = %e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn dispatch(
    cmd: Commands,
    resolved: &config::ConfigResolved,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let style = CardStyle::from_unicode_flag(resolved.config.unicode);
    match cmd {
        Commands::Eval { cards, log } => {
            handle_eval_command(&cards, log.as_deref(), style, out, err)
        }
        Commands::Equity { hole, board, log } => {
            handle_equity_command(&hole, &board, log.as_deref(), style, out)
        }
        Commands::Odds { pot, call } => handle_odds_command(pot, call, out),
        Commands::Rankings => handle_rankings_command(out),
        Commands::Deal { seed } => handle_deal_command(seed.or(resolved.config.seed), style, out),
        Commands::Cfg => handle_cfg_command(resolved, out),
    }
}

fn write_usage(err: &mut dyn Write, clap_message: &str) -> std::io::Result<()> {
    writeln!(err, "{}", clap_message)?;
    writeln!(err)?;
    writeln!(err, "Pokerschool CLI")?;
    writeln!(err, "Usage: pokerschool <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in COMMANDS {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: pokerschool --help")
}
