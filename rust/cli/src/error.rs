//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>`; [`crate::run`] turns
//! an error into an `Error: ...` line on stderr and exit code 2.

use pokerschool_engine::errors::EngineError;
use thiserror::Error;

use crate::config::ConfigError;

/// Custom error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid user input or command-line arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Engine rejected the cards (bad text, duplicates, too many)
    #[error("{0}")]
    Engine(#[from] EngineError),
}
