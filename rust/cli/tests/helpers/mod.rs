//! Shared helpers for the CLI integration tests.
//!
//! - `cli_runner`: `CliRunner` runs the built `pokerschool` binary with a clean
//!   `POKERSCHOOL_*` environment and captures exit code, stdout and stderr.
//! - `temp_files`: `TempFileManager` hands out paths inside a temp dir that is
//!   removed on drop.

pub mod cli_runner;
pub mod temp_files;
