use std::path::PathBuf;
use std::process::{Command, Stdio};

use pokerschool_cli::config::{ENV_CONFIG, ENV_LOG, ENV_SEED, ENV_UNICODE};

#[derive(Debug)]
pub struct CliRunner {
    binary_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CliRunner {
    pub fn new() -> Self {
        Self {
            binary_path: PathBuf::from(env!("CARGO_BIN_EXE_pokerschool")),
        }
    }

    pub fn run(&self, args: &[&str]) -> CliResult {
        self.run_with_env(args, &[])
    }

    /// Runs with only the given `POKERSCHOOL_*` variables set; suit letters
    /// are forced unless the caller overrides `POKERSCHOOL_UNICODE`.
    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> CliResult {
        let mut cmd = Command::new(&self.binary_path);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .env_remove("RUST_LOG");
        for key in [ENV_CONFIG, ENV_SEED, ENV_LOG] {
            cmd.env_remove(key);
        }
        cmd.env(ENV_UNICODE, "0");
        for (key, value) in env {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to run pokerschool binary");
        CliResult {
            exit_code: output.status.code().unwrap_or(1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
