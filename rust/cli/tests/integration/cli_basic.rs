// A-series: help, version, usage errors

use crate::helpers::cli_runner::CliRunner;

const COMMANDS: [&str; 6] = ["eval", "equity", "odds", "rankings", "deal", "cfg"];

#[test]
fn a1_help_lists_all_commands() {
    let res = CliRunner::new().run(&["--help"]);
    assert_eq!(res.exit_code, 0, "--help should exit with code 0");
    for cmd in COMMANDS {
        assert!(res.stdout.contains(cmd), "help should list `{}`", cmd);
    }
}

#[test]
fn a2_version_prints_version_and_exits_zero() {
    let res = CliRunner::new().run(&["--version"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn a3_unknown_subcommand_shows_commands_on_stderr() {
    let res = CliRunner::new().run(&["shuffle"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.is_empty());
    assert!(
        res.stderr.contains("Commands:"),
        "stderr should contain the Commands section\n---stderr---\n{}",
        res.stderr
    );
    for cmd in COMMANDS {
        assert!(res.stderr.contains(&format!("  {}", cmd)));
    }
}

#[test]
fn a4_missing_required_argument_exits_two() {
    let res = CliRunner::new().run(&["eval"]);
    assert_eq!(res.exit_code, 2);
    let res = CliRunner::new().run(&["odds", "--pot", "100"]);
    assert_eq!(res.exit_code, 2);
}

#[test]
fn a5_rankings_strongest_first() {
    let res = CliRunner::new().run(&["rankings"]);
    assert_eq!(res.exit_code, 0);
    let lines: Vec<&str> = res.stdout.lines().collect();
    assert_eq!(lines.len(), 10);
    assert!(lines[0].contains("Royal Flush"));
    assert!(lines[4].contains("Flush"));
    assert!(lines[9].contains("High Card"));
}
