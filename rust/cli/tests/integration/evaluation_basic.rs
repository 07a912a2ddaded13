// E-series: eval, equity and odds through the binary

use crate::helpers::cli_runner::CliRunner;
use crate::helpers::temp_files::TempFileManager;
use serde_json::Value;

#[test]
fn e1_eval_prints_category_score_and_description() {
    let res = CliRunner::new().run(&["eval", "Ah", "Ad", "Ac", "Kd", "Ks"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("Cards: Ah Ad Ac Kd Ks"));
    assert!(res.stdout.contains("Hand: Full House"));
    assert!(res.stdout.contains("Score: 7"));
    assert!(res.stdout.contains("About: Three of a kind plus a pair."));
}

#[test]
fn e2_eval_accepts_suit_symbols_and_wheel() {
    let res = CliRunner::new().run(&["eval", "A♠ 2♥ 3♦ 4♣ 5♠"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Hand: Straight"));
}

#[test]
fn e3_eval_unicode_output_when_enabled() {
    let res = CliRunner::new().run_with_env(
        &["eval", "As", "Ks", "Qs", "Js", "10s"],
        &[("POKERSCHOOL_UNICODE", "1")],
    );
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Cards: A♠ K♠ Q♠ J♠ 10♠"));
    assert!(res.stdout.contains("Hand: Royal Flush"));
}

#[test]
fn e4_eval_errors_exit_two_with_message() {
    let cli = CliRunner::new();

    let res = cli.run(&["eval", "As", "Zz"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Error: Invalid card"), "{}", res.stderr);

    let res = cli.run(&["eval", "As", "As", "Kd", "Qc", "Jh"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Error: Duplicate card"), "{}", res.stderr);

    let res = cli.run(&["eval", "2c 3c 4c 5c 6c 7c 8c 9c"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Error:"));
}

#[test]
fn e5_eval_incomplete_hand_warns() {
    let res = CliRunner::new().run(&["eval", "As", "Ad"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Hand: High Card"));
    assert!(res.stdout.contains("Score: 0"));
    assert!(res.stderr.contains("WARNING:"));
}

#[test]
fn e6_eval_log_appends_jsonl_records() {
    let tfm = TempFileManager::new().unwrap();
    let log = tfm.path("logs/evals.jsonl");
    let log_str = log.to_string_lossy().into_owned();
    let cli = CliRunner::new();

    let r1 = cli.run(&["eval", "As Ks Qs Js Ts", "--log", &log_str]);
    let r2 = cli.run(&[
        "equity", "--hole", "As Ah", "--board", "2d 7c 9s", "--log", &log_str,
    ]);
    assert_eq!(r1.exit_code, 0, "stderr={}", r1.stderr);
    assert_eq!(r2.exit_code, 0, "stderr={}", r2.stderr);

    let content = std::fs::read_to_string(&log).unwrap();
    let records: Vec<Value> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0]["category"], "RoyalFlush");
    assert_eq!(records[0]["score"], 10);
    assert!(records[0]["equity"].is_null());
    assert_eq!(records[0]["cards"].as_array().unwrap().len(), 5);
    assert!(records[0]["ts"].is_string());

    assert_eq!(records[1]["category"], "OnePair");
    let eq = records[1]["equity"].as_f64().unwrap();
    assert!((eq - 0.32).abs() < 1e-9);
    let first = records[0]["id"].as_str().unwrap();
    let second = records[1]["id"].as_str().unwrap();
    assert_eq!(first.len(), 15);
    assert!(first.ends_with("-000001"), "{first}");
    assert!(second.ends_with("-000002"), "{second}");
    assert_eq!(&first[..9], &second[..9]);
}

#[test]
fn e7_equity_by_street() {
    let cli = CliRunner::new();

    let pre = cli.run(&["equity", "--hole", "As Kd"]);
    assert_eq!(pre.exit_code, 0);
    assert!(pre.stdout.contains("Street: preflop"));
    assert!(pre.stdout.contains("Equity: 25.0%"));

    let turn = cli.run(&["equity", "--hole", "As Ad", "--board", "Ac Kd Ks 2h"]);
    assert_eq!(turn.exit_code, 0);
    assert!(turn.stdout.contains("Street: turn"));
    assert!(turn.stdout.contains("Hand: Full House"));
    // 7/10 * 0.7 + 0.15
    assert!(turn.stdout.contains("Equity: 64.0%"));

    let bad = cli.run(&["equity", "--hole", "As Kd", "--board", "2c"]);
    assert_eq!(bad.exit_code, 2);
    assert!(bad.stderr.contains("Error: Invalid input"));
}

#[test]
fn e8_odds_report() {
    let cli = CliRunner::new();

    let res = cli.run(&["odds", "--pot", "100", "--call", "20"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Pot odds: 16.7%"));
    assert!(res.stdout.contains("Ratio: 20:100"));
    assert!(res.stdout.contains("at least 16.7% of the time"));

    let zero = cli.run(&["odds", "--pot", "0", "--call", "0"]);
    assert_eq!(zero.exit_code, 0);
    assert!(zero.stdout.contains("Pot odds: 0.0%"));

    let neg = cli.run(&["odds", "--pot", "-5", "--call", "10"]);
    assert_eq!(neg.exit_code, 2);
    assert!(neg.stderr.contains("Error: Invalid input"));
}
