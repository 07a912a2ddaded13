// C-series: defaults, file, env precedence as reported by `cfg`

use crate::helpers::cli_runner::CliRunner;
use crate::helpers::temp_files::TempFileManager;
use serde_json::Value;

fn cfg_json(env: &[(&str, &str)]) -> Value {
    let res = CliRunner::new().run_with_env(&["cfg"], env);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    serde_json::from_str(&res.stdout).unwrap()
}

#[test]
fn c1_cfg_shows_defaults() {
    let json = cfg_json(&[]);
    assert!(json["seed"]["value"].is_null());
    assert_eq!(json["seed"]["source"], "default");
    assert_eq!(json["log_level"]["value"], "warn");
    assert_eq!(json["log_level"]["source"], "default");
    // runner pins POKERSCHOOL_UNICODE=0
    assert_eq!(json["unicode"]["value"], false);
    assert_eq!(json["unicode"]["source"], "env");
}

#[test]
fn c2_env_overrides_file() {
    let tfm = TempFileManager::new().unwrap();
    let cfg_path = tfm
        .create_file(
            "pokerschool.toml",
            "seed = 456\nunicode = true\nlog_level = \"INFO\"\n",
        )
        .unwrap();
    let cfg_str = cfg_path.to_string_lossy().into_owned();

    let from_file = cfg_json(&[
        ("POKERSCHOOL_CONFIG", &cfg_str),
        ("POKERSCHOOL_UNICODE", ""),
    ]);
    assert_eq!(from_file["seed"]["value"], 456);
    assert_eq!(from_file["seed"]["source"], "file");
    assert_eq!(from_file["unicode"]["value"], true);
    assert_eq!(from_file["unicode"]["source"], "file");
    assert_eq!(from_file["log_level"]["value"], "info");
    assert_eq!(from_file["log_level"]["source"], "file");

    let from_env = cfg_json(&[
        ("POKERSCHOOL_CONFIG", &cfg_str),
        ("POKERSCHOOL_SEED", "123"),
        ("POKERSCHOOL_UNICODE", "off"),
        ("POKERSCHOOL_LOG", "debug"),
    ]);
    assert_eq!(from_env["seed"]["value"], 123);
    assert_eq!(from_env["seed"]["source"], "env");
    assert_eq!(from_env["unicode"]["value"], false);
    assert_eq!(from_env["log_level"]["value"], "debug");
    assert_eq!(from_env["log_level"]["source"], "env");
}

#[test]
fn c3_invalid_config_exits_two() {
    let cli = CliRunner::new();

    let res = cli.run_with_env(&["rankings"], &[("POKERSCHOOL_SEED", "abc")]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Error: Configuration error"), "{}", res.stderr);

    let res = cli.run_with_env(&["cfg"], &[("POKERSCHOOL_LOG", "loud")]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("log_level"));

    let tfm = TempFileManager::new().unwrap();
    let broken = tfm.create_file("broken.toml", "seed = \"x\"\n").unwrap();
    let res = cli.run_with_env(
        &["cfg"],
        &[("POKERSCHOOL_CONFIG", broken.to_string_lossy().as_ref())],
    );
    assert_eq!(res.exit_code, 2);

    let missing = tfm.path("nope.toml");
    let res = cli.run_with_env(
        &["cfg"],
        &[("POKERSCHOOL_CONFIG", missing.to_string_lossy().as_ref())],
    );
    assert_eq!(res.exit_code, 2);
}

#[test]
fn c4_debug_log_level_writes_events_to_stderr_only() {
    let res = CliRunner::new().run_with_env(
        &["eval", "As", "Ks", "Qs", "Js", "Ts"],
        &[("POKERSCHOOL_LOG", "debug")],
    );
    assert_eq!(res.exit_code, 0);
    assert!(res.stderr.contains("hand evaluated"), "{}", res.stderr);
    assert!(!res.stdout.contains("hand evaluated"));
}
