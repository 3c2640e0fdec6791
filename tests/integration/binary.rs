//! The `predictcombo` binary run as a child process.

use std::process::{Command, Output};

/// Run `predictcombo predict` with defaults only (no config file, no logs).
fn predict(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_predictcombo"))
        .arg("--config")
        .arg("/nonexistent/predictcombo/config.toml")
        .arg("predict")
        .args(args)
        .env("RUST_LOG", "off")
        .env_remove("PREDICTCOMBO_LOG_JSON")
        .output()
        .unwrap()
}

#[test]
fn test_rejected_input_exits_2_with_message() {
    let out = predict(&["--numbers", "64,abc"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
    assert_eq!(String::from_utf8(out.stderr).unwrap(), "Invalid number: \"abc\"\n");
}

#[test]
fn test_empty_history_exits_2() {
    let out = predict(&["--numbers", " , "]);
    assert_eq!(out.status.code(), Some(2));
    assert_eq!(String::from_utf8(out.stderr).unwrap(), "Provide at least one number\n");
}

#[test]
fn test_out_of_range_exits_2() {
    let out = predict(&["--numbers", "12,76"]);
    assert_eq!(out.status.code(), Some(2));
    assert_eq!(String::from_utf8(out.stderr).unwrap(), "Numbers must be 1..75\n");
}

#[test]
fn test_lost_doubles_bet_on_stdout() {
    let out = predict(&["--numbers", "64,18,24,38,75", "--bet", "40", "--lost"]);
    assert_eq!(out.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["top_pick"], "U/E");
    assert_eq!(json["backup"], "O/E");
    assert_eq!(json["next_bet"], 80);
}

#[test]
fn test_defaults_without_flags() {
    // No --bet, no --won/--lost: built-in defaults (10, won) apply.
    let out = predict(&["--numbers", "10,40"]);
    assert_eq!(out.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["next_bet"], 10);
    assert_eq!(
        json["explanation"]["bet_reason"],
        "last round won → reset to base (10)"
    );
}
