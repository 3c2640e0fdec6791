//! Text in, report out: the same path the CLI takes.

use predictcombo::cli::run_predict;
use predictcombo::parser::parse_bet;
use predictcombo::report::PredictionReport;
use predictcombo::types::{BetState, PredictError};

fn run(numbers: &str, bet: &str, last_round_won: bool) -> Result<PredictionReport, PredictError> {
    let bet = BetState {
        current_bet: parse_bet(bet),
        last_round_won,
    };
    run_predict(numbers, bet)
}

#[test]
fn test_reference_scenario_document() {
    let report = run("64, 18, 24, 38, 75", "10", true).unwrap();
    let expected = r#"{
  "top_pick": "U/E",
  "backup": "O/E",
  "next_bet": 10,
  "explanation": {
    "last_number": 75,
    "last_parity": "O",
    "last_range": "O",
    "predicted_parity": "E",
    "predicted_range": "U",
    "range_reason": "last ranges [O, O] → streak → bounce",
    "bet_reason": "last round won → reset to base (10)"
  }
}"#;
    assert_eq!(report.to_pretty_json().unwrap(), expected);
}

#[test]
fn test_losing_streak_across_calls() {
    // Feed each next_bet back in as the current bet, as a player would.
    let mut bet = String::from("10");
    let mut amounts = Vec::new();
    for _ in 0..3 {
        let report = run("10,40", &bet, false).unwrap();
        amounts.push(report.next_bet);
        bet = report.next_bet.to_string();
    }
    assert_eq!(amounts, vec![20, 40, 80]);

    let report = run("10,40", &bet, true).unwrap();
    assert_eq!(report.next_bet, 10);
}

#[test]
fn test_continuation_document() {
    let report = run("10,40", "", true).unwrap();
    assert_eq!(report.top_pick, "O/O");
    assert_eq!(report.backup, "U/O");
    assert_eq!(report.explanation.range_reason, "no streak in [U, O] → continuation");
}

#[test]
fn test_error_messages_are_user_facing() {
    assert_eq!(run("", "10", true).unwrap_err().to_string(), "Provide at least one number");
    assert_eq!(run("64,abc", "10", true).unwrap_err().to_string(), "Invalid number: \"abc\"");
    assert_eq!(run("0,76", "10", true).unwrap_err().to_string(), "Numbers must be 1..75");
}

#[test]
fn test_identical_inputs_identical_output() {
    let a = run("3,44,61", "25", false).unwrap().to_pretty_json().unwrap();
    let b = run("3,44,61", "25", false).unwrap().to_pretty_json().unwrap();
    assert_eq!(a, b);
}
