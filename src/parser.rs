//! Input parsing and validation.
//!
//! Turns the free-text inputs collected by a front end (the history field
//! and the bet field) into typed values.

use tracing::debug;

use crate::types::{History, Number, PredictError, DEFAULT_BET};

/// Parse a comma-separated history, most recent last.
///
/// Blank input yields an empty history; the caller decides whether that is
/// an error (see [`require_history`]). Every token is parsed before any
/// range check, so a malformed token wins over an out-of-range one.
pub fn parse_history(text: &str) -> Result<History, PredictError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let values = text
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(parse_token)
        .collect::<Result<Vec<i32>, _>>()?;

    let history = values
        .into_iter()
        .map(|value| Number::new(i64::from(value)))
        .collect::<Result<History, _>>()?;

    debug!(count = history.len(), "History parsed");
    Ok(history)
}

/// Like [`parse_history`] but rejects an empty result.
pub fn require_history(text: &str) -> Result<History, PredictError> {
    let history = parse_history(text)?;
    if history.is_empty() {
        return Err(PredictError::EmptyHistory);
    }
    Ok(history)
}

/// Validate a history supplied as raw integers (e.g. a JSON array).
pub fn validate_history(values: &[i64]) -> Result<History, PredictError> {
    values.iter().map(|&value| Number::new(value)).collect()
}

/// Parse a bet field. Non-digit characters are dropped; empty input, or a
/// value beyond `i32::MAX`, falls back to [`DEFAULT_BET`].
pub fn parse_bet(text: &str) -> u32 {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits
        .parse::<i32>()
        .ok()
        .and_then(|value| u32::try_from(value).ok())
        .unwrap_or(DEFAULT_BET)
}

/// A bet given as a number rather than text. Same domain as [`parse_bet`].
pub fn bet_from_amount(amount: u64) -> u32 {
    i32::try_from(amount)
        .ok()
        .and_then(|value| u32::try_from(value).ok())
        .unwrap_or(DEFAULT_BET)
}

fn parse_token(token: &str) -> Result<i32, PredictError> {
    token.parse::<i32>().map_err(|_| PredictError::Parse {
        token: token.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
