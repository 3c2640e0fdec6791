//! API route handlers.
//!
//! All endpoints return JSON. Shared state is the immutable set of bet
//! defaults, held in an `Arc`. Every rejected request, including one whose
//! body cannot be decoded, answers `400 {"error": ...}`.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

use crate::parser::{bet_from_amount, parse_bet, parse_history, validate_history};
use crate::report::PredictionReport;
use crate::strategy::predict;
use crate::types::{BetState, History, PredictError, DEFAULT_BET};

// ---------------------------------------------------------------------------
// Shared state
// ---------------------------------------------------------------------------

pub struct ApiState {
    /// Applied when a request omits `current_bet` / `last_round_won`.
    pub defaults: BetState,
}

impl ApiState {
    pub fn new(defaults: BetState) -> Self {
        Self { defaults }
    }
}

pub type AppState = Arc<ApiState>;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// History as typed into a form, or as a JSON array. Array elements are
/// checked one by one so a bad element surfaces as a parse error.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumbersInput {
    Text(String),
    List(Vec<Value>),
}

impl Default for NumbersInput {
    fn default() -> Self {
        NumbersInput::Text(String::new())
    }
}

/// Bet as a number, as the raw text of a bet field, or anything else
/// (negative, fractional, wrong type), which falls back to [`DEFAULT_BET`].
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BetInput {
    Amount(u64),
    Text(String),
    Other(Value),
}

#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    /// Missing means empty, which is rejected by the predictor.
    #[serde(default)]
    pub numbers: NumbersInput,
    #[serde(default)]
    pub current_bet: Option<BetInput>,
    #[serde(default)]
    pub last_round_won: Option<bool>,
}

impl PredictRequest {
    fn history(&self) -> Result<History, PredictError> {
        match &self.numbers {
            NumbersInput::Text(text) => parse_history(text),
            NumbersInput::List(values) => {
                // Parse every element before range checks, as the text path does.
                let parsed = values
                    .iter()
                    .map(list_element)
                    .collect::<Result<Vec<i64>, _>>()?;
                validate_history(&parsed)
            }
        }
    }

    fn bet_state(&self, defaults: BetState) -> BetState {
        let current_bet = match &self.current_bet {
            Some(BetInput::Amount(amount)) => bet_from_amount(*amount),
            Some(BetInput::Text(text)) => parse_bet(text),
            Some(BetInput::Other(_)) => DEFAULT_BET,
            None => defaults.current_bet,
        };
        BetState {
            current_bet,
            last_round_won: self.last_round_won.unwrap_or(defaults.last_round_won),
        }
    }
}

/// One array element: an integer, or a string holding one. Same 32-bit
/// domain as the text parser.
fn list_element(value: &Value) -> Result<i64, PredictError> {
    let parsed = match value {
        Value::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    };
    parsed.map(i64::from).ok_or_else(|| PredictError::Parse {
        token: match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        },
    })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// A rejected request, rendered as `400 {"error": ...}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Predict(#[from] PredictError),

    /// The body was not a decodable prediction request.
    #[error("{0}")]
    Body(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Body(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

/// POST /api/predict
pub async fn post_predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictionReport>, ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Request body rejected");
        ApiError::from(rejection)
    })?;

    let bet = req.bet_state(state.defaults);
    let prediction = req
        .history()
        .and_then(|history| predict(&history, bet))
        .map_err(|err| {
            warn!(error = %err, "Prediction rejected");
            ApiError::Predict(err)
        })?;

    let report = PredictionReport::from(&prediction);
    info!(
        top_pick = %report.top_pick,
        next_bet = report.next_bet,
        "Prediction served"
    );
    Ok(Json(report))
}

/// GET /health
pub async fn health() -> StatusCode {
    StatusCode::OK
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
