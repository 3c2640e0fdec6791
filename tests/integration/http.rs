//! HTTP front end driven through the router, no socket bound.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use std::sync::Arc;
use tower::ServiceExt;

use predictcombo::api::build_router;
use predictcombo::api::routes::{ApiState, ErrorResponse};
use predictcombo::report::PredictionReport;
use predictcombo::types::BetState;

fn predict_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(defaults: BetState, body: &str) -> (StatusCode, Vec<u8>) {
    let app = build_router(Arc::new(ApiState::new(defaults)));
    let resp = app.oneshot(predict_request(body)).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), 10_000).await.unwrap();
    (status, bytes.to_vec())
}

#[test]
fn test_report_roundtrips_through_http() {
    let (status, body) = tokio_test::block_on(send(
        BetState::default(),
        r#"{"numbers": [64, 18, 24, 38, 75], "current_bet": 80, "last_round_won": true}"#,
    ));
    assert_eq!(status, StatusCode::OK);
    let report: PredictionReport = serde_json::from_slice(&body).unwrap();
    assert_eq!(report.top_pick, "U/E");
    assert_eq!(report.next_bet, 10);
}

#[tokio::test]
async fn test_server_defaults_apply() {
    let defaults = BetState {
        current_bet: 15,
        last_round_won: false,
    };
    let (status, body) = send(defaults, r#"{"numbers": "7"}"#).await;
    assert_eq!(status, StatusCode::OK);
    let report: PredictionReport = serde_json::from_slice(&body).unwrap();
    assert_eq!(report.next_bet, 30);
    assert_eq!(report.explanation.bet_reason, "last round lost → double from 15 to 30");
}

#[tokio::test]
async fn test_range_error_is_bad_request() {
    let (status, body) = send(BetState::default(), r#"{"numbers": "12,76"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let err: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(err.error, "Numbers must be 1..75");
}

async fn error_message(body: &str) -> String {
    let (status, bytes) = send(BetState::default(), body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    let err: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
    err.error
}

#[tokio::test]
async fn test_non_integer_list_element_is_parse_error() {
    assert_eq!(
        error_message(r#"{"numbers": [10, "abc"]}"#).await,
        "Invalid number: \"abc\""
    );
}

#[tokio::test]
async fn test_missing_numbers_is_empty_history() {
    assert_eq!(
        error_message(r#"{"current_bet": 10}"#).await,
        "Provide at least one number"
    );
}

#[tokio::test]
async fn test_unusable_bet_still_predicts() {
    let (status, body) = send(
        BetState::default(),
        r#"{"numbers": "7", "current_bet": -20, "last_round_won": false}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let report: PredictionReport = serde_json::from_slice(&body).unwrap();
    assert_eq!(report.next_bet, 20);
}

#[tokio::test]
async fn test_undecodable_body_is_json_bad_request() {
    // Malformed JSON and a wrongly typed field both come back as 400 {"error": ...}.
    assert!(!error_message(r#"{"numbers": "7""#).await.is_empty());
    assert!(!error_message(r#"{"numbers": "7", "last_round_won": "yes"}"#).await.is_empty());
    assert!(!error_message(r#"{"numbers": 7}"#).await.is_empty());
}
