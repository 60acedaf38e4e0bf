//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert JSON response has expected status field
pub fn assert_json_status(response: &TestResponse, expected_status: u16) {
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(expected_status as u64),
        "Expected JSON status {}, got {:?}. Full response: {}",
        expected_status,
        json["status"],
        serde_json::to_string_pretty(&json).unwrap()
    );
}

/// Assert an error response: HTTP status, matching JSON status and a message
pub fn assert_api_error(response: &TestResponse, expected: StatusCode) {
    assert_status(response, expected);
    assert_json_status(response, expected.as_u16());
    let json: serde_json::Value = response.json();
    assert!(
        json["error"].as_str().is_some_and(|e| !e.is_empty()),
        "Expected an error message, got {json}"
    );
}

/// Assert the weights of an extract response sum to 1
pub fn assert_weights_normalized(json: &serde_json::Value) {
    let weights: Vec<f64> = json["palette"]
        .as_array()
        .expect("palette array")
        .iter()
        .map(|c| c["weight"].as_f64().expect("weight"))
        .collect();
    let total: f64 = weights.iter().sum();
    assert!((total - 1.0).abs() < 1e-6, "weights sum to {total}: {weights:?}");
}
