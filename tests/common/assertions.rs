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

/// Assert an error response with the JSON `{status, error}` body
pub fn assert_api_error(response: &TestResponse, expected: StatusCode) {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(expected.as_u16() as u64),
        "Expected JSON status {}, full response: {}",
        expected.as_u16(),
        serde_json::to_string_pretty(&json).unwrap()
    );
    assert!(json["error"].is_string(), "Expected error message: {json}");
}

/// Assert every entry is a lowercase `#rrggbb` string
pub fn assert_hex_colors(values: &[serde_json::Value]) {
    for value in values {
        let hex = value.as_str().unwrap_or_else(|| panic!("Expected string, got {value}"));
        assert_eq!(hex.len(), 7, "Bad hex {hex}");
        assert!(hex.starts_with('#'), "Bad hex {hex}");
        assert!(
            hex[1..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()),
            "Bad hex {hex}"
        );
    }
}

/// Hex values of the `palette` array of an extraction response
pub fn palette_hexes(json: &serde_json::Value) -> Vec<String> {
    json["palette"]
        .as_array()
        .expect("Expected palette array")
        .iter()
        .map(|c| c["hex"].as_str().unwrap().to_string())
        .collect()
}
