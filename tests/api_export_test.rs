//! Integration tests for /api/export.

mod common;

use axum::http::StatusCode;
use common::{assert_api_error, assert_ok, TestApp};
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn test_export_hex() {
    let app = TestApp::new();
    let response = app
        .post_json("/api/export", &json!({ "colors": ["#AAAAAA", "bbb"], "format": "hex" }))
        .await;

    assert_ok(&response);
    assert_eq!(response.text(), "#aaaaaa, #bbbbbb");
    assert!(response.content_type().unwrap().starts_with("text/plain"));
}

#[tokio::test]
async fn test_export_css() {
    let app = TestApp::new();
    let response = app
        .post_json("/api/export", &json!({ "colors": ["#aaaaaa", "#bbbbbb"], "format": "css" }))
        .await;

    assert_ok(&response);
    assert_eq!(response.text(), "--color-1: #aaaaaa;\n--color-2: #bbbbbb;");
}

#[tokio::test]
async fn test_export_design_token_and_alias() {
    let app = TestApp::new();
    for format in ["design-token", "tailwind"] {
        let response = app
            .post_json("/api/export", &json!({ "colors": ["#aaaaaa", "#bbbbbb"], "format": format }))
            .await;
        assert_ok(&response);
        assert_eq!(response.text(), "{\n'1': '#aaaaaa',\n'2': '#bbbbbb'\n}");
    }
}

#[tokio::test]
async fn test_format_defaults_to_hex() {
    let app = TestApp::new();
    let response = app.post_json("/api/export", &json!({ "colors": ["#010203"] })).await;
    assert_ok(&response);
    assert_eq!(response.text(), "#010203");
}

#[tokio::test]
async fn test_export_rejects_bad_input() {
    let app = TestApp::new();

    let unknown = app
        .post_json("/api/export", &json!({ "colors": ["#000000"], "format": "scss" }))
        .await;
    assert_api_error(&unknown, StatusCode::BAD_REQUEST);

    let bad_color = app
        .post_json("/api/export", &json!({ "colors": ["#000000", "#xyz"], "format": "hex" }))
        .await;
    assert_api_error(&bad_color, StatusCode::BAD_REQUEST);

    let empty = app.post_json("/api/export", &json!({ "colors": [], "format": "hex" })).await;
    assert_api_error(&empty, StatusCode::BAD_REQUEST);

    let too_many = app
        .post_json("/api/export", &json!({ "colors": vec!["#000000"; 9], "format": "hex" }))
        .await;
    assert_api_error(&too_many, StatusCode::BAD_REQUEST);
}
