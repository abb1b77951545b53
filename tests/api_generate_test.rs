//! Integration tests for /api/generate.

mod common;

use common::{assert_hex_colors, assert_ok, TestApp};
use pretty_assertions::assert_eq;
use serde_json::json;

fn hues(json: &serde_json::Value) -> Vec<u32> {
    json["colors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| {
            let hsl = c["hsl"].as_str().unwrap();
            let inner = hsl.trim_start_matches("hsl(");
            inner.split(',').next().unwrap().trim().parse().unwrap()
        })
        .collect()
}

#[tokio::test]
async fn test_base_hue_zero() {
    let app = TestApp::new();
    let response = app.post_json("/api/generate", &json!({ "seed": 1, "base_hue": 0 })).await;

    assert_ok(&response);
    let json: serde_json::Value = response.json();
    assert_eq!(json["base_hue"], 0);
    assert_eq!(hues(&json), vec![0, 72, 144, 216, 288]);
}

#[tokio::test]
async fn test_colors_have_all_notations() {
    let app = TestApp::new();
    let response = app.post_json("/api/generate", &json!({})).await;

    assert_ok(&response);
    let json: serde_json::Value = response.json();
    let colors = json["colors"].as_array().unwrap();
    assert_eq!(colors.len(), 5);

    let hexes: Vec<serde_json::Value> = colors.iter().map(|c| c["hex"].clone()).collect();
    assert_hex_colors(&hexes);
    for color in colors {
        assert!(color["rgb"].as_str().unwrap().starts_with("rgb("));
        assert!(color["hsl"].as_str().unwrap().starts_with("hsl("));
    }
}

#[tokio::test]
async fn test_hues_evenly_spaced() {
    let app = TestApp::new();
    for seed in 0..10 {
        let response = app.post_json("/api/generate", &json!({ "seed": seed })).await;
        let mut hues = hues(&response.json());
        hues.sort_unstable();
        for pair in hues.windows(2) {
            assert_eq!(pair[1] - pair[0], 72, "seed {seed}");
        }
    }
}

#[tokio::test]
async fn test_same_seed_same_palette() {
    let app = TestApp::new();
    let a = app.post_json("/api/generate", &json!({ "seed": 42 })).await;
    let b = app.post_json("/api/generate", &json!({ "seed": 42 })).await;
    assert_eq!(a.text(), b.text());
}

#[tokio::test]
async fn test_base_hue_wraps() {
    let app = TestApp::new();
    let response = app.post_json("/api/generate", &json!({ "base_hue": 400 })).await;
    let json: serde_json::Value = response.json();
    assert_eq!(json["base_hue"], 40);
    assert_eq!(hues(&json)[0], 40);
}
