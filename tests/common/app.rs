//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use toolkit::models::AppConfig;
use toolkit::server::{build_router, create_app_state};
use toolkit::services::{InMemoryStore, KeyValueStore, PaletteStore};

/// Test application with router and direct access to services
pub struct TestApp {
    router: axum::Router,
    pub store: Arc<InMemoryStore>,
    pub palettes: Arc<PaletteStore>,
}

impl TestApp {
    /// Create a new test application with default config and an empty
    /// in-memory store
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self::with_store(config, Arc::new(InMemoryStore::new()))
    }

    /// Create a test app over a pre-populated store
    pub fn with_store(config: AppConfig, store: Arc<InMemoryStore>) -> Self {
        let state = create_app_state(config, store.clone()).expect("Failed to create app state");

        // Keep references for test assertions
        let palettes = state.palettes.clone();

        // Build router using shared server module (same as production)
        let router = build_router(state);

        Self {
            router,
            store,
            palettes,
        }
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a DELETE request to the given path
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.request(Request::delete(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> TestResponse {
        let request = Request::post(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.request(request).await
    }

    /// Make a POST request with a raw body and custom headers
    pub async fn post_bytes(&self, path: &str, headers: &[(&str, &str)], body: Vec<u8>) -> TestResponse {
        let mut builder = Request::post(path).header("Content-Type", "application/octet-stream");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        self.request(builder.body(Body::from(body)).unwrap()).await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Save a palette through the API and return its id
    pub async fn save_palette(&self, name: &str, colors: &[&str]) -> String {
        let response = self
            .post_json("/api/palettes", &serde_json::json!({ "name": name, "colors": colors }))
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.text());

        let json: serde_json::Value = response.json();
        json["id"].as_str().unwrap().to_string()
    }

    /// Raw value stored under the palette key
    pub async fn stored_raw(&self) -> Option<String> {
        self.store.get("colorPalettes").await.unwrap()
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// Content-Type header, if any
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get("content-type").and_then(|v| v.to_str().ok())
    }
}
