//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use swatch::PaletteGenerator;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::models::AppConfig;
use crate::services::{ExtractionService, ExtractionSessions, KeyValueStore, PaletteStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub extractor: Arc<ExtractionService>,
    pub sessions: Arc<ExtractionSessions>,
    pub generator: Arc<PaletteGenerator>,
    pub palettes: Arc<PaletteStore>,
}

/// Create application state from a configuration and a key-value backend.
pub fn create_app_state(config: AppConfig, store: Arc<dyn KeyValueStore>) -> anyhow::Result<AppState> {
    config
        .extraction
        .quantize_options()
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid extraction config: {e}"))?;
    let generator = PaletteGenerator::new(config.generation.generator_options())
        .map_err(|e| anyhow::anyhow!("Invalid generation config: {e}"))?;

    let extractor = Arc::new(ExtractionService::new(config.extraction.clone()));
    let palettes = Arc::new(PaletteStore::with_key(store, config.storage.key.clone()));

    Ok(AppState {
        config: Arc::new(config),
        extractor,
        sessions: Arc::new(ExtractionSessions::new()),
        generator: Arc::new(generator),
        palettes,
    })
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.extraction.max_upload_bytes;

    Router::new()
        .route(
            "/api/extract",
            post(api::handle_extract).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/sessions/:id/extraction", get(api::handle_session_extraction))
        .route("/api/generate", post(api::handle_generate))
        .route("/api/export", post(api::handle_export))
        .route(
            "/api/palettes",
            get(api::handle_list_palettes).post(api::handle_create_palette),
        )
        .route(
            "/api/palettes/:id",
            get(api::handle_get_palette).delete(api::handle_delete_palette),
        )
        .route("/api/gradient", post(api::handle_gradient))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
