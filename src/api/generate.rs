use axum::{extract::State, Json};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{ApiError, ToolError};
use crate::models::StoredColor;
use crate::server::AppState;

/// Request body for palette generation
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct GenerateRequest {
    /// Seed for a reproducible palette
    pub seed: Option<u64>,
    /// Fixed base hue in degrees (taken modulo 360)
    pub base_hue: Option<u16>,
}

/// Generated palette
#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateResponse {
    /// Hue of the first color
    pub base_hue: u16,
    pub colors: Vec<StoredColor>,
}

/// Generate a harmonic palette
///
/// Hues are spaced evenly from the base hue; saturation and lightness are
/// drawn at random within the configured ranges.
#[utoipa::path(
    post,
    path = "/api/generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Palette generated", body = GenerateResponse),
    ),
    tag = "Generation"
)]
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let mut rng = match request.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let generated = match request.base_hue {
        Some(base_hue) => state.generator.generate_with_base_hue(base_hue, &mut rng),
        None => state.generator.generate(&mut rng),
    }
    .map_err(ToolError::from)?;

    tracing::debug!(base_hue = generated.base_hue, seed = ?request.seed, "Generated palette");

    Ok(Json(GenerateResponse {
        base_hue: generated.base_hue,
        colors: generated.colors.iter().map(StoredColor::from_generated).collect(),
    }))
}
