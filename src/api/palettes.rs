use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use swatch::Palette;
use utoipa::ToSchema;

use crate::error::{ApiError, ToolError};
use crate::models::{SavedPalette, StoredColor};
use crate::server::AppState;

/// Request body for saving a palette
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePaletteRequest {
    /// Display name, must not be blank
    pub name: String,
    /// Hex colors in palette order (1-8)
    pub colors: Vec<String>,
}

/// List saved palettes, oldest first
#[utoipa::path(
    get,
    path = "/api/palettes",
    responses(
        (status = 200, description = "Saved palettes", body = Vec<SavedPalette>),
    ),
    tag = "Palettes"
)]
pub async fn handle_list_palettes(State(state): State<AppState>) -> Result<Json<Vec<SavedPalette>>, ApiError> {
    Ok(Json(state.palettes.list().await?))
}

/// Save a palette
#[utoipa::path(
    post,
    path = "/api/palettes",
    request_body = CreatePaletteRequest,
    responses(
        (status = 201, description = "Palette saved", body = SavedPalette),
        (status = 400, description = "Blank name or invalid colors"),
    ),
    tag = "Palettes"
)]
pub async fn handle_create_palette(
    State(state): State<AppState>,
    Json(request): Json<CreatePaletteRequest>,
) -> Result<(StatusCode, Json<SavedPalette>), ApiError> {
    let palette = Palette::from_hex_strings(&request.colors).map_err(ToolError::from)?;
    let colors = palette.iter().map(|&c| StoredColor::from_rgb(c)).collect();

    let saved = state.palettes.save(&request.name, colors).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// Get one saved palette
#[utoipa::path(
    get,
    path = "/api/palettes/{id}",
    responses(
        (status = 200, description = "Saved palette", body = SavedPalette),
        (status = 404, description = "Unknown id"),
    ),
    params(
        ("id" = String, Path, description = "Palette id"),
    ),
    tag = "Palettes"
)]
pub async fn handle_get_palette(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SavedPalette>, ApiError> {
    state
        .palettes
        .get(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("palette {id}")))
}

/// Delete a saved palette
#[utoipa::path(
    delete,
    path = "/api/palettes/{id}",
    responses(
        (status = 204, description = "Palette deleted"),
        (status = 404, description = "Unknown id"),
    ),
    params(
        ("id" = String, Path, description = "Palette id"),
    ),
    tag = "Palettes"
)]
pub async fn handle_delete_palette(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state.palettes.delete(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("palette {id}")))
    }
}
