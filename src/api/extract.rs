use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};
use swatch::{Extraction, Rgb};
use utoipa::ToSchema;

use super::headers::{HeaderMapExt, SESSION_ID};
use crate::error::ApiError;
use crate::server::AppState;

/// Query parameters for /api/extract
#[derive(Debug, Default, Deserialize)]
pub struct ExtractQuery {
    /// Palette size (1-8)
    pub count: Option<usize>,
    /// Sample every Nth pixel
    pub quality: Option<usize>,
}

/// A color as hex and channel values
#[derive(Debug, Serialize, ToSchema)]
pub struct ColorJson {
    /// `#rrggbb`
    pub hex: String,
    /// `[r, g, b]`
    pub rgb: [u8; 3],
}

impl From<Rgb> for ColorJson {
    fn from(color: Rgb) -> Self {
        Self {
            hex: color.to_hex(),
            rgb: color.to_bytes(),
        }
    }
}

/// Extraction result
#[derive(Debug, Serialize, ToSchema)]
pub struct ExtractResponse {
    pub dominant: ColorJson,
    /// Ranked palette, dominant first
    pub palette: Vec<ColorJson>,
    /// True when a newer upload in the same session started before this one
    /// finished; the session keeps the newer result
    pub stale: bool,
}

impl ExtractResponse {
    fn new(extraction: &Extraction, stale: bool) -> Self {
        Self {
            dominant: extraction.dominant.into(),
            palette: extraction.palette.iter().map(|&c| c.into()).collect(),
            stale,
        }
    }
}

/// Extract a palette from an uploaded image
///
/// The body is the raw image file (PNG, JPEG, GIF, WebP or BMP). With a
/// `Session-Id` header, the result is also kept as the session's latest
/// extraction unless a newer upload for the same session started first.
#[utoipa::path(
    post,
    path = "/api/extract",
    request_body(content = Vec<u8>, content_type = "application/octet-stream", description = "Image file"),
    responses(
        (status = 200, description = "Palette extracted", body = ExtractResponse),
        (status = 400, description = "Invalid parameters"),
        (status = 413, description = "Image too large"),
        (status = 422, description = "Image could not be decoded or has no pixels"),
    ),
    params(
        ("count" = Option<usize>, Query, description = "Palette size, 1-8 (default 8)"),
        ("quality" = Option<usize>, Query, description = "Sample every Nth pixel (default 10)"),
        ("Session-Id" = Option<String>, Header, description = "Client session for latest-result tracking"),
    ),
    tag = "Extraction"
)]
pub async fn handle_extract(
    State(state): State<AppState>,
    query: Result<Query<ExtractQuery>, axum::extract::rejection::QueryRejection>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ExtractResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let body = body.map_err(|e| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(format!(
                "upload exceeds {} bytes",
                state.extractor.config().max_upload_bytes
            ))
        } else {
            ApiError::BadRequest(e.body_text())
        }
    })?;

    let options = state.extractor.options(query.count, query.quality);
    let session_id = headers.get_nonblank(SESSION_ID).map(str::to_string);

    tracing::info!(
        bytes = body.len(),
        count = options.max_colors,
        quality = options.quality,
        session = session_id.as_deref().unwrap_or("-"),
        "Extract request received"
    );

    let Some(session_id) = session_id else {
        let extraction = state.extractor.extract(body.to_vec(), options).await?;
        return Ok(Json(ExtractResponse::new(&extraction, false)));
    };

    let guard = state.sessions.session(&session_id).await;
    let token = guard.begin().await;
    let extraction = state.extractor.extract(body.to_vec(), options).await?;
    let stale = !guard.commit(token, extraction.clone()).await;
    if stale {
        tracing::debug!(session = %session_id, token = token.value(), "Dropped stale extraction");
    }

    Ok(Json(ExtractResponse::new(&extraction, stale)))
}

/// Latest extraction committed for a session
#[utoipa::path(
    get,
    path = "/api/sessions/{id}/extraction",
    responses(
        (status = 200, description = "Latest extraction", body = ExtractResponse),
        (status = 404, description = "No extraction for this session"),
    ),
    params(
        ("id" = String, Path, description = "Session id sent as Session-Id on upload"),
    ),
    tag = "Extraction"
)]
pub async fn handle_session_extraction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ExtractResponse>, ApiError> {
    let extraction = state
        .sessions
        .latest(&id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("no extraction for session {id}")))?;
    Ok(Json(ExtractResponse::new(&extraction, false)))
}
