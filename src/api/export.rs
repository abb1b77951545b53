use axum::Json;
use serde::Deserialize;
use swatch::{ExportFormat, Palette};
use utoipa::ToSchema;

use crate::error::{ApiError, ToolError};

/// Request body for palette export
#[derive(Debug, Deserialize, ToSchema)]
pub struct ExportRequest {
    /// Hex colors in palette order
    pub colors: Vec<String>,
    /// `hex`, `css` or `design-token` (alias `tailwind`)
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    ExportFormat::default().to_string()
}

/// Export a palette as text
#[utoipa::path(
    post,
    path = "/api/export",
    request_body = ExportRequest,
    responses(
        (status = 200, description = "Formatted palette", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid color or unknown format"),
    ),
    tag = "Export"
)]
pub async fn handle_export(Json(request): Json<ExportRequest>) -> Result<String, ApiError> {
    let format: ExportFormat = request.format.parse().map_err(ToolError::from)?;
    let palette = Palette::from_hex_strings(&request.colors).map_err(ToolError::from)?;
    tracing::debug!(format = %format, colors = palette.len(), "Exported palette");
    Ok(format.format(&palette))
}
