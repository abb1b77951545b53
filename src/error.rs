use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use swatch::{ExtractError, GenerateError, GradientError, PaletteError, UnknownFormat};
use thiserror::Error;

/// Errors from tool operations, shared by the CLI and the HTTP API.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Could not decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error("Image has no pixels to sample")]
    EmptyInput,

    #[error("Image too large: {size} bytes (max {max})")]
    ImageTooLarge { size: usize, max: usize },

    #[error("Palette name must not be blank")]
    InvalidName,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Export failed: {0}")]
    Export(#[source] std::io::Error),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Task failed: {0}")]
    Task(String),
}

impl ToolError {
    /// Whether retrying the same action may succeed.
    ///
    /// Delivery and storage failures are transient; decode and validation
    /// failures repeat on every attempt with the same input.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ToolError::Export(_) | ToolError::Store(_))
    }

    /// Short message suitable for an end user.
    pub fn user_message(&self) -> String {
        match self {
            ToolError::ImageDecode(_) => {
                "This file could not be read as an image. Try a PNG, JPEG, GIF or WebP file.".to_string()
            }
            ToolError::EmptyInput => {
                "The image has no visible pixels, so no colors could be extracted.".to_string()
            }
            ToolError::ImageTooLarge { max, .. } => {
                format!("The image is too large. The limit is {} MiB.", max / (1024 * 1024))
            }
            ToolError::InvalidName => "Please enter a palette name.".to_string(),
            ToolError::InvalidInput(reason) => reason.clone(),
            ToolError::Export(_) => "Could not deliver the export. Please try again.".to_string(),
            ToolError::Store(_) => "Saved palettes are unavailable right now. Please try again.".to_string(),
            ToolError::Task(_) => "Something went wrong. Please try again.".to_string(),
        }
    }
}

impl From<ExtractError> for ToolError {
    fn from(e: ExtractError) -> Self {
        match e {
            ExtractError::EmptyInput => ToolError::EmptyInput,
            other => ToolError::InvalidInput(other.to_string()),
        }
    }
}

impl From<PaletteError> for ToolError {
    fn from(e: PaletteError) -> Self {
        ToolError::InvalidInput(e.to_string())
    }
}

impl From<GenerateError> for ToolError {
    fn from(e: GenerateError) -> Self {
        ToolError::InvalidInput(e.to_string())
    }
}

impl From<GradientError> for ToolError {
    fn from(e: GradientError) -> Self {
        ToolError::InvalidInput(e.to_string())
    }
}

impl From<UnknownFormat> for ToolError {
    fn from(e: UnknownFormat) -> Self {
        ToolError::InvalidInput(e.to_string())
    }
}

/// Errors from key-value storage backends.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Unprocessable image: {0}")]
    Unprocessable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ToolError> for ApiError {
    fn from(e: ToolError) -> Self {
        match e {
            ToolError::ImageDecode(_) | ToolError::EmptyInput => ApiError::Unprocessable(e.to_string()),
            ToolError::ImageTooLarge { .. } => ApiError::PayloadTooLarge(e.to_string()),
            ToolError::InvalidName | ToolError::InvalidInput(_) => ApiError::BadRequest(e.to_string()),
            ToolError::Export(_) | ToolError::Store(_) | ToolError::Task(_) => {
                tracing::error!(error = %e, "Tool operation failed");
                ApiError::Internal(e.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
