use axum::Json;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use swatch::{Gradient, GradientKind, GradientStop, Rgb};
use utoipa::ToSchema;

use crate::error::{ApiError, ToolError};

/// Gradient shape
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GradientKindJson {
    #[default]
    Linear,
    Radial,
}

/// One color stop
#[derive(Debug, Deserialize, ToSchema)]
pub struct StopJson {
    /// Hex color
    pub color: String,
    /// Percent, 0-100
    pub position: u8,
}

/// Request body for gradient building
#[derive(Debug, Deserialize, ToSchema)]
pub struct GradientRequest {
    #[serde(default)]
    pub kind: GradientKindJson,
    /// Degrees, 0-360 (linear only, default 90)
    pub angle: Option<u16>,
    /// 2 to 5 color stops
    pub stops: Vec<StopJson>,
    /// Replace every stop color with a random one
    #[serde(default)]
    pub randomize: bool,
    /// Seed used with `randomize`
    pub seed: Option<u64>,
}

/// Gradient code in the copyable forms
#[derive(Debug, Serialize, ToSchema)]
pub struct GradientResponse {
    /// CSS gradient value
    pub css: String,
    /// `background: ...;`
    pub declaration: String,
    /// Tailwind arbitrary-value class
    pub tailwind: String,
    /// Stop colors after randomizing, in order
    pub colors: Vec<String>,
}

/// Build CSS for a gradient
#[utoipa::path(
    post,
    path = "/api/gradient",
    request_body = GradientRequest,
    responses(
        (status = 200, description = "Gradient code", body = GradientResponse),
        (status = 400, description = "Invalid stops or angle"),
    ),
    tag = "Gradient"
)]
pub async fn handle_gradient(Json(request): Json<GradientRequest>) -> Result<Json<GradientResponse>, ApiError> {
    let kind = match request.kind {
        GradientKindJson::Linear => GradientKind::Linear {
            angle: request.angle.unwrap_or(90),
        },
        GradientKindJson::Radial => GradientKind::Radial,
    };

    let stops = request
        .stops
        .iter()
        .map(|stop| {
            let color: Rgb = stop
                .color
                .parse()
                .map_err(|e| ToolError::InvalidInput(format!("stop color {:?}: {e}", stop.color)))?;
            Ok(GradientStop::new(color, stop.position))
        })
        .collect::<Result<Vec<_>, ToolError>>()?;

    let mut gradient = Gradient::new(kind, stops).map_err(ToolError::from)?;
    if request.randomize {
        let mut rng = match request.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        gradient.randomize(&mut rng);
    }

    Ok(Json(GradientResponse {
        css: gradient.css(),
        declaration: gradient.declaration(),
        tailwind: gradient.tailwind_class(),
        colors: gradient.stops().iter().map(|s| s.color.to_hex()).collect(),
    }))
}
