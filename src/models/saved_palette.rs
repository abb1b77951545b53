use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use swatch::{GeneratedColor, Hsl, Palette, PaletteError, Rgb};
use utoipa::ToSchema;

/// One color of a saved palette, in the three notations shown to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StoredColor {
    /// `#rrggbb`
    pub hex: String,
    /// `rgb(r, g, b)`
    pub rgb: String,
    /// `hsl(h, s%, l%)`
    pub hsl: String,
}

impl StoredColor {
    /// HSL is derived from the RGB value and rounded.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            hex: rgb.to_hex(),
            rgb: rgb.css(),
            hsl: Hsl::from(rgb).css(),
        }
    }

    /// Keeps the HSL triple the color was generated from.
    pub fn from_generated(color: &GeneratedColor) -> Self {
        Self {
            hex: color.rgb.to_hex(),
            rgb: color.rgb.css(),
            hsl: color.hsl().css(),
        }
    }
}

impl From<Rgb> for StoredColor {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

/// A named palette in the saved list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SavedPalette {
    /// Creation time in Unix milliseconds
    pub id: String,
    pub name: String,
    pub colors: Vec<StoredColor>,
    /// RFC 3339 creation timestamp
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
}

impl SavedPalette {
    /// Rebuild the palette from the stored hex values.
    pub fn palette(&self) -> Result<Palette, PaletteError> {
        let hexes: Vec<&str> = self.colors.iter().map(|c| c.hex.as_str()).collect();
        Palette::from_hex_strings(&hexes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stored_color_from_rgb() {
        let color = StoredColor::from_rgb(Rgb::new(0x33, 0x66, 0x99));
        assert_eq!(color.hex, "#336699");
        assert_eq!(color.rgb, "rgb(51, 102, 153)");
        assert_eq!(color.hsl, "hsl(210, 50%, 40%)");
    }

    #[test]
    fn test_serialized_shape() {
        let palette = SavedPalette {
            id: "1700000000000".to_string(),
            name: "Sunset".to_string(),
            colors: vec![StoredColor::from_rgb(Rgb::new(255, 0, 0))],
            created_at: Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
        };

        let json = serde_json::to_value(&palette).unwrap();
        assert_eq!(json["id"], "1700000000000");
        assert_eq!(json["name"], "Sunset");
        assert_eq!(json["colors"][0]["hex"], "#ff0000");
        assert_eq!(json["colors"][0]["rgb"], "rgb(255, 0, 0)");
        assert_eq!(json["colors"][0]["hsl"], "hsl(0, 100%, 50%)");
        assert!(json["createdAt"].as_str().unwrap().starts_with("2023-11-14T22:13:20"));
    }

    #[test]
    fn test_deserializes_browser_timestamps() {
        let json = r##"{
            "id": "1700000000000",
            "name": "Ocean",
            "colors": [{"hex": "#0000ff", "rgb": "rgb(0, 0, 255)", "hsl": "hsl(240, 100%, 50%)"}],
            "createdAt": "2023-11-14T22:13:20.000Z"
        }"##;
        let palette: SavedPalette = serde_json::from_str(json).unwrap();
        assert_eq!(palette.created_at.timestamp_millis(), 1_700_000_000_000);
        assert_eq!(palette.palette().unwrap().colors(), &[Rgb::new(0, 0, 255)]);
    }
}
