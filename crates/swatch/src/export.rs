//! Palette export formats.
//!
//! Every format numbers colors by their position in the palette (1-based),
//! so duplicate entries each get their own number.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::palette::Palette;

/// Unknown export format name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown export format {0:?} (expected hex, css or design-token)")]
pub struct UnknownFormat(pub String);

/// Text formats a palette can be exported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportFormat {
    /// `#aaaaaa, #bbbbbb`
    #[default]
    Hex,
    /// CSS custom properties, one `--color-N` per line
    Css,
    /// Token object keyed by position, usable as a Tailwind color scale
    #[serde(alias = "tailwind")]
    DesignToken,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [Self::Hex, Self::Css, Self::DesignToken];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Css => "css",
            Self::DesignToken => "design-token",
        }
    }

    /// Render `palette` in this format.
    ///
    /// # Example
    /// ```
    /// use swatch::{ExportFormat, Palette};
    ///
    /// let palette: Palette = "#ff0000, #00ff00".parse().unwrap();
    /// assert_eq!(ExportFormat::Hex.format(&palette), "#ff0000, #00ff00");
    /// assert_eq!(
    ///     ExportFormat::Css.format(&palette),
    ///     "--color-1: #ff0000;\n--color-2: #00ff00;"
    /// );
    /// ```
    pub fn format(self, palette: &Palette) -> String {
        let hexes = palette.to_hex_strings();
        match self {
            Self::Hex => hexes.join(", "),
            Self::Css => hexes
                .iter()
                .enumerate()
                .map(|(i, hex)| format!("--color-{}: {};", i + 1, hex))
                .collect::<Vec<_>>()
                .join("\n"),
            Self::DesignToken => {
                let entries = hexes
                    .iter()
                    .enumerate()
                    .map(|(i, hex)| format!("'{}': '{}'", i + 1, hex))
                    .collect::<Vec<_>>()
                    .join(",\n");
                format!("{{\n{}\n}}", entries)
            }
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "css" => Ok(Self::Css),
            "design-token" | "designtoken" | "tailwind" => Ok(Self::DesignToken),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

/// Shorthand for [`ExportFormat::format`].
pub fn export(palette: &Palette, format: ExportFormat) -> String {
    format.format(palette)
}
