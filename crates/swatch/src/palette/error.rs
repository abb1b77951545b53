//! Error types for palette operations
//!
//! This module provides error types for color parsing and palette validation.

use thiserror::Error;

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color string fails, either due to
/// invalid length or a non-hexadecimal character.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,
    /// Character that is not a hexadecimal digit
    #[error("invalid hex character: {0:?}")]
    InvalidDigit(char),
}

/// Error type for palette validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// No colors provided in palette
    #[error("palette cannot be empty")]
    EmptyPalette,
    /// More colors than a palette may hold
    #[error("palette has {len} colors (max {max})")]
    TooManyColors {
        /// Number of colors supplied
        len: usize,
        /// Maximum palette length
        max: usize,
    },
    /// Invalid hex color string at the given position
    #[error("invalid color at position {index}: {source}")]
    ParseColor {
        /// Zero-based position of the offending entry
        index: usize,
        #[source]
        source: ParseColorError,
    },
}
