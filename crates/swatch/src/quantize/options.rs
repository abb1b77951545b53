//! Quantization options and configuration.
//!
//! This module provides the [`QuantizeOptions`] struct for configuring
//! pixel sampling and palette size before median-cut quantization.

use super::ExtractError;
use crate::palette::Palette;

/// Configuration options for palette extraction.
///
/// # Defaults
///
/// - Max colors: 8
/// - Quality: 10 (every 10th pixel is sampled)
/// - Alpha threshold: 125 (more transparent pixels are skipped)
/// - Ignore white: disabled
///
/// # Example
///
/// ```
/// use swatch::QuantizeOptions;
///
/// let options = QuantizeOptions::new()
///     .max_colors(5)
///     .quality(1)
///     .ignore_white(true);
/// assert_eq!(options.max_colors, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantizeOptions {
    /// Number of palette entries to produce (1..=8).
    pub max_colors: usize,

    /// Sampling stride in pixels.
    ///
    /// - 1 = every pixel (highest quality, slowest)
    /// - 10 = every 10th pixel (default)
    ///
    /// Larger values trade accuracy for speed on big images.
    pub quality: usize,

    /// Pixels whose alpha is below this value are skipped.
    pub alpha_threshold: u8,

    /// Skip near-white pixels (all channels above 250).
    pub ignore_white: bool,
}

impl Default for QuantizeOptions {
    fn default() -> Self {
        Self {
            max_colors: Palette::MAX_LEN,
            quality: 10,
            alpha_threshold: 125,
            ignore_white: false,
        }
    }
}

impl QuantizeOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of palette entries.
    #[inline]
    pub fn max_colors(mut self, max_colors: usize) -> Self {
        self.max_colors = max_colors;
        self
    }

    /// Set the sampling stride.
    #[inline]
    pub fn quality(mut self, quality: usize) -> Self {
        self.quality = quality;
        self
    }

    /// Set the minimum alpha for a pixel to be sampled.
    #[inline]
    pub fn alpha_threshold(mut self, alpha_threshold: u8) -> Self {
        self.alpha_threshold = alpha_threshold;
        self
    }

    /// Enable or disable skipping of near-white pixels.
    #[inline]
    pub fn ignore_white(mut self, ignore_white: bool) -> Self {
        self.ignore_white = ignore_white;
        self
    }

    /// Check that every option is in range.
    pub fn validate(&self) -> Result<(), ExtractError> {
        if self.max_colors == 0 || self.max_colors > Palette::MAX_LEN {
            return Err(ExtractError::InvalidOptions {
                name: "max_colors",
                reason: format!("must be between 1 and {}", Palette::MAX_LEN),
            });
        }
        if self.quality == 0 {
            return Err(ExtractError::InvalidOptions {
                name: "quality",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
