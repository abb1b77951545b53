//! Generator options.

use std::ops::Range;

use super::GenerateError;
use crate::palette::Palette;

/// Tunable constants for harmonic palette generation.
///
/// The defaults reproduce the classic five-color wheel: hues 72° apart,
/// saturation drawn from `60..90` percent and lightness from `40..60`
/// percent. Only the even hue spacing is structural; the ranges are design
/// choices and may be changed freely.
///
/// # Example
///
/// ```
/// use swatch::GeneratorOptions;
///
/// let options = GeneratorOptions::new().count(3).hue_step(120);
/// assert_eq!(options.count, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Number of colors (1..=8)
    pub count: usize,
    /// Degrees between consecutive hues
    pub hue_step: u16,
    /// Saturation range in percent, end exclusive
    pub saturation: Range<u8>,
    /// Lightness range in percent, end exclusive
    pub lightness: Range<u8>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            count: 5,
            hue_step: 72,
            saturation: 60..90,
            lightness: 40..60,
        }
    }
}

impl GeneratorOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    #[inline]
    pub fn hue_step(mut self, hue_step: u16) -> Self {
        self.hue_step = hue_step;
        self
    }

    #[inline]
    pub fn saturation(mut self, range: Range<u8>) -> Self {
        self.saturation = range;
        self
    }

    #[inline]
    pub fn lightness(mut self, range: Range<u8>) -> Self {
        self.lightness = range;
        self
    }

    /// Check that every option is in range.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.count == 0 || self.count > Palette::MAX_LEN {
            return Err(GenerateError::InvalidOptions {
                name: "count",
                reason: format!("must be between 1 and {}", Palette::MAX_LEN),
            });
        }
        check_percent_range("saturation", &self.saturation)?;
        check_percent_range("lightness", &self.lightness)?;
        Ok(())
    }
}

fn check_percent_range(name: &'static str, range: &Range<u8>) -> Result<(), GenerateError> {
    if range.is_empty() || range.end > 101 {
        return Err(GenerateError::InvalidOptions {
            name,
            reason: format!("{}..{} is not a non-empty range within 0..=100", range.start, range.end),
        });
    }
    Ok(())
}
