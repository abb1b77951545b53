//! Dominant color and palette extraction from pixel data.
//!
//! [`extract`] samples an RGBA buffer, quantizes the sampled colors with a
//! modified median cut, and returns the centroids ranked by population.
//! It is a pure function of its inputs: the same buffer and options always
//! produce the same palette.
//!
//! # Example
//!
//! ```
//! use swatch::{extract, PixelBuffer, QuantizeOptions, Rgb};
//!
//! let pixels: Vec<u8> = [0x33, 0x66, 0x99, 0xff].repeat(100 * 100);
//! let buffer = PixelBuffer::new(&pixels, 100, 100).unwrap();
//!
//! let extraction = extract(&buffer, &QuantizeOptions::default()).unwrap();
//! assert_eq!(extraction.dominant, Rgb::new(0x33, 0x66, 0x99));
//! assert_eq!(extraction.palette.len(), 8);
//! ```

mod median_cut;
mod options;
mod pixels;

use thiserror::Error;

use crate::color::Rgb;
use crate::palette::Palette;

pub use options::QuantizeOptions;
pub use pixels::PixelBuffer;

/// Errors from palette extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// No pixel survived sampling (0x0 image, fully transparent, ...)
    #[error("image has no pixels to sample")]
    EmptyInput,

    /// Buffer length does not match the stated dimensions
    #[error("pixel buffer has {actual} bytes, expected {width}x{height} RGBA")]
    BufferSize {
        width: u32,
        height: u32,
        actual: usize,
    },

    /// An option is out of range
    #[error("invalid option {name}: {reason}")]
    InvalidOptions { name: &'static str, reason: String },
}

/// Result of one extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Centroid of the most populous cluster
    pub dominant: Rgb,
    /// `max_colors` entries, dominant first
    pub palette: Palette,
}

/// Extract the dominant color and a ranked palette from an RGBA buffer.
///
/// The palette always has exactly `options.max_colors` entries. When the
/// image holds fewer distinct clusters than that, the remaining slots repeat
/// the dominant color.
///
/// # Errors
///
/// - [`ExtractError::InvalidOptions`] if `options` fail validation
/// - [`ExtractError::EmptyInput`] if no pixel survives sampling
pub fn extract(pixels: &PixelBuffer<'_>, options: &QuantizeOptions) -> Result<Extraction, ExtractError> {
    options.validate()?;

    let histogram = median_cut::Histogram::from_samples(pixels.samples(options));
    if histogram.total() == 0 {
        return Err(ExtractError::EmptyInput);
    }

    let mut colors = median_cut::quantize(&histogram, options.max_colors);
    let dominant = *colors.first().ok_or(ExtractError::EmptyInput)?;
    colors.resize(options.max_colors, dominant);

    let palette = Palette::from_vec(colors).map_err(|_| ExtractError::EmptyInput)?;
    Ok(Extraction { dominant, palette })
}

/// Shorthand for `extract(..)?.dominant`.
pub fn dominant_color(pixels: &PixelBuffer<'_>, options: &QuantizeOptions) -> Result<Rgb, ExtractError> {
    extract(pixels, options).map(|extraction| extraction.dominant)
}
