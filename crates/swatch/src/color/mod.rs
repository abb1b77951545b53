//! Color types and conversion utilities
//!
//! - [`Rgb`]: 8-bit channels, the unit every palette is made of. Encodes to
//!   and parses from `#rrggbb`.
//! - [`Hsl`]: hue/saturation/lightness, used to synthesize harmonic palettes.
//!
//! # Example
//!
//! ```
//! use swatch::{Hsl, Rgb};
//!
//! let rgb: Rgb = "#336699".parse().unwrap();
//! let hsl = Hsl::from(rgb);
//! assert_eq!(hsl.to_rgb(), rgb);
//! assert_eq!(rgb.to_hex(), "#336699");
//! ```

mod hsl;
mod rgb;

pub use hsl::Hsl;
pub use rgb::Rgb;
