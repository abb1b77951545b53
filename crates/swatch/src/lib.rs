#![allow(clippy::needless_range_loop, clippy::module_inception)]

//! swatch: color palettes from images and from the color wheel
//!
//! The crate is pure computation. It never touches the filesystem or the
//! network, and every operation is deterministic given its inputs (random
//! generation takes the RNG as a parameter).
//!
//! # Extraction
//!
//! [`extract`] turns an RGBA8 buffer into a dominant color and a ranked
//! palette using a modified median cut:
//!
//! ```
//! use swatch::{extract, PixelBuffer, QuantizeOptions, Rgb};
//!
//! let mut pixels = [255, 0, 0, 255].repeat(30);
//! pixels.extend([0, 0, 255, 255].repeat(10));
//! let buffer = PixelBuffer::new(&pixels, 8, 5).unwrap();
//!
//! let options = QuantizeOptions::new().quality(1).max_colors(2);
//! let extraction = extract(&buffer, &options).unwrap();
//! assert_eq!(extraction.dominant, Rgb::new(255, 0, 0));
//! assert_eq!(extraction.palette[1], Rgb::new(0, 0, 255));
//! ```
//!
//! # Generation
//!
//! [`PaletteGenerator`] spaces hues evenly around the wheel from a base hue.
//!
//! # Export
//!
//! [`ExportFormat`] renders a palette as a hex list, CSS custom properties
//! or a design-token object:
//!
//! ```
//! use swatch::{ExportFormat, Palette};
//!
//! let palette: Palette = "#336699, #ffcc00".parse().unwrap();
//! assert_eq!(
//!     ExportFormat::DesignToken.format(&palette),
//!     "{\n'1': '#336699',\n'2': '#ffcc00'\n}"
//! );
//! ```
//!
//! # Gradients
//!
//! [`Gradient`] builds CSS `linear-gradient`/`radial-gradient` values from
//! 2 to 5 color stops.

pub mod color;
pub mod export;
pub mod generate;
pub mod gradient;
pub mod palette;
pub mod quantize;


pub use color::{Hsl, Rgb};
pub use export::{export, ExportFormat, UnknownFormat};
pub use generate::{GenerateError, GeneratedColor, GeneratedPalette, GeneratorOptions, PaletteGenerator};
pub use gradient::{Gradient, GradientError, GradientKind, GradientStop};
pub use palette::{Palette, PaletteError, ParseColorError};
pub use quantize::{dominant_color, extract, ExtractError, Extraction, PixelBuffer, QuantizeOptions};
