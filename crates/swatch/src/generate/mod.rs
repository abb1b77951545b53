//! Harmonic palette generation.
//!
//! A generated palette places its hues evenly around the color wheel,
//! starting from a base hue: color `i` has hue `(base + i * hue_step) mod
//! 360`. Saturation and lightness are drawn independently per color from
//! the configured ranges. The random source is injected, so a seeded RNG
//! reproduces a palette exactly.
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use swatch::PaletteGenerator;
//!
//! let generator = PaletteGenerator::default();
//! let mut rng = StdRng::seed_from_u64(7);
//! let palette = generator.generate_with_base_hue(0, &mut rng).unwrap();
//! assert_eq!(palette.hues(), vec![0, 72, 144, 216, 288]);
//! ```

mod options;

use rand::Rng;
use thiserror::Error;

use crate::color::{Hsl, Rgb};
use crate::palette::{Palette, PaletteError};

pub use options::GeneratorOptions;

/// Errors from palette generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("invalid option {name}: {reason}")]
    InvalidOptions { name: &'static str, reason: String },

    #[error(transparent)]
    Palette(#[from] PaletteError),
}

/// One generated color with the HSL triple it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedColor {
    /// Hue in degrees (0..360)
    pub hue: u16,
    /// Saturation in percent
    pub saturation: u8,
    /// Lightness in percent
    pub lightness: u8,
    /// The color itself
    pub rgb: Rgb,
}

impl GeneratedColor {
    fn from_hsl(hue: u16, saturation: u8, lightness: u8) -> Self {
        let rgb = Hsl::new(hue as f32, saturation as f32, lightness as f32).to_rgb();
        Self {
            hue,
            saturation,
            lightness,
            rgb,
        }
    }

    /// The originating HSL triple.
    pub fn hsl(&self) -> Hsl {
        Hsl::new(self.hue as f32, self.saturation as f32, self.lightness as f32)
    }
}

/// Output of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPalette {
    /// Hue of the first color
    pub base_hue: u16,
    /// Colors in generation order
    pub colors: Vec<GeneratedColor>,
    palette: Palette,
}

impl GeneratedPalette {
    /// Hues in generation order.
    pub fn hues(&self) -> Vec<u16> {
        self.colors.iter().map(|c| c.hue).collect()
    }

    /// The colors as a plain [`Palette`].
    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

/// Generates evenly spaced palettes.
#[derive(Debug, Clone, Default)]
pub struct PaletteGenerator {
    options: GeneratorOptions,
}

impl PaletteGenerator {
    /// Create a generator, validating `options`.
    pub fn new(options: GeneratorOptions) -> Result<Self, GenerateError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Generate a palette from a random base hue in `0..360`.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GeneratedPalette, GenerateError> {
        let base_hue = rng.gen_range(0..360u16);
        self.generate_with_base_hue(base_hue, rng)
    }

    /// Generate a palette starting at `base_hue` (taken modulo 360).
    ///
    /// Hues depend only on `base_hue` and the configured step; the RNG only
    /// drives saturation and lightness.
    pub fn generate_with_base_hue<R: Rng + ?Sized>(
        &self,
        base_hue: u16,
        rng: &mut R,
    ) -> Result<GeneratedPalette, GenerateError> {
        self.options.validate()?;

        let base_hue = base_hue % 360;
        let step = self.options.hue_step as u32;
        let colors: Vec<GeneratedColor> = (0..self.options.count as u32)
            .map(|i| {
                let hue = ((base_hue as u32 + i * step) % 360) as u16;
                let saturation = rng.gen_range(self.options.saturation.clone());
                let lightness = rng.gen_range(self.options.lightness.clone());
                GeneratedColor::from_hsl(hue, saturation, lightness)
            })
            .collect();
        let palette = Palette::from_vec(colors.iter().map(|c| c.rgb).collect())?;

        Ok(GeneratedPalette {
            base_hue,
            colors,
            palette,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_base_hue_zero_gives_fixed_hues() {
        let generator = PaletteGenerator::default();
        let mut rng = StdRng::seed_from_u64(1);
        let palette = generator.generate_with_base_hue(0, &mut rng).unwrap();
        assert_eq!(palette.hues(), vec![0, 72, 144, 216, 288]);
        assert_eq!(palette.base_hue, 0);
    }

    #[test]
    fn test_hues_evenly_spaced_for_any_seed() {
        let generator = PaletteGenerator::default();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let palette = generator.generate(&mut rng).unwrap();

            let mut hues = palette.hues();
            assert_eq!(hues.len(), 5);
            hues.sort_unstable();
            for pair in hues.windows(2) {
                assert_eq!(pair[1] - pair[0], 72, "seed {seed}: {hues:?}");
            }
            // Wrap-around gap closes the circle
            assert_eq!((hues[0] + 360 - hues[4]) % 360, 72, "seed {seed}: {hues:?}");
        }
    }

    #[test]
    fn test_saturation_and_lightness_in_range() {
        let generator = PaletteGenerator::default();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..100 {
            let palette = generator.generate(&mut rng).unwrap();
            for color in &palette.colors {
                assert!((60..90).contains(&color.saturation), "{color:?}");
                assert!((40..60).contains(&color.lightness), "{color:?}");
                assert!(color.hue < 360);
            }
        }
    }

    #[test]
    fn test_same_seed_same_palette() {
        let generator = PaletteGenerator::default();
        let a = generator.generate(&mut StdRng::seed_from_u64(42)).unwrap();
        let b = generator.generate(&mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rgb_matches_originating_hsl() {
        let generator = PaletteGenerator::default();
        let palette = generator
            .generate_with_base_hue(200, &mut StdRng::seed_from_u64(3))
            .unwrap();
        for color in &palette.colors {
            assert_eq!(color.rgb, color.hsl().to_rgb());
        }
        assert_eq!(palette.palette().len(), 5);
        assert_eq!(palette.palette()[0], palette.colors[0].rgb);
    }

    #[test]
    fn test_base_hue_wraps() {
        let generator = PaletteGenerator::default();
        let palette = generator
            .generate_with_base_hue(400, &mut StdRng::seed_from_u64(0))
            .unwrap();
        assert_eq!(palette.hues(), vec![40, 112, 184, 256, 328]);
    }

    #[test]
    fn test_custom_options() {
        let options = GeneratorOptions::new().count(3).hue_step(120).saturation(100..101).lightness(50..51);
        let generator = PaletteGenerator::new(options).unwrap();
        let palette = generator
            .generate_with_base_hue(0, &mut StdRng::seed_from_u64(0))
            .unwrap();
        assert_eq!(palette.hues(), vec![0, 120, 240]);
        let rgbs: Vec<Rgb> = palette.colors.iter().map(|c| c.rgb).collect();
        assert_eq!(rgbs, vec![Rgb::new(255, 0, 0), Rgb::new(0, 255, 0), Rgb::new(0, 0, 255)]);
    }

    #[test]
    fn test_new_rejects_invalid_options() {
        assert!(PaletteGenerator::new(GeneratorOptions::new().count(0)).is_err());
    }
}
