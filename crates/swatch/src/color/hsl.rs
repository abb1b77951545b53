//! HSL color type
//!
//! Hue/saturation/lightness is the cylindrical model used for harmonic
//! palette generation. Hue is in degrees, saturation and lightness are in
//! percent, matching CSS `hsl()` notation.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::rgb::Rgb;

/// A color in HSL space.
///
/// - `h`: hue in degrees, `0.0..360.0` (other values wrap)
/// - `s`: saturation in percent, `0.0..=100.0`
/// - `l`: lightness in percent, `0.0..=100.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees
    pub h: f32,
    /// Saturation in percent
    pub s: f32,
    /// Lightness in percent
    pub l: f32,
}

impl Hsl {
    #[inline]
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Convert to 8-bit RGB.
    ///
    /// Hue is taken modulo 360 before the sector lookup, saturation and
    /// lightness are clamped to `0..=100`. Channels are rounded to the nearest
    /// integer and clamped to `0..=255`.
    ///
    /// # Example
    /// ```
    /// use swatch::{Hsl, Rgb};
    /// assert_eq!(Hsl::new(0.0, 100.0, 50.0).to_rgb(), Rgb::new(255, 0, 0));
    /// assert_eq!(Hsl::new(480.0, 100.0, 50.0).to_rgb(), Rgb::new(0, 255, 0));
    /// assert_eq!(Hsl::new(123.0, 0.0, 50.0).to_rgb(), Rgb::new(128, 128, 128));
    /// ```
    pub fn to_rgb(self) -> Rgb {
        let h = (self.h as f64).rem_euclid(360.0);
        let s = (self.s as f64 / 100.0).clamp(0.0, 1.0);
        let l = (self.l as f64 / 100.0).clamp(0.0, 1.0);

        if s == 0.0 {
            let v = to_channel(l);
            return Rgb::new(v, v, v);
        }

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let sector = h / 60.0;
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());

        let (r, g, b) = match sector as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            // 5, and 6 when rem_euclid rounds up to exactly 360.0
            _ => (chroma, 0.0, x),
        };

        let m = l - chroma / 2.0;
        Rgb::new(to_channel(r + m), to_channel(g + m), to_channel(b + m))
    }

    /// CSS functional notation with rounded components, `hsl(h, s%, l%)`.
    pub fn css(self) -> String {
        let h = (self.h.round() as i32).rem_euclid(360);
        format!("hsl({}, {}%, {}%)", h, self.s.round(), self.l.round())
    }
}

#[inline]
fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

impl From<Rgb> for Hsl {
    /// Standard max/min derivation. Achromatic colors get hue 0 and
    /// saturation 0.
    fn from(rgb: Rgb) -> Self {
        let r = rgb.r as f64 / 255.0;
        let g = rgb.g as f64 / 255.0;
        let b = rgb.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let d = max - min;

        if d == 0.0 {
            return Self::new(0.0, 0.0, (l * 100.0) as f32);
        }

        let s = d / (1.0 - (2.0 * l - 1.0).abs());
        let h = if max == r {
            ((g - b) / d).rem_euclid(6.0)
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Self::new((h * 60.0) as f32, (s * 100.0) as f32, (l * 100.0) as f32)
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl.to_rgb()
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}
