//! Ordered palette of colors.
//!
//! A [`Palette`] is the result of one extraction or generation event: 1 to
//! [`Palette::MAX_LEN`] colors in rank order (dominant first, or generation
//! order). Duplicates are allowed, a monochrome image legitimately yields a
//! palette of identical entries.

use std::ops::Index;
use std::str::FromStr;

use super::error::PaletteError;
use crate::color::Rgb;

/// Ordered sequence of 1..=8 colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Maximum number of colors in a palette.
    pub const MAX_LEN: usize = 8;

    /// Create a palette from colors in rank order.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] if `colors` is empty
    /// - [`PaletteError::TooManyColors`] if more than [`Self::MAX_LEN`] colors
    ///
    /// # Example
    /// ```
    /// use swatch::{Palette, Rgb};
    /// let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
    /// assert_eq!(palette.len(), 2);
    /// ```
    pub fn new(colors: &[Rgb]) -> Result<Self, PaletteError> {
        Self::from_vec(colors.to_vec())
    }

    pub(crate) fn from_vec(colors: Vec<Rgb>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        if colors.len() > Self::MAX_LEN {
            return Err(PaletteError::TooManyColors {
                len: colors.len(),
                max: Self::MAX_LEN,
            });
        }
        Ok(Self { colors })
    }

    /// Create a palette from hex color strings.
    ///
    /// Each entry accepts any form [`Rgb::from_str`] accepts.
    pub fn from_hex_strings<S: AsRef<str>>(hexes: &[S]) -> Result<Self, PaletteError> {
        let colors = hexes
            .iter()
            .enumerate()
            .map(|(index, hex)| {
                hex.as_ref()
                    .parse::<Rgb>()
                    .map_err(|source| PaletteError::ParseColor { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_vec(colors)
    }

    /// Number of colors (always at least 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Colors in rank order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Highest-ranked color.
    #[inline]
    pub fn first(&self) -> Rgb {
        self.colors[0]
    }

    /// Iterate colors in rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rgb> {
        self.colors.iter()
    }

    /// Hex encodings of every color, in order.
    pub fn to_hex_strings(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.to_hex()).collect()
    }
}

impl Index<usize> for Palette {
    type Output = Rgb;

    fn index(&self, index: usize) -> &Rgb {
        &self.colors[index]
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Rgb;
    type IntoIter = std::slice::Iter<'a, Rgb>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

impl FromStr for Palette {
    type Err = PaletteError;

    /// Parse a comma-separated list of hex colors (`"#ff0000, #00ff00"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        Self::from_hex_strings(&parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ParseColorError;

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(Palette::new(&[]).unwrap_err(), PaletteError::EmptyPalette);
    }

    #[test]
    fn test_new_rejects_more_than_eight() {
        let colors = vec![Rgb::new(1, 2, 3); 9];
        assert_eq!(
            Palette::new(&colors).unwrap_err(),
            PaletteError::TooManyColors { len: 9, max: 8 }
        );
        assert_eq!(Palette::new(&colors[..8]).unwrap().len(), 8);
    }

    #[test]
    fn test_duplicates_allowed() {
        let palette = Palette::new(&[Rgb::new(9, 9, 9); 3]).unwrap();
        assert_eq!(palette.len(), 3);
        assert!(palette.iter().all(|&c| c == Rgb::new(9, 9, 9)));
    }

    #[test]
    fn test_from_hex_strings_reports_position() {
        let err = Palette::from_hex_strings(&["#000000", "#zzzzzz"]).unwrap_err();
        assert_eq!(
            err,
            PaletteError::ParseColor {
                index: 1,
                source: ParseColorError::InvalidDigit('z'),
            }
        );
    }

    #[test]
    fn test_from_str_comma_list() {
        let palette: Palette = "#ff0000, 00ff00,#00f".parse().unwrap();
        assert_eq!(
            palette.colors(),
            &[Rgb::new(255, 0, 0), Rgb::new(0, 255, 0), Rgb::new(0, 0, 255)]
        );
        assert_eq!(palette.first(), Rgb::new(255, 0, 0));
        assert_eq!(palette[2], Rgb::new(0, 0, 255));
        assert_eq!(
            palette.to_hex_strings(),
            vec!["#ff0000", "#00ff00", "#0000ff"]
        );
    }

    #[test]
    fn test_from_str_empty_is_error() {
        assert_eq!(" , ".parse::<Palette>().unwrap_err(), PaletteError::EmptyPalette);
    }
}
