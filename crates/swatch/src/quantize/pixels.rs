//! Borrowed RGBA pixel buffers.

use super::{ExtractError, QuantizeOptions};
use crate::color::Rgb;

/// A decoded RGBA8 image, row-major, 4 bytes per pixel.
///
/// The buffer is only borrowed; extraction never mutates the source.
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> PixelBuffer<'a> {
    /// Wrap an RGBA8 buffer.
    ///
    /// # Errors
    ///
    /// [`ExtractError::BufferSize`] if `data` is not exactly
    /// `width * height * 4` bytes long.
    pub fn new(data: &'a [u8], width: u32, height: u32) -> Result<Self, ExtractError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4));
        if expected != Some(data.len()) {
            return Err(ExtractError::BufferSize {
                width,
                height,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels in the buffer.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len() / 4
    }

    /// Iterate the pixels that survive sampling: every `quality`-th pixel,
    /// skipping those below the alpha threshold and, optionally, near-white.
    pub(crate) fn samples(&self, options: &'a QuantizeOptions) -> impl Iterator<Item = Rgb> + 'a {
        self.data
            .chunks_exact(4)
            .step_by(options.quality.max(1))
            .filter(move |px| px[3] >= options.alpha_threshold)
            .filter(move |px| !(options.ignore_white && px[0] > 250 && px[1] > 250 && px[2] > 250))
            .map(|px| Rgb::new(px[0], px[1], px[2]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_length() {
        let data = vec![0u8; 2 * 3 * 4];
        let buffer = PixelBuffer::new(&data, 2, 3).unwrap();
        assert_eq!(buffer.width(), 2);
        assert_eq!(buffer.height(), 3);
        assert_eq!(buffer.pixel_count(), 6);

        assert_eq!(
            PixelBuffer::new(&data, 3, 3).unwrap_err(),
            ExtractError::BufferSize {
                width: 3,
                height: 3,
                actual: 24,
            }
        );
    }

    #[test]
    fn test_zero_sized_buffer_is_valid() {
        let buffer = PixelBuffer::new(&[], 0, 0).unwrap();
        assert_eq!(buffer.pixel_count(), 0);
    }

    #[test]
    fn test_samples_respect_stride_and_alpha() {
        #[rustfmt::skip]
        let data = [
            10, 10, 10, 255,
            20, 20, 20, 255,
            30, 30, 30, 0,
            40, 40, 40, 255,
            50, 50, 50, 255,
        ];
        let buffer = PixelBuffer::new(&data, 5, 1).unwrap();

        let every = QuantizeOptions::new().quality(1);
        let all: Vec<Rgb> = buffer.samples(&every).collect();
        assert_eq!(all.len(), 4, "transparent pixel must be skipped");

        let strided = QuantizeOptions::new().quality(2);
        let some: Vec<Rgb> = buffer.samples(&strided).collect();
        // Pixels 0, 2 (transparent, skipped) and 4
        assert_eq!(some, vec![Rgb::new(10, 10, 10), Rgb::new(50, 50, 50)]);
    }

    #[test]
    fn test_samples_ignore_white() {
        let data = [255, 255, 255, 255, 1, 2, 3, 255];
        let buffer = PixelBuffer::new(&data, 2, 1).unwrap();

        let keep = QuantizeOptions::new().quality(1);
        assert_eq!(buffer.samples(&keep).count(), 2);

        let skip = QuantizeOptions::new().quality(1).ignore_white(true);
        let samples: Vec<Rgb> = buffer.samples(&skip).collect();
        assert_eq!(samples, vec![Rgb::new(1, 2, 3)]);
    }
}
