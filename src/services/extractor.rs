//! Image decoding in front of the quantizer.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use std::path::Path;
use swatch::{Extraction, PixelBuffer, QuantizeOptions};

use crate::error::ToolError;
use crate::models::ExtractionConfig;

/// Decodes uploaded images and extracts their palette.
#[derive(Debug, Clone)]
pub struct ExtractionService {
    config: ExtractionConfig,
}

impl ExtractionService {
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Configured options with per-request overrides applied.
    pub fn options(&self, count: Option<usize>, quality: Option<usize>) -> QuantizeOptions {
        let mut options = self.config.quantize_options();
        if let Some(count) = count {
            options = options.max_colors(count);
        }
        if let Some(quality) = quality {
            options = options.quality(quality);
        }
        options
    }

    /// Reject uploads over the configured size.
    pub fn check_size(&self, size: usize) -> Result<(), ToolError> {
        let max = self.config.max_upload_bytes;
        if size > max {
            return Err(ToolError::ImageTooLarge { size, max });
        }
        Ok(())
    }

    /// Decode `bytes` and extract a palette. CPU bound; call from a blocking
    /// context.
    pub fn extract_bytes(&self, bytes: &[u8], options: &QuantizeOptions) -> Result<Extraction, ToolError> {
        self.check_size(bytes.len())?;

        let image = image::load_from_memory(bytes)?;
        let (width, height) = image.dimensions();
        let image = self.downscale(image);
        let rgba = image.to_rgba8();

        tracing::debug!(
            width,
            height,
            sampled_width = rgba.width(),
            sampled_height = rgba.height(),
            quality = options.quality,
            "Decoded image"
        );

        let buffer = PixelBuffer::new(rgba.as_raw(), rgba.width(), rgba.height())?;
        let extraction = swatch::extract(&buffer, options)?;

        tracing::info!(
            dominant = %extraction.dominant,
            colors = extraction.palette.len(),
            "Extracted palette"
        );
        Ok(extraction)
    }

    /// [`Self::extract_bytes`] on the blocking thread pool.
    pub async fn extract(&self, bytes: Vec<u8>, options: QuantizeOptions) -> Result<Extraction, ToolError> {
        // Fail fast before handing the buffer to another thread
        self.check_size(bytes.len())?;

        let service = self.clone();
        tokio::task::spawn_blocking(move || service.extract_bytes(&bytes, &options))
            .await
            .map_err(|e| ToolError::Task(e.to_string()))?
    }

    /// Read an image file and extract its palette.
    pub fn extract_file(&self, path: &Path, options: &QuantizeOptions) -> Result<Extraction, ToolError> {
        let size = std::fs::metadata(path)
            .map_err(|e| ToolError::InvalidInput(format!("{}: {e}", path.display())))?
            .len();
        self.check_size(usize::try_from(size).unwrap_or(usize::MAX))?;

        let bytes =
            std::fs::read(path).map_err(|e| ToolError::InvalidInput(format!("{}: {e}", path.display())))?;
        self.extract_bytes(&bytes, options)
    }

    fn downscale(&self, image: DynamicImage) -> DynamicImage {
        let limit = self.config.downscale_above;
        let (width, height) = image.dimensions();
        if limit == 0 || width.max(height) <= limit {
            return image;
        }
        image.resize(limit, limit, FilterType::Triangle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;
    use swatch::Rgb;

    fn png(image: RgbaImage) -> Vec<u8> {
        let mut bytes = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(image)
            .write_to(&mut bytes, ImageFormat::Png)
            .unwrap();
        bytes.into_inner()
    }

    fn service() -> ExtractionService {
        ExtractionService::new(ExtractionConfig::default())
    }

    #[test]
    fn test_solid_png() {
        let bytes = png(RgbaImage::from_pixel(100, 100, Rgba([0x33, 0x66, 0x99, 255])));
        let extraction = service()
            .extract_bytes(&bytes, &QuantizeOptions::default())
            .unwrap();

        assert_eq!(extraction.dominant, Rgb::new(0x33, 0x66, 0x99));
        assert_eq!(extraction.palette.len(), 8);
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let err = service()
            .extract_bytes(b"definitely not an image", &QuantizeOptions::default())
            .unwrap_err();
        assert!(matches!(err, ToolError::ImageDecode(_)));
    }

    #[test]
    fn test_transparent_png_is_empty_input() {
        let bytes = png(RgbaImage::from_pixel(16, 16, Rgba([255, 0, 0, 0])));
        let err = service()
            .extract_bytes(&bytes, &QuantizeOptions::default())
            .unwrap_err();
        assert!(matches!(err, ToolError::EmptyInput));
    }

    #[test]
    fn test_oversized_upload_rejected() {
        let config = ExtractionConfig {
            max_upload_bytes: 16,
            ..ExtractionConfig::default()
        };
        let err = ExtractionService::new(config)
            .extract_bytes(&[0u8; 17], &QuantizeOptions::default())
            .unwrap_err();
        assert!(matches!(err, ToolError::ImageTooLarge { size: 17, max: 16 }));
    }

    #[test]
    fn test_large_image_is_downscaled() {
        let config = ExtractionConfig {
            downscale_above: 64,
            ..ExtractionConfig::default()
        };
        let service = ExtractionService::new(config);
        let image = DynamicImage::ImageRgba8(RgbaImage::new(256, 128));
        let scaled = service.downscale(image);
        assert_eq!(scaled.dimensions(), (64, 32));

        let small = DynamicImage::ImageRgba8(RgbaImage::new(20, 10));
        assert_eq!(service.downscale(small).dimensions(), (20, 10));
    }

    #[test]
    fn test_request_overrides() {
        let options = service().options(Some(3), None);
        assert_eq!(options.max_colors, 3);
        assert_eq!(options.quality, 10);
    }

    #[tokio::test]
    async fn test_async_extract() {
        let bytes = png(RgbaImage::from_pixel(8, 8, Rgba([10, 20, 30, 255])));
        let service = service();
        let extraction = service.extract(bytes, service.options(Some(2), Some(1))).await.unwrap();
        assert_eq!(extraction.palette.colors(), &[Rgb::new(10, 20, 30); 2]);
    }

    #[test]
    fn test_extract_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("swatch.png");
        std::fs::write(&path, png(RgbaImage::from_pixel(4, 4, Rgba([200, 100, 50, 255])))).unwrap();

        let extraction = service().extract_file(&path, &QuantizeOptions::default()).unwrap();
        assert_eq!(extraction.dominant, Rgb::new(200, 100, 50));

        let missing = service().extract_file(&dir.path().join("nope.png"), &QuantizeOptions::default());
        assert!(matches!(missing, Err(ToolError::InvalidInput(_))));
    }
}
