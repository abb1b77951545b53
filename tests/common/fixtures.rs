//! Test fixtures: images encoded in memory.

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// Encode an RGBA image as PNG
pub fn encode_png(image: RgbaImage) -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(image)
        .write_to(&mut bytes, ImageFormat::Png)
        .expect("Failed to encode PNG");
    bytes.into_inner()
}

/// Single-color opaque PNG
pub fn solid_png(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    encode_png(RgbaImage::from_pixel(width, height, Rgba([rgb[0], rgb[1], rgb[2], 255])))
}

/// PNG whose top `top_rows` rows are `top` and the rest `bottom`
pub fn two_tone_png(width: u32, height: u32, top_rows: u32, top: [u8; 3], bottom: [u8; 3]) -> Vec<u8> {
    let image = RgbaImage::from_fn(width, height, |_, y| {
        let c = if y < top_rows { top } else { bottom };
        Rgba([c[0], c[1], c[2], 255])
    });
    encode_png(image)
}

/// Fully transparent PNG
pub fn transparent_png(width: u32, height: u32) -> Vec<u8> {
    encode_png(RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0])))
}
