//! Image Crop Pipeline
//!
//! Turns uploaded image bytes plus a crop rectangle (source-pixel
//! coordinates) into a JPEG sized exactly to the rectangle. No scaling:
//! the output surface dimensions equal the rectangle's width × height.
//!
//! Bounds are the caller's problem: a rectangle reaching outside the
//! source clips silently, uncovered pixels stay at the surface
//! background. Decode and encode failures are distinct variants so the
//! caller can tell a broken upload from a broken re-encode.

use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use serde::Deserialize;
use std::io::Cursor;
use thiserror::Error;

/// JPEG quality for stored listing images (85% keeps flyers legible
/// while controlling file size)
const JPEG_QUALITY: u8 = 85;

/// Crop pipeline errors
#[derive(Debug, Error)]
pub enum CropError {
    #[error("image failed to decode: {0}")]
    Decode(String),

    #[error("empty output: {0}")]
    Encode(String),
}

/// Crop rectangle in source-pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Decode `data`, render the crop rectangle onto a fresh surface of the
/// rectangle's exact dimensions, and re-encode as JPEG.
pub fn crop_to_jpeg(data: &[u8], rect: CropRect) -> Result<Vec<u8>, CropError> {
    if rect.width == 0 || rect.height == 0 {
        return Err(CropError::Encode("crop rectangle has no area".to_string()));
    }

    let img = image::load_from_memory(data).map_err(|e| CropError::Decode(e.to_string()))?;
    let src = img.to_rgb8();
    let (src_w, src_h) = src.dimensions();

    // Surface sized to the rectangle; pixels the source cannot cover
    // keep the background
    let mut canvas = RgbImage::new(rect.width, rect.height);

    // Overlap of the rectangle with the source bounds
    let x0 = rect.x.min(src_w);
    let y0 = rect.y.min(src_h);
    let x1 = rect.x.saturating_add(rect.width).min(src_w);
    let y1 = rect.y.saturating_add(rect.height).min(src_h);

    for sy in y0..y1 {
        for sx in x0..x1 {
            canvas.put_pixel(sx - rect.x, sy - rect.y, *src.get_pixel(sx, sy));
        }
    }

    let mut buffer = Vec::new();
    {
        let mut cursor = Cursor::new(&mut buffer);
        let encoder = JpegEncoder::new_with_quality(&mut cursor, JPEG_QUALITY);
        canvas
            .write_with_encoder(encoder)
            .map_err(|e| CropError::Encode(e.to_string()))?;
    }

    if buffer.is_empty() {
        return Err(CropError::Encode("encoder produced no bytes".to_string()));
    }

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgb};

    const FILL: Rgb<u8> = Rgb([90, 120, 200]);

    /// Flat-color source image encoded as PNG (lossless input)
    fn flat_png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, FILL);
        let mut buffer = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .unwrap();
        buffer
    }

    /// Random-noise source image, shaped like a real photo upload
    fn noise_png(width: u32, height: u32) -> Vec<u8> {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        let img = RgbImage::from_fn(width, height, |_, _| {
            Rgb([
                rng.gen_range(0..=255),
                rng.gen_range(0..=255),
                rng.gen_range(0..=255),
            ])
        });
        let mut buffer = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .unwrap();
        buffer
    }

    fn channel_close(a: u8, b: u8) -> bool {
        a.abs_diff(b) <= 4
    }

    #[test]
    fn test_output_matches_rect_dimensions() {
        let src = noise_png(200, 160);
        let out = crop_to_jpeg(
            &src,
            CropRect {
                x: 10,
                y: 10,
                width: 100,
                height: 125,
            },
        )
        .unwrap();

        let decoded = image::load_from_memory(&out).unwrap();
        assert_eq!(decoded.width(), 100);
        assert_eq!(decoded.height(), 125);
    }

    #[test]
    fn test_full_image_crop_is_pixel_identical_up_to_jpeg_loss() {
        let src = flat_png(64, 48);
        let out = crop_to_jpeg(
            &src,
            CropRect {
                x: 0,
                y: 0,
                width: 64,
                height: 48,
            },
        )
        .unwrap();

        let decoded = image::load_from_memory(&out).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (64, 48));
        for p in decoded.pixels() {
            assert!(channel_close(p[0], FILL[0]));
            assert!(channel_close(p[1], FILL[1]));
            assert!(channel_close(p[2], FILL[2]));
        }
    }

    #[test]
    fn test_out_of_bounds_rect_clips_without_panic() {
        let src = flat_png(200, 160);
        // reaches 100px past the right edge and 90px past the bottom
        let out = crop_to_jpeg(
            &src,
            CropRect {
                x: 150,
                y: 150,
                width: 100,
                height: 100,
            },
        )
        .unwrap();

        let decoded = image::load_from_memory(&out).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (100, 100));

        // covered corner keeps the source color
        let covered = decoded.get_pixel(10, 5);
        assert!(channel_close(covered[0], FILL[0]));

        // uncovered area stays at the background
        let uncovered = decoded.get_pixel(80, 60);
        assert!(channel_close(uncovered[0], 0));
        assert!(channel_close(uncovered[1], 0));
        assert!(channel_close(uncovered[2], 0));
    }

    #[test]
    fn test_fully_outside_rect_yields_background_surface() {
        let src = flat_png(50, 50);
        let out = crop_to_jpeg(
            &src,
            CropRect {
                x: 500,
                y: 500,
                width: 20,
                height: 20,
            },
        )
        .unwrap();
        let decoded = image::load_from_memory(&out).unwrap();
        assert_eq!(decoded.width(), 20);
        assert_eq!(decoded.height(), 20);
    }

    #[test]
    fn test_undecodable_input_is_a_decode_error() {
        let err = crop_to_jpeg(
            b"definitely not an image",
            CropRect {
                x: 0,
                y: 0,
                width: 10,
                height: 10,
            },
        )
        .unwrap_err();
        assert!(matches!(err, CropError::Decode(_)));
    }

    #[test]
    fn test_zero_area_rect_is_an_encode_error() {
        let src = flat_png(50, 50);
        let err = crop_to_jpeg(
            &src,
            CropRect {
                x: 0,
                y: 0,
                width: 0,
                height: 10,
            },
        )
        .unwrap_err();
        assert!(matches!(err, CropError::Encode(_)));
    }
}
