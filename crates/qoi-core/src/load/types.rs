//! Core types for loading source images.

use std::path::PathBuf;

use thiserror::Error;

use crate::encode::{self, EncodeError, EncodeStats};
use crate::{pixels_from_rgb, Pixel};

/// Error types for image loading operations.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file does not exist.
    #[error("File {} does not exist", .0.display())]
    NotFound(PathBuf),

    /// The file exists but cannot be read.
    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// The bytes are not a supported or intact image.
    #[error("Failed to decode image: {0}")]
    Decode(String),

    /// Any other I/O error while reading.
    #[error("I/O error: {0}")]
    Io(String),

    /// The decoded image has no pixels.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// A source image with RGB pixel data.
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length should be width * height * 3.
    pub pixels: Vec<u8>,
}

impl SourceImage {
    /// Create a new SourceImage with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len() as u64,
            u64::from(width) * u64::from(height) * 3,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a SourceImage from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// Pixels in row-major order.
    pub fn to_pixels(&self) -> Vec<Pixel> {
        pixels_from_rgb(&self.pixels).collect()
    }

    /// Encode this image as a QOI stream.
    pub fn encode_qoi(&self) -> Result<Vec<u8>, EncodeError> {
        encode::encode_qoi_rgb(&self.pixels, self.width, self.height)
    }

    /// Encode this image into `writer`, reporting progress after each row.
    pub fn encode_qoi_to<W, F>(&self, writer: &mut W, on_progress: F) -> Result<EncodeStats, EncodeError>
    where
        W: std::io::Write + ?Sized,
        F: FnMut(u64, u64),
    {
        encode::encode_qoi_rgb_to_with_progress(
            writer,
            &self.pixels,
            self.width,
            self.height,
            on_progress,
        )
    }
}
