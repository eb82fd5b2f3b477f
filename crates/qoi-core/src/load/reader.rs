//! Reading image files into RGB pixel buffers via the `image` crate.

use std::io::{Cursor, ErrorKind};
use std::path::Path;

use image::ImageReader;

use super::{LoadError, SourceImage};

/// Read and decode the image at `path`.
///
/// # Errors
///
/// Returns `LoadError::NotFound` or `LoadError::PermissionDenied` for the
/// matching I/O failures, and `LoadError::Decode` if the file isn't an image
/// the `image` crate can read.
pub fn load_image(path: &Path) -> Result<SourceImage, LoadError> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => LoadError::PermissionDenied(path.to_path_buf()),
        _ => LoadError::Io(format!("{}: {}", path.display(), e)),
    })?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    decode_image(&bytes)
}

/// Decode image bytes of any enabled format into RGB8.
///
/// The format is guessed from the content. Alpha is discarded.
pub fn decode_image(bytes: &[u8]) -> Result<SourceImage, LoadError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| LoadError::Decode(e.to_string()))?;

    let img = reader
        .decode()
        .map_err(|e| LoadError::Decode(e.to_string()))?;

    let rgb = img.into_rgb8();
    let (width, height) = rgb.dimensions();
    if width == 0 || height == 0 {
        return Err(LoadError::InvalidDimensions { width, height });
    }
    Ok(SourceImage::from_rgb_image(rgb))
}
