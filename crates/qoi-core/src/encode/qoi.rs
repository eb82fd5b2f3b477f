//! Single-pass QOI encoding of RGB pixel buffers.
//!
//! Output layout: 14-byte header, one opcode per pixel (runs grouped), and the
//! 8-byte end marker. Validation happens before the first byte reaches the
//! sink; a sink error aborts the pass and the partial output is invalid.

use std::io::Write;

use super::encoder::PixelEncoder;
use super::header::{QoiHeader, QOI_END_MARKER, QOI_HEADER_SIZE};
use super::{EncodeError, EncodeStats};
use crate::{pixels_from_rgb, Pixel};

/// Encode pixels to an in-memory QOI stream.
///
/// # Arguments
///
/// * `pixels` - RGB pixels in row-major order, `width * height` of them
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Errors
///
/// Returns `InvalidDimensions` for a zero side and `InvalidPixelData` if the
/// pixel count doesn't match.
///
/// # Example
///
/// ```ignore
/// use qoi_core::{encode_qoi, Pixel};
///
/// let pixels = vec![Pixel::new(255, 0, 0); 4];
/// let qoi = encode_qoi(&pixels, 2, 2).unwrap();
/// assert_eq!(&qoi[0..4], b"qoif");
/// ```
pub fn encode_qoi(pixels: &[Pixel], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    // Worst case is a literal per pixel
    let capacity = QOI_HEADER_SIZE + pixels.len().saturating_mul(4) + QOI_END_MARKER.len();
    let mut buffer = Vec::with_capacity(capacity);
    encode_qoi_to(&mut buffer, pixels, width, height)?;
    Ok(buffer)
}

/// Encode interleaved RGB bytes (3 per pixel, row-major) to a QOI stream.
///
/// This is the layout produced by [`crate::load::SourceImage`].
pub fn encode_qoi_rgb(rgb: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    let capacity = QOI_HEADER_SIZE + (rgb.len() / 3).saturating_mul(4) + QOI_END_MARKER.len();
    let mut buffer = Vec::with_capacity(capacity);
    encode_qoi_rgb_to(&mut buffer, rgb, width, height)?;
    Ok(buffer)
}

/// Encode interleaved RGB bytes into `writer`, returning opcode statistics.
pub fn encode_qoi_rgb_to<W: Write + ?Sized>(
    writer: &mut W,
    rgb: &[u8],
    width: u32,
    height: u32,
) -> Result<EncodeStats, EncodeError> {
    encode_qoi_rgb_to_with_progress(writer, rgb, width, height, |_, _| {})
}

/// Like [`encode_qoi_rgb_to`], calling `on_progress(pixels_done, pixels_total)`
/// after every completed row. Pixels are read straight out of `rgb`.
pub fn encode_qoi_rgb_to_with_progress<W, F>(
    writer: &mut W,
    rgb: &[u8],
    width: u32,
    height: u32,
    on_progress: F,
) -> Result<EncodeStats, EncodeError>
where
    W: Write + ?Sized,
    F: FnMut(u64, u64),
{
    let header = QoiHeader::new(width, height)?;
    let expected = expected_pixel_count(&header)?
        .checked_mul(3)
        .ok_or(EncodeError::InvalidDimensions {
            width: width.into(),
            height: height.into(),
        })?;
    if rgb.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: rgb.len(),
        });
    }

    encode_pixels(writer, &header, pixels_from_rgb(rgb), on_progress)
}

/// Encode pixels into `writer`, returning opcode statistics.
///
/// Bytes are written opcode by opcode; wrap unbuffered sinks in a
/// `BufWriter`. The writer is flushed after the end marker.
pub fn encode_qoi_to<W: Write + ?Sized>(
    writer: &mut W,
    pixels: &[Pixel],
    width: u32,
    height: u32,
) -> Result<EncodeStats, EncodeError> {
    encode_qoi_to_with_progress(writer, pixels, width, height, |_, _| {})
}

/// Like [`encode_qoi_to`], calling `on_progress(pixels_done, pixels_total)`
/// after every completed row.
pub fn encode_qoi_to_with_progress<W, F>(
    writer: &mut W,
    pixels: &[Pixel],
    width: u32,
    height: u32,
    on_progress: F,
) -> Result<EncodeStats, EncodeError>
where
    W: Write + ?Sized,
    F: FnMut(u64, u64),
{
    let header = validate(pixels, width, height)?;
    encode_pixels(writer, &header, pixels.iter().copied(), on_progress)
}

/// The encode pass proper. `pixels` must yield exactly
/// `header.pixel_count()` items; callers validate before calling.
fn encode_pixels<W, I, F>(
    writer: &mut W,
    header: &QoiHeader,
    pixels: I,
    mut on_progress: F,
) -> Result<EncodeStats, EncodeError>
where
    W: Write + ?Sized,
    I: Iterator<Item = Pixel>,
    F: FnMut(u64, u64),
{
    header.write_to(writer)?;
    log::debug!(
        "wrote QOI header for {}x{} image",
        header.width(),
        header.height()
    );

    let mut stats = EncodeStats {
        pixel_count: header.pixel_count(),
        bytes_written: QOI_HEADER_SIZE as u64,
        ..Default::default()
    };
    let total = header.pixel_count();
    let row_len = u64::from(header.width());
    let mut done = 0u64;
    let mut encoder = PixelEncoder::new();

    for pixel in pixels {
        for op in encoder.push(pixel).ops() {
            op.write_to(writer)?;
            stats.record(&op);
        }
        done += 1;
        if done % row_len == 0 {
            on_progress(done, total);
        }
    }

    if let Some(run) = encoder.finish() {
        run.write_to(writer)?;
        stats.record(&run);
    }

    writer.write_all(&QOI_END_MARKER)?;
    writer.flush()?;
    stats.bytes_written += QOI_END_MARKER.len() as u64;

    log::debug!(
        "encoded {} pixels into {} bytes ({} runs, {} index, {} diff, {} literal)",
        stats.pixel_count,
        stats.bytes_written,
        stats.runs,
        stats.indexed,
        stats.diffs,
        stats.literals
    );

    Ok(stats)
}

fn validate(pixels: &[Pixel], width: u32, height: u32) -> Result<QoiHeader, EncodeError> {
    let header = QoiHeader::new(width, height)?;
    let expected = expected_pixel_count(&header)?;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }
    Ok(header)
}

/// `width * height` as a buffer length, rejecting sizes the platform can't address.
fn expected_pixel_count(header: &QoiHeader) -> Result<usize, EncodeError> {
    usize::try_from(header.pixel_count()).map_err(|_| EncodeError::InvalidDimensions {
        width: header.width().into(),
        height: header.height().into(),
    })
}


// ============================================================================
// Property-Based Tests
// ============================================================================
