//! QOI Core - RGB encoder for the Quite OK Image format
//!
//! This crate provides the encoding pipeline: the stream header, the 64-slot
//! color index, the per-pixel opcode state machine, and a pixel source that
//! turns common image files into RGB pixel buffers.

pub mod encode;
pub mod load;

pub use encode::{encode_qoi, encode_qoi_rgb, encode_qoi_to, EncodeError, EncodeStats};
pub use load::{decode_image, load_image, LoadError, SourceImage};

/// An RGB pixel with 8 bits per channel.
///
/// There is no alpha channel; the encoder always emits 3-channel streams.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Pixel {
    /// Red channel (0 to 255)
    pub r: u8,
    /// Green channel (0 to 255)
    pub g: u8,
    /// Blue channel (0 to 255)
    pub b: u8,
}

impl Pixel {
    /// Black, the starting value for both the previous pixel and every index slot.
    pub const ZERO: Pixel = Pixel::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels in `[r, g, b]` order.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Pixel {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<image::Rgb<u8>> for Pixel {
    fn from(rgb: image::Rgb<u8>) -> Self {
        Self::from(rgb.0)
    }
}

/// Boundary conversion for callers holding wider integer channels.
///
/// Any channel outside 0..=255 is rejected with `InvalidPixelValue`.
impl TryFrom<(i64, i64, i64)> for Pixel {
    type Error = EncodeError;

    fn try_from((r, g, b): (i64, i64, i64)) -> Result<Self, Self::Error> {
        let channel = |name: char, value: i64| {
            u8::try_from(value).map_err(|_| EncodeError::InvalidPixelValue {
                channel: name,
                value,
            })
        };
        Ok(Self {
            r: channel('r', r)?,
            g: channel('g', g)?,
            b: channel('b', b)?,
        })
    }
}

/// View an interleaved RGB byte buffer as pixels.
///
/// Trailing bytes that do not form a whole pixel are ignored; callers
/// validate the buffer length first.
pub fn pixels_from_rgb(bytes: &[u8]) -> impl Iterator<Item = Pixel> + '_ {
    bytes
        .chunks_exact(3)
        .map(|chunk| Pixel::new(chunk[0], chunk[1], chunk[2]))
}
