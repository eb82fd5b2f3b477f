//! Stream header and end-of-stream marker.

use std::io::Write;

use super::EncodeError;

/// ASCII magic identifying a QOI stream.
pub const QOI_MAGIC: [u8; 4] = *b"qoif";

/// Size of the encoded header in bytes.
pub const QOI_HEADER_SIZE: usize = 14;

/// End-of-stream marker: seven zero bytes followed by 0x01.
pub const QOI_END_MARKER: [u8; 8] = [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01];

/// Channel count written to every header (RGB, no alpha).
pub const QOI_CHANNELS_RGB: u8 = 3;

/// Colorspace tag written to every header (sRGB with linear alpha).
pub const QOI_COLORSPACE_SRGB: u8 = 0;

/// Validated image dimensions, ready to be written as a QOI header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QoiHeader {
    width: u32,
    height: u32,
}

impl QoiHeader {
    /// Create a header for a `width` x `height` image.
    ///
    /// # Errors
    ///
    /// Returns `EncodeError::InvalidDimensions` if either side is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, EncodeError> {
        if width == 0 || height == 0 {
            return Err(EncodeError::InvalidDimensions {
                width: width.into(),
                height: height.into(),
            });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels the opcode stream must describe.
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Serialize as magic, big-endian width and height, channels, colorspace.
    pub fn to_bytes(&self) -> [u8; QOI_HEADER_SIZE] {
        let mut bytes = [0u8; QOI_HEADER_SIZE];
        bytes[0..4].copy_from_slice(&QOI_MAGIC);
        bytes[4..8].copy_from_slice(&self.width.to_be_bytes());
        bytes[8..12].copy_from_slice(&self.height.to_be_bytes());
        bytes[12] = QOI_CHANNELS_RGB;
        bytes[13] = QOI_COLORSPACE_SRGB;
        bytes
    }

    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.to_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_layout_3x2() {
        let header = QoiHeader::new(3, 2).unwrap();
        assert_eq!(
            header.to_bytes(),
            [b'q', b'o', b'i', b'f', 0, 0, 0, 3, 0, 0, 0, 2, 3, 0]
        );
    }

    #[test]
    fn test_header_big_endian_dimensions() {
        let header = QoiHeader::new(0x0102_0304, 0xA0B0_C0D0).unwrap();
        let bytes = header.to_bytes();
        assert_eq!(&bytes[4..8], &[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(&bytes[8..12], &[0xA0, 0xB0, 0xC0, 0xD0]);
    }

    #[test]
    fn test_header_zero_width() {
        let result = QoiHeader::new(0, 10);
        assert!(matches!(
            result,
            Err(EncodeError::InvalidDimensions {
                width: 0,
                height: 10
            })
        ));
    }

    #[test]
    fn test_header_zero_height() {
        let result = QoiHeader::new(10, 0);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_header_write_to() {
        let header = QoiHeader::new(1, 1).unwrap();
        let mut out = Vec::new();
        header.write_to(&mut out).unwrap();
        assert_eq!(out.len(), QOI_HEADER_SIZE);
        assert_eq!(&out[0..4], b"qoif");
    }

    #[test]
    fn test_end_marker() {
        assert_eq!(QOI_END_MARKER.len(), 8);
        assert_eq!(QOI_END_MARKER[7], 1);
        assert!(QOI_END_MARKER[..7].iter().all(|&b| b == 0));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: dimensions land big-endian at offsets 4..12, framed by
        /// the magic and the fixed channel/colorspace bytes.
        #[test]
        fn prop_header_layout(width in 1u32..=u32::MAX, height in 1u32..=u32::MAX) {
            let bytes = QoiHeader::new(width, height).unwrap().to_bytes();
            prop_assert_eq!(&bytes[0..4], b"qoif");
            prop_assert_eq!(&bytes[4..8], &width.to_be_bytes());
            prop_assert_eq!(&bytes[8..12], &height.to_be_bytes());
            prop_assert_eq!(bytes[12], QOI_CHANNELS_RGB);
            prop_assert_eq!(bytes[13], QOI_COLORSPACE_SRGB);
        }

        /// Property: a zero side is always rejected.
        #[test]
        fn prop_zero_side_rejected(side in any::<u32>(), zero_width in any::<bool>()) {
            let result = if zero_width {
                QoiHeader::new(0, side)
            } else {
                QoiHeader::new(side, 0)
            };
            let is_invalid = matches!(result, Err(EncodeError::InvalidDimensions { .. }));
            prop_assert!(is_invalid);
        }
    }
}
