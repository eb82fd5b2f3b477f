//! Minimal decoder for verifying encoder output in tests.
//!
//! Handles exactly the opcodes the encoder produces and panics on anything
//! else, including malformed framing.

use super::header::{QOI_END_MARKER, QOI_HEADER_SIZE, QOI_MAGIC};
use super::index::ColorIndex;
use super::op::{QOI_OP_DIFF, QOI_OP_INDEX, QOI_OP_RGB, QOI_OP_RUN};
use crate::Pixel;

pub(crate) struct Decoded {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub colorspace: u8,
    pub pixels: Vec<Pixel>,
}

pub(crate) fn decode(bytes: &[u8]) -> Decoded {
    assert!(bytes.len() >= QOI_HEADER_SIZE + QOI_END_MARKER.len());
    assert_eq!(&bytes[0..4], &QOI_MAGIC);
    assert_eq!(&bytes[bytes.len() - 8..], &QOI_END_MARKER);

    let width = u32::from_be_bytes(bytes[4..8].try_into().unwrap());
    let height = u32::from_be_bytes(bytes[8..12].try_into().unwrap());
    let body = &bytes[QOI_HEADER_SIZE..bytes.len() - QOI_END_MARKER.len()];

    let mut index = ColorIndex::new();
    let mut prev = Pixel::ZERO;
    let mut pixels = Vec::with_capacity((width as usize) * (height as usize));
    let mut pos = 0;

    while pos < body.len() {
        let tag = body[pos];
        let (px, count, len) = if tag == QOI_OP_RGB {
            (Pixel::new(body[pos + 1], body[pos + 2], body[pos + 3]), 1, 4)
        } else {
            match tag & 0b1100_0000 {
                QOI_OP_INDEX => (index.lookup(tag), 1, 1),
                QOI_OP_DIFF => {
                    let d = |shift: u8| ((tag >> shift) & 0b11).wrapping_sub(2);
                    let px = Pixel::new(
                        prev.r.wrapping_add(d(4)),
                        prev.g.wrapping_add(d(2)),
                        prev.b.wrapping_add(d(0)),
                    );
                    (px, 1, 1)
                }
                QOI_OP_RUN => (prev, usize::from(tag & 0b0011_1111) + 1, 1),
                _ => panic!("unexpected opcode {tag:#010b} at offset {pos}"),
            }
        };

        pixels.extend(std::iter::repeat(px).take(count));
        index.store(ColorIndex::hash(px), px);
        prev = px;
        pos += len;
    }

    Decoded {
        width,
        height,
        channels: bytes[12],
        colorspace: bytes[13],
        pixels,
    }
}
