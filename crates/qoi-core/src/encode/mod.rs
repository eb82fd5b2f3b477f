//! QOI encoding pipeline.
//!
//! This module provides:
//! - The 14-byte stream header and 8-byte end marker
//! - The 64-slot color index
//! - The per-pixel opcode state machine (run, index, diff, literal)
//! - Buffer and sink entry points with opcode statistics
//!
//! # Architecture
//!
//! Encoding is a single synchronous pass. All state lives in one
//! [`PixelEncoder`] owned by the call, so independent images can be encoded
//! on separate threads without coordination.
//!
//! # Examples
//!
//! ```ignore
//! use qoi_core::encode::encode_qoi_rgb;
//!
//! let rgb = vec![128u8; 100 * 100 * 3]; // Gray image
//! let qoi_bytes = encode_qoi_rgb(&rgb, 100, 100).unwrap();
//! println!("Encoded {} bytes", qoi_bytes.len());
//! ```

mod encoder;
mod header;
mod index;
mod op;
mod qoi;
mod types;

#[cfg(test)]
mod test_decoder;

pub use encoder::{Decision, PixelEncoder, Step};
pub use header::{
    QoiHeader, QOI_CHANNELS_RGB, QOI_COLORSPACE_SRGB, QOI_END_MARKER, QOI_HEADER_SIZE, QOI_MAGIC,
};
pub use index::{ColorIndex, INDEX_SIZE};
pub use op::{Op, MAX_RUN, QOI_OP_DIFF, QOI_OP_INDEX, QOI_OP_RGB, QOI_OP_RUN};
pub use qoi::{
    encode_qoi, encode_qoi_rgb, encode_qoi_rgb_to, encode_qoi_rgb_to_with_progress, encode_qoi_to,
    encode_qoi_to_with_progress,
};
pub use types::{EncodeError, EncodeStats};
