//! Core types for QOI encoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::op::Op;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero or does not fit in 32 bits
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero 32-bit values")]
    InvalidDimensions { width: u64, height: u64 },

    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} values, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// A channel value outside 0-255
    #[error("Invalid pixel value: channel {channel} is {value}, must be 0-255")]
    InvalidPixelValue { channel: char, value: i64 },

    /// The byte sink rejected a write
    #[error("Failed to write encoded bytes: {0}")]
    SinkWriteFailure(#[from] std::io::Error),
}

/// Opcode counts for a finished encode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeStats {
    /// Pixels in the image.
    pub pixel_count: u64,
    /// Run opcodes emitted.
    pub runs: u64,
    /// Pixels covered by run opcodes.
    pub run_pixels: u64,
    /// Index opcodes emitted.
    pub indexed: u64,
    /// Diff opcodes emitted.
    pub diffs: u64,
    /// Literal RGB opcodes emitted.
    pub literals: u64,
    /// Total stream size including header and end marker.
    pub bytes_written: u64,
}

impl EncodeStats {
    pub(crate) fn record(&mut self, op: &Op) {
        match op {
            Op::Run(n) => {
                self.runs += 1;
                self.run_pixels += u64::from(*n);
            }
            Op::Index(_) => self.indexed += 1,
            Op::Diff { .. } => self.diffs += 1,
            Op::Rgb(_) => self.literals += 1,
        }
        self.bytes_written += op.len() as u64;
    }

    /// Total opcodes emitted.
    pub fn op_count(&self) -> u64 {
        self.runs + self.indexed + self.diffs + self.literals
    }

    /// Output size relative to raw 3-byte-per-pixel storage.
    pub fn compression_ratio(&self) -> f64 {
        if self.pixel_count == 0 {
            return 0.0;
        }
        self.bytes_written as f64 / (self.pixel_count as f64 * 3.0)
    }
}
