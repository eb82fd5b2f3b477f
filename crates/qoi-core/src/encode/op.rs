//! Opcodes and their byte layout.

use std::io::Write;

use crate::Pixel;

/// `00xxxxxx`: index into the color table.
pub const QOI_OP_INDEX: u8 = 0b0000_0000;
/// `01rrggbb`: biased per-channel difference.
pub const QOI_OP_DIFF: u8 = 0b0100_0000;
/// `11xxxxxx`: run of the previous pixel, length biased by -1.
pub const QOI_OP_RUN: u8 = 0b1100_0000;
/// `11111110` followed by r, g, b.
pub const QOI_OP_RGB: u8 = 0b1111_1110;

/// Longest run a single run opcode can carry. 63 and 64 would collide with
/// the RGB and RGBA tags.
pub const MAX_RUN: u8 = 62;

/// Bias added to each diff channel so [-2, 1] packs into two bits.
const DIFF_BIAS: i8 = 2;

/// A single emitted opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `n` repeats of the previous pixel, 1..=62.
    Run(u8),
    /// Reference to a color index slot, 0..=63.
    Index(u8),
    /// Per-channel wrapped deltas, each in [-2, 1].
    Diff { dr: i8, dg: i8, db: i8 },
    /// Raw color.
    Rgb(Pixel),
}

impl Op {
    /// Encoded size in bytes.
    pub fn len(&self) -> usize {
        match self {
            Op::Run(_) | Op::Index(_) | Op::Diff { .. } => 1,
            Op::Rgb(_) => 4,
        }
    }

    /// Always false; every opcode has at least its tag byte.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Encoded bytes, left-aligned in a 4-byte buffer. Only the first
    /// [`Op::len`] bytes are meaningful.
    pub fn to_bytes(&self) -> [u8; 4] {
        match *self {
            Op::Run(n) => {
                debug_assert!((1..=MAX_RUN).contains(&n));
                [QOI_OP_RUN | (n - 1), 0, 0, 0]
            }
            Op::Index(index) => {
                debug_assert!(index < 64);
                [QOI_OP_INDEX | (index & 0b0011_1111), 0, 0, 0]
            }
            Op::Diff { dr, dg, db } => {
                let pack = |d: i8| ((d + DIFF_BIAS) as u8) & 0b11;
                [
                    QOI_OP_DIFF | (pack(dr) << 4) | (pack(dg) << 2) | pack(db),
                    0,
                    0,
                    0,
                ]
            }
            Op::Rgb(px) => [QOI_OP_RGB, px.r, px.g, px.b],
        }
    }

    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.to_bytes()[..self.len()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(op: Op) -> Vec<u8> {
        let mut out = Vec::new();
        op.write_to(&mut out).unwrap();
        out
    }

    #[test]
    fn test_run_bias() {
        assert_eq!(bytes(Op::Run(1)), vec![0b1100_0000]);
        assert_eq!(bytes(Op::Run(62)), vec![0b1111_1101]);
    }

    #[test]
    fn test_run_never_collides_with_rgb_tag() {
        for n in 1..=MAX_RUN {
            assert_ne!(bytes(Op::Run(n))[0], QOI_OP_RGB);
            assert_ne!(bytes(Op::Run(n))[0], 0xFF);
        }
    }

    #[test]
    fn test_index_is_raw_slot() {
        assert_eq!(bytes(Op::Index(0)), vec![0]);
        assert_eq!(bytes(Op::Index(63)), vec![63]);
    }

    #[test]
    fn test_diff_packing() {
        // dr=+1 -> 3, dg=-2 -> 0, db=+1 -> 3
        assert_eq!(
            bytes(Op::Diff {
                dr: 1,
                dg: -2,
                db: 1
            }),
            vec![0b0111_0011]
        );
        // No change: 2, 2, 2
        assert_eq!(
            bytes(Op::Diff {
                dr: 0,
                dg: 0,
                db: 0
            }),
            vec![0b0110_1010]
        );
    }

    #[test]
    fn test_rgb_literal() {
        assert_eq!(
            bytes(Op::Rgb(Pixel::new(10, 20, 30))),
            vec![254, 10, 20, 30]
        );
    }

    #[test]
    fn test_len_matches_written_bytes() {
        let ops = [
            Op::Run(5),
            Op::Index(12),
            Op::Diff {
                dr: -1,
                dg: 0,
                db: 1,
            },
            Op::Rgb(Pixel::new(1, 2, 3)),
        ];
        for op in ops {
            assert_eq!(bytes(op).len(), op.len());
        }
    }
}
