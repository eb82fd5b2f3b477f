//! Per-pixel opcode selection.
//!
//! [`PixelEncoder`] owns all mutable encoding state (previous pixel, pending
//! run, color index). Each call to [`PixelEncoder::push`] classifies the
//! pixel into a [`Decision`], applies its state transition, and returns the
//! opcodes that became final.

use super::index::ColorIndex;
use super::op::{Op, MAX_RUN};
use crate::Pixel;

/// Which representation a pixel gets, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Same as the previous pixel; extends the pending run.
    Run,
    /// Present in the color index at this slot.
    Index(u8),
    /// Within [-2, 1] of the previous pixel on every channel.
    Diff { dr: i8, dg: i8, db: i8 },
    /// None of the above.
    Literal,
}

impl Decision {
    /// The opcode this decision emits for `pixel`, or `None` for a run
    /// (runs are emitted when they end).
    pub fn op(self, pixel: Pixel) -> Option<Op> {
        match self {
            Decision::Run => None,
            Decision::Index(slot) => Some(Op::Index(slot)),
            Decision::Diff { dr, dg, db } => Some(Op::Diff { dr, dg, db }),
            Decision::Literal => Some(Op::Rgb(pixel)),
        }
    }
}

/// Opcodes finalized by a single [`PixelEncoder::push`], in stream order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Step {
    /// A run that ended before this pixel.
    pub flushed_run: Option<Op>,
    /// The opcode for this pixel itself, unless it joined a run.
    pub op: Option<Op>,
}

impl Step {
    pub fn ops(&self) -> impl Iterator<Item = Op> {
        self.flushed_run.into_iter().chain(self.op)
    }
}

/// Encoder state for a single image.
#[derive(Debug, Clone)]
pub struct PixelEncoder {
    index: ColorIndex,
    last_pixel: Pixel,
    run_length: u8,
}

impl Default for PixelEncoder {
    fn default() -> Self {
        Self {
            index: ColorIndex::new(),
            last_pixel: Pixel::ZERO,
            run_length: 0,
        }
    }
}

impl PixelEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_pixel(&self) -> Pixel {
        self.last_pixel
    }

    /// Repeats of the previous pixel not yet emitted.
    pub fn run_length(&self) -> u8 {
        self.run_length
    }

    pub fn index(&self) -> &ColorIndex {
        &self.index
    }

    /// Classify `pixel` against the current state without changing it.
    pub fn decide(&self, pixel: Pixel) -> Decision {
        if pixel == self.last_pixel {
            return Decision::Run;
        }

        let slot = ColorIndex::hash(pixel);
        if self.index.lookup(slot) == pixel {
            return Decision::Index(slot);
        }

        match small_diff(self.last_pixel, pixel) {
            Some((dr, dg, db)) => Decision::Diff { dr, dg, db },
            None => Decision::Literal,
        }
    }

    /// Feed the next pixel in row-major order.
    pub fn push(&mut self, pixel: Pixel) -> Step {
        let decision = self.decide(pixel);

        // A full run is flushed and the repeat starts a fresh one.
        let flushed_run = match decision {
            Decision::Run if self.run_length < MAX_RUN => None,
            _ => self.take_run(),
        };

        let op = decision.op(pixel);
        match decision {
            Decision::Run => self.run_length += 1,
            Decision::Index(_) => self.last_pixel = pixel,
            Decision::Diff { .. } | Decision::Literal => {
                self.index.store(ColorIndex::hash(pixel), pixel);
                self.last_pixel = pixel;
            }
        }

        Step { flushed_run, op }
    }

    /// Flush the pending run, if any. Must be called after the last pixel.
    pub fn finish(&mut self) -> Option<Op> {
        self.take_run()
    }

    fn take_run(&mut self) -> Option<Op> {
        if self.run_length == 0 {
            return None;
        }
        let run = Op::Run(self.run_length);
        self.run_length = 0;
        Some(run)
    }
}

/// Wrapped per-channel deltas from `prev` to `pixel`, if all lie in [-2, 1].
fn small_diff(prev: Pixel, pixel: Pixel) -> Option<(i8, i8, i8)> {
    let delta = |cur: u8, old: u8| cur.wrapping_sub(old) as i8;
    let dr = delta(pixel.r, prev.r);
    let dg = delta(pixel.g, prev.g);
    let db = delta(pixel.b, prev.b);

    let fits = |d: i8| (-2..=1).contains(&d);
    (fits(dr) && fits(dg) && fits(db)).then_some((dr, dg, db))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoder_after(pixels: &[Pixel]) -> PixelEncoder {
        let mut enc = PixelEncoder::new();
        for &px in pixels {
            enc.push(px);
        }
        enc
    }

    #[test]
    fn test_initial_state() {
        let enc = PixelEncoder::new();
        assert_eq!(enc.last_pixel(), Pixel::ZERO);
        assert_eq!(enc.run_length(), 0);
    }

    #[test]
    fn test_first_black_pixel_starts_run() {
        let mut enc = PixelEncoder::new();
        let step = enc.push(Pixel::ZERO);
        assert_eq!(step, Step::default());
        assert_eq!(enc.run_length(), 1);
        assert_eq!(enc.finish(), Some(Op::Run(1)));
        assert_eq!(enc.finish(), None);
    }

    #[test]
    fn test_decide_priority() {
        let enc = encoder_after(&[Pixel::new(10, 10, 10)]);
        assert_eq!(enc.decide(Pixel::new(10, 10, 10)), Decision::Run);
        assert_eq!(
            enc.decide(Pixel::new(11, 8, 11)),
            Decision::Diff {
                dr: 1,
                dg: -2,
                db: 1
            }
        );
        assert_eq!(enc.decide(Pixel::new(12, 8, 11)), Decision::Literal);
        // Black is still in its initial slot
        assert_eq!(
            enc.decide(Pixel::ZERO),
            Decision::Index(ColorIndex::hash(Pixel::ZERO))
        );
    }

    #[test]
    fn test_index_beats_diff() {
        // (1,1,1) is stored on its literal/diff emission, then we move away
        // by a small diff and come back: index must win over diff.
        let a = Pixel::new(1, 1, 1);
        let b = Pixel::new(2, 1, 1);
        let enc = encoder_after(&[a, b]);
        assert_eq!(enc.decide(a), Decision::Index(ColorIndex::hash(a)));
    }

    #[test]
    fn test_run_flushed_before_pixel_op() {
        let a = Pixel::new(100, 100, 100);
        let mut enc = encoder_after(&[a, a, a]);
        assert_eq!(enc.run_length(), 2);

        let step = enc.push(Pixel::new(0, 0, 200));
        assert_eq!(step.flushed_run, Some(Op::Run(2)));
        assert_eq!(step.op, Some(Op::Rgb(Pixel::new(0, 0, 200))));
        assert_eq!(enc.run_length(), 0);
        let ops: Vec<Op> = step.ops().collect();
        assert_eq!(ops, vec![Op::Run(2), Op::Rgb(Pixel::new(0, 0, 200))]);
    }

    #[test]
    fn test_run_cap_starts_new_run() {
        let a = Pixel::new(7, 7, 7);
        let mut enc = encoder_after(&[a]);
        for _ in 0..MAX_RUN {
            assert_eq!(enc.push(a), Step::default());
        }
        assert_eq!(enc.run_length(), MAX_RUN);

        let step = enc.push(a);
        assert_eq!(step.flushed_run, Some(Op::Run(MAX_RUN)));
        assert_eq!(step.op, None);
        assert_eq!(enc.run_length(), 1);
    }

    #[test]
    fn test_literal_updates_index() {
        let px = Pixel::new(200, 13, 77);
        let enc = encoder_after(&[px]);
        assert_eq!(enc.index().lookup(ColorIndex::hash(px)), px);
        assert_eq!(enc.last_pixel(), px);
    }

    #[test]
    fn test_diff_updates_index() {
        let px = Pixel::new(1, 0, 255);
        let mut enc = PixelEncoder::new();
        // 255 - 0 wraps to -1
        let step = enc.push(px);
        assert_eq!(
            step.op,
            Some(Op::Diff {
                dr: 1,
                dg: 0,
                db: -1
            })
        );
        assert_eq!(enc.index().lookup(ColorIndex::hash(px)), px);
    }

    #[test]
    fn test_small_diff_bounds() {
        let base = Pixel::new(10, 10, 10);
        assert_eq!(
            small_diff(base, Pixel::new(8, 11, 10)),
            Some((-2, 1, 0))
        );
        assert_eq!(small_diff(base, Pixel::new(12, 10, 10)), None);
        assert_eq!(small_diff(base, Pixel::new(10, 7, 10)), None);
    }

    #[test]
    fn test_small_diff_wraps() {
        assert_eq!(
            small_diff(Pixel::new(255, 0, 254), Pixel::new(0, 254, 255)),
            Some((1, -2, 1))
        );
    }
}
