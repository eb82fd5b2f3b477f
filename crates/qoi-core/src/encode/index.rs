//! The 64-slot color index shared (by construction) between encoder and decoder.

use crate::Pixel;

/// Number of slots in the color index.
pub const INDEX_SIZE: usize = 64;

/// Array-backed cache of recently seen colors, addressed by [`ColorIndex::hash`].
///
/// Slot `h` always holds the most recently stored pixel whose hash is `h`,
/// or black if nothing has hashed there yet.
#[derive(Debug, Clone)]
pub struct ColorIndex {
    slots: [Pixel; INDEX_SIZE],
}

impl Default for ColorIndex {
    fn default() -> Self {
        Self {
            slots: [Pixel::ZERO; INDEX_SIZE],
        }
    }
}

impl ColorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(3r + 5g + 7b + 255 * 11) mod 64`.
    ///
    /// The alpha term of the full format is folded in as a constant since
    /// alpha is always 255.
    #[inline]
    pub fn hash(pixel: Pixel) -> u8 {
        let sum = u32::from(pixel.r) * 3
            + u32::from(pixel.g) * 5
            + u32::from(pixel.b) * 7
            + 255 * 11;
        (sum % INDEX_SIZE as u32) as u8
    }

    /// Color stored at `index`. Only the low six bits of `index` are used.
    #[inline]
    pub fn lookup(&self, index: u8) -> Pixel {
        self.slots[usize::from(index) % INDEX_SIZE]
    }

    #[inline]
    pub fn store(&mut self, index: u8, pixel: Pixel) {
        self.slots[usize::from(index) % INDEX_SIZE] = pixel;
    }
}
