//! Bitboard storage for one color

/// One bit per cell, row-major.
///
/// Sized at construction, so one type serves every board size.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bitboard {
    bits: Vec<u64>,
}

impl Bitboard {
    /// Create an empty bitboard able to hold `cells` bits
    pub fn new(cells: usize) -> Self {
        Self {
            bits: vec![0; cells.div_ceil(64)],
        }
    }

    /// Set a bit at index
    #[inline]
    pub fn set(&mut self, idx: usize) {
        if let Some(word) = self.bits.get_mut(idx / 64) {
            *word |= 1u64 << (idx % 64);
        }
    }

    /// Clear a bit at index
    #[inline]
    pub fn clear(&mut self, idx: usize) {
        if let Some(word) = self.bits.get_mut(idx / 64) {
            *word &= !(1u64 << (idx % 64));
        }
    }

    /// Check if bit is set at index; indices past the end read as clear
    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        self.bits
            .get(idx / 64)
            .is_some_and(|word| (word >> (idx % 64)) & 1 == 1)
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }
}
