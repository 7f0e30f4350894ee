use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset recording which source tiles have been placed
///
/// Indexed by the tile's position in the input, so membership tests during
/// the placement search are O(1).
#[derive(Clone, Debug)]
pub struct TileBitset {
    bits: BitVec,
}

impl TileBitset {
    /// Create a bitset with room for `tile_count` tiles, none present
    pub fn new(tile_count: usize) -> Self {
        Self {
            bits: bitvec![0; tile_count],
        }
    }

    /// Mark a tile index as present; returns `false` if it already was or is
    /// out of range
    pub fn insert(&mut self, index: usize) -> bool {
        match self.bits.get(index).map(|bit| *bit) {
            Some(false) => {
                self.bits.set(index, true);
                true
            }
            _ => false,
        }
    }

    /// Test tile membership
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Number of tiles present
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Capacity in tiles
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Test whether every tile is present
    pub fn is_full(&self) -> bool {
        self.bits.all()
    }

    /// Indices of absent tiles in ascending order
    pub fn missing(&self) -> Vec<usize> {
        self.bits.iter_zeros().collect()
    }
}

impl fmt::Display for TileBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TileBitset({}/{} tiles)", self.count(), self.capacity())
    }
}
