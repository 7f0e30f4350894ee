//! The eight orientations of a square and their application to tiles
//!
//! An orientation is "rotate clockwise `k` times, then optionally flip the row
//! order". The eight combinations form the dihedral group of the square.

use std::fmt;

use crate::spatial::grid::{CellGrid, Edge};
use crate::spatial::tiles::{Tile, TileId};

/// One element of the dihedral group of the square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Orientation {
    rotations: u8,
    flipped: bool,
}

impl Orientation {
    /// The untransformed orientation
    pub const IDENTITY: Self = Self::new(0, false);

    /// All eight orientations in generation order
    ///
    /// Identity and its flip come first, followed by each further quarter
    /// turn and its flip.
    pub const ALL: [Self; 8] = [
        Self::new(0, false),
        Self::new(0, true),
        Self::new(1, false),
        Self::new(1, true),
        Self::new(2, false),
        Self::new(2, true),
        Self::new(3, false),
        Self::new(3, true),
    ];

    /// Orientation made of `rotations` clockwise quarter turns (taken modulo
    /// four) followed by an optional flip
    pub const fn new(rotations: u8, flipped: bool) -> Self {
        Self {
            rotations: rotations % 4,
            flipped,
        }
    }

    /// Number of clockwise quarter turns
    pub const fn rotations(self) -> u8 {
        self.rotations
    }

    /// Whether the row order is reversed after rotating
    pub const fn is_flipped(self) -> bool {
        self.flipped
    }

    /// Transform a grid into this orientation
    pub fn apply(self, grid: &CellGrid) -> CellGrid {
        let mut result = grid.clone();
        for _ in 0..self.rotations {
            result = result.rotate_90();
        }
        if self.flipped {
            result = result.flip();
        }
        result
    }

    /// Undo [`Orientation::apply`]
    pub fn invert(self, grid: &CellGrid) -> CellGrid {
        let mut result = if self.flipped {
            grid.flip()
        } else {
            grid.clone()
        };
        for _ in 0..(4 - self.rotations) % 4 {
            result = result.rotate_90();
        }
        result
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degrees = u16::from(self.rotations) * 90;
        if self.flipped {
            write!(f, "rot{degrees}+flip")
        } else {
            write!(f, "rot{degrees}")
        }
    }
}

/// A tile transformed into one orientation, with its edges cached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrientedTile {
    id: TileId,
    orientation: Orientation,
    grid: CellGrid,
    top: Edge,
    right: Edge,
    bottom: Edge,
    left: Edge,
}

impl OrientedTile {
    /// Transform a tile into the given orientation
    pub fn new(tile: &Tile, orientation: Orientation) -> Self {
        let grid = orientation.apply(tile.grid());
        Self {
            id: tile.id(),
            orientation,
            top: grid.top(),
            right: grid.right(),
            bottom: grid.bottom(),
            left: grid.left(),
            grid,
        }
    }

    /// Identifier of the source tile
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// Orientation applied to the source tile
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Transformed cells
    pub const fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// First row of the transformed grid
    pub const fn top(&self) -> &Edge {
        &self.top
    }

    /// Last column of the transformed grid
    pub const fn right(&self) -> &Edge {
        &self.right
    }

    /// Last row of the transformed grid
    pub const fn bottom(&self) -> &Edge {
        &self.bottom
    }

    /// First column of the transformed grid
    pub const fn left(&self) -> &Edge {
        &self.left
    }
}

/// All eight orientations of a tile, in [`Orientation::ALL`] order
pub fn transforms(tile: &Tile) -> Vec<OrientedTile> {
    transforms_with(tile, &Orientation::ALL)
}

/// The given orientations of a tile, in the order supplied
pub fn transforms_with(tile: &Tile, orientations: &[Orientation]) -> Vec<OrientedTile> {
    orientations
        .iter()
        .map(|&orientation| OrientedTile::new(tile, orientation))
        .collect()
}
