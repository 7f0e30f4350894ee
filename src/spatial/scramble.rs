//! Construction of solvable tile puzzles with known layouts
//!
//! Every seam between neighbouring tiles, and every outer border, carries its
//! own border code. Codes are never palindromes and no code is the reversal of
//! another, so each border pairs with exactly one neighbour in exactly one
//! relative orientation. Tile corners are always background cells so that the
//! four borders meeting at a corner agree.

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

use crate::io::configuration::{ACTIVE_CELL, BACKGROUND_CELL, MIN_TILE_SIDE};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::CellGrid;
use crate::spatial::tiles::{Tile, TileId};
use crate::spatial::transforms::Orientation;

// Widest border code enumerated; larger sides keep the extra cells as background
const MAX_CODE_BITS: usize = 16;

/// Builder for rows x cols puzzles of square tiles
#[derive(Debug, Clone)]
pub struct PuzzleBuilder {
    rows: usize,
    cols: usize,
    side: usize,
    first_id: TileId,
}

/// A generated puzzle together with its intended layout
#[derive(Debug, Clone)]
pub struct Puzzle {
    tiles: Vec<Tile>,
    layout: Vec<Vec<TileId>>,
}

impl PuzzleBuilder {
    /// Describe a puzzle of `rows` x `cols` tiles with `side` cells per edge
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero, the side is below
    /// [`MIN_TILE_SIDE`], or the side is too short to give every border a
    /// unique code
    pub fn new(rows: usize, cols: usize, side: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(invalid_parameter(
                "dimensions",
                &format!("{rows}x{cols}"),
                &"puzzle needs at least one tile",
            ));
        }
        if side < MIN_TILE_SIDE {
            return Err(invalid_parameter(
                "side",
                &side,
                &format!("tiles need at least {MIN_TILE_SIDE} cells per side"),
            ));
        }

        let builder = Self {
            rows,
            cols,
            side,
            first_id: 1001,
        };
        let available = border_codes(builder.code_bits(), builder.is_padded(), usize::MAX).len();
        if available < builder.border_count() {
            return Err(invalid_parameter(
                "side",
                &side,
                &format!(
                    "{} borders need unique codes but only {available} exist",
                    builder.border_count()
                ),
            ));
        }

        Ok(builder)
    }

    /// Number tiles consecutively from `first_id` in row-major order
    #[must_use]
    pub const fn with_first_id(mut self, first_id: TileId) -> Self {
        self.first_id = first_id;
        self
    }

    /// Tiles in row-major order, all in their original orientation
    ///
    /// # Errors
    ///
    /// Returns an error if a generated grid is rejected by [`Tile::new`]
    pub fn build(&self, seed: u64) -> Result<Puzzle> {
        let mut rng = StdRng::seed_from_u64(seed);
        let codes = border_codes(self.code_bits(), self.is_padded(), self.border_count());

        let mut tiles = Vec::with_capacity(self.rows * self.cols);
        let mut layout = Vec::with_capacity(self.rows);

        for row in 0..self.rows {
            let mut ids = Vec::with_capacity(self.cols);
            for col in 0..self.cols {
                let id = self.first_id + (row * self.cols + col) as TileId;
                let grid = self.tile_grid(&codes, row, col, &mut rng)?;
                tiles.push(Tile::new(id, grid)?);
                ids.push(id);
            }
            layout.push(ids);
        }

        Ok(Puzzle { tiles, layout })
    }

    /// Tiles in shuffled order, each in a random orientation
    ///
    /// # Errors
    ///
    /// Returns an error if a generated grid is rejected by [`Tile::new`]
    pub fn scrambled(&self, seed: u64) -> Result<Puzzle> {
        let mut puzzle = self.build(seed)?;
        let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));

        let mut tiles = Vec::with_capacity(puzzle.tiles.len());
        for tile in &puzzle.tiles {
            let orientation = Orientation::new(rng.random_range(0..4), rng.random_bool(0.5));
            tiles.push(Tile::new(tile.id(), orientation.apply(tile.grid()))?);
        }
        tiles.shuffle(&mut rng);

        puzzle.tiles = tiles;
        Ok(puzzle)
    }

    fn code_bits(&self) -> usize {
        (self.side - 2).min(MAX_CODE_BITS)
    }

    fn is_padded(&self) -> bool {
        self.side - 2 > MAX_CODE_BITS
    }

    fn border_count(&self) -> usize {
        (self.rows + 1) * self.cols + self.rows * (self.cols + 1)
    }

    fn horizontal_border(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn vertical_border(&self, row: usize, col: usize) -> usize {
        (self.rows + 1) * self.cols + row * (self.cols + 1) + col
    }

    fn edge_cells(&self, codes: &[u32], index: usize) -> Vec<u8> {
        let code = codes.get(index).copied().unwrap_or(0);
        let bits = self.code_bits();
        let mut cells = vec![BACKGROUND_CELL; self.side];
        for bit in 0..bits {
            if code & (1 << (bits - 1 - bit)) != 0
                && let Some(cell) = cells.get_mut(bit + 1)
            {
                *cell = ACTIVE_CELL;
            }
        }
        cells
    }

    fn tile_grid(
        &self,
        codes: &[u32],
        row: usize,
        col: usize,
        rng: &mut StdRng,
    ) -> Result<CellGrid> {
        let n = self.side;
        let mut cells = Array2::from_elem((n, n), BACKGROUND_CELL);

        for r in 1..n - 1 {
            for c in 1..n - 1 {
                if let Some(cell) = cells.get_mut((r, c)) {
                    *cell = if rng.random_bool(0.5) {
                        ACTIVE_CELL
                    } else {
                        BACKGROUND_CELL
                    };
                }
            }
        }

        let top = self.edge_cells(codes, self.horizontal_border(row, col));
        let bottom = self.edge_cells(codes, self.horizontal_border(row + 1, col));
        let left = self.edge_cells(codes, self.vertical_border(row, col));
        let right = self.edge_cells(codes, self.vertical_border(row, col + 1));

        for i in 0..n {
            let values = [
                ((0, i), top.get(i)),
                ((n - 1, i), bottom.get(i)),
                ((i, 0), left.get(i)),
                ((i, n - 1), right.get(i)),
            ];
            for (position, value) in values {
                if let (Some(cell), Some(&value)) = (cells.get_mut(position), value) {
                    *cell = value;
                }
            }
        }

        CellGrid::from_array(cells)
    }
}

/// Up to `limit` border codes of `bits` bits, none a palindrome and none the
/// reversal of another
///
/// Padded codes are followed by background cells, so they must start with an
/// active cell to stay asymmetric once the padding is included.
fn border_codes(bits: usize, padded: bool, limit: usize) -> Vec<u32> {
    let reverse = |code: u32| -> u32 {
        (0..bits).fold(0, |acc, bit| (acc << 1) | ((code >> bit) & 1))
    };

    let mut used = HashSet::new();
    let mut codes = Vec::new();
    for code in 1..(1u32 << bits) {
        if codes.len() >= limit {
            break;
        }
        let reversed = reverse(code);
        if reversed == code || used.contains(&code) || (padded && code >> (bits - 1) == 0) {
            continue;
        }
        used.insert(code);
        used.insert(reversed);
        codes.push(code);
    }
    codes
}

impl Puzzle {
    /// Tiles in input order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Intended arrangement of tile identifiers, row by row
    pub fn layout(&self) -> &[Vec<TileId>] {
        &self.layout
    }

    /// Identifiers at the four corners of the layout
    pub fn corner_ids(&self) -> Vec<TileId> {
        let first = self.layout.first();
        let last = self.layout.last();
        let mut corners = vec![
            first.and_then(|row| row.first()),
            first.and_then(|row| row.last()),
            last.and_then(|row| row.first()),
            last.and_then(|row| row.last()),
        ]
        .into_iter()
        .flatten()
        .copied()
        .collect::<Vec<_>>();
        corners.sort_unstable();
        corners.dedup();
        corners
    }

    /// The puzzle rendered in the text input format
    pub fn to_input(&self) -> String {
        let blocks: Vec<String> = self.tiles.iter().map(ToString::to_string).collect();
        format!("{}\n", blocks.join("\n\n"))
    }
}
