//! Tile data structures and parsing of tile blocks
//!
//! Input is a sequence of blocks separated by blank lines. Each block starts
//! with a `Tile <id>:` header followed by the square grid rows.

use std::collections::HashSet;
use std::fmt;

use crate::io::configuration::{MIN_TILE_SIDE, TILE_HEADER_PREFIX};
use crate::io::error::{AssemblyError, Result, malformed_tile};
use crate::spatial::grid::{CellGrid, Edge};

/// Tile identifier as written in the block header
pub type TileId = u64;

/// A square character grid with its identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    grid: CellGrid,
}

impl Tile {
    /// Create a tile from a square grid
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is not square or smaller than
    /// [`MIN_TILE_SIDE`]
    pub fn new(id: TileId, grid: CellGrid) -> Result<Self> {
        if grid.rows() != grid.cols() {
            return Err(AssemblyError::InvalidParameter {
                parameter: "grid",
                value: format!("{}x{}", grid.rows(), grid.cols()),
                reason: format!("tile {id} is not square"),
            });
        }
        if grid.rows() < MIN_TILE_SIDE {
            return Err(AssemblyError::InvalidParameter {
                parameter: "grid",
                value: grid.rows().to_string(),
                reason: format!("tile {id} is smaller than {MIN_TILE_SIDE} cells per side"),
            });
        }
        Ok(Self { id, grid })
    }

    /// Tile identifier
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// The tile's cells in their original orientation
    pub const fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// Side length in cells
    pub fn side(&self) -> usize {
        self.grid.rows()
    }

    /// The four borders in top, right, bottom, left order
    pub fn edges(&self) -> [Edge; 4] {
        [
            self.grid.top(),
            self.grid.right(),
            self.grid.bottom(),
            self.grid.left(),
        ]
    }

    /// Parse one block; `block` is its one-based position for error messages
    ///
    /// # Errors
    ///
    /// Returns [`AssemblyError::MalformedTile`] when the header is missing or
    /// invalid, or when the rows do not form a square grid
    pub fn parse_block(block: usize, text: &str) -> Result<Self> {
        let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());

        let header = lines
            .next()
            .ok_or_else(|| malformed_tile(block, &"block is empty"))?;
        let id = parse_header(header).ok_or_else(|| {
            malformed_tile(
                block,
                &format!("expected '{TILE_HEADER_PREFIX} <id>:' header, found '{header}'"),
            )
        })?;

        let rows: Vec<&str> = lines.collect();
        if rows.is_empty() {
            return Err(malformed_tile(block, &format!("tile {id} has no rows")));
        }

        let grid = CellGrid::from_rows(&rows).map_err(|e| malformed_tile(block, &e))?;
        Self::new(id, grid).map_err(|e| malformed_tile(block, &e))
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{TILE_HEADER_PREFIX} {}:\n{}", self.id, self.grid)
    }
}

fn parse_header(header: &str) -> Option<TileId> {
    header
        .strip_prefix(TILE_HEADER_PREFIX)?
        .trim()
        .strip_suffix(':')?
        .trim()
        .parse()
        .ok()
}

/// Split input text into blocks separated by blank lines
pub fn split_blocks(input: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in input.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }

    blocks
}

/// Parse every tile block in the input
///
/// # Errors
///
/// Returns an error if:
/// - The input contains no blocks
/// - A block is malformed
/// - A tile's side differs from the first tile's side
/// - Two tiles share an identifier
pub fn parse_tiles(input: &str) -> Result<Vec<Tile>> {
    let blocks = split_blocks(input);
    if blocks.is_empty() {
        return Err(AssemblyError::NoTiles);
    }

    let mut tiles: Vec<Tile> = Vec::with_capacity(blocks.len());
    let mut seen = HashSet::new();

    for (index, block) in blocks.iter().enumerate() {
        let tile = Tile::parse_block(index + 1, block)?;

        if let Some(first) = tiles.first()
            && tile.side() != first.side()
        {
            return Err(AssemblyError::InconsistentTileSize {
                id: tile.id(),
                expected: first.side(),
                found: tile.side(),
            });
        }
        if !seen.insert(tile.id()) {
            return Err(AssemblyError::DuplicateTile { id: tile.id() });
        }

        tiles.push(tile);
    }

    Ok(tiles)
}
