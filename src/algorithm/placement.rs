//! Edge-adjacency placement search
//!
//! Every orientation of every tile goes into one candidate pool. The search
//! picks a top-left corner, grows each row rightwards by matching left edges
//! against the current right edge, and starts each new row below the previous
//! row's first cell. Ties go to the first match in pool order, which follows
//! input order and then orientation order.

use crate::algorithm::bitset::TileBitset;
use crate::io::error::{AssemblyError, Result, computation_error};
use crate::spatial::grid::Edge;
use crate::spatial::tiles::{Tile, TileId};
use crate::spatial::transforms::{OrientedTile, Orientation, transforms_with};

/// Predicate deciding whether two touching edges fit together
///
/// `fixed` belongs to the tile already placed, `candidate` to the tile being
/// tried; both are read in the same direction.
pub trait EdgeMatcher {
    /// Test whether the edges fit
    fn fits(&self, fixed: &Edge, candidate: &Edge) -> bool;
}

/// Edges fit when they are identical cell for cell
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatch;

impl EdgeMatcher for ExactMatch {
    fn fits(&self, fixed: &Edge, candidate: &Edge) -> bool {
        fixed == candidate
    }
}

impl<F> EdgeMatcher for F
where
    F: Fn(&Edge, &Edge) -> bool,
{
    fn fits(&self, fixed: &Edge, candidate: &Edge) -> bool {
        self(fixed, candidate)
    }
}

struct Candidate {
    tile_index: usize,
    oriented: OrientedTile,
}

struct CandidatePool {
    candidates: Vec<Candidate>,
}

impl CandidatePool {
    fn new(tiles: &[Tile], orientations: &[Orientation]) -> Self {
        let candidates = tiles
            .iter()
            .enumerate()
            .flat_map(|(tile_index, tile)| {
                transforms_with(tile, orientations)
                    .into_iter()
                    .map(move |oriented| Candidate {
                        tile_index,
                        oriented,
                    })
            })
            .collect();
        Self { candidates }
    }

    fn len(&self) -> usize {
        self.candidates.len()
    }

    // Nothing from another tile fits above or to the left
    fn find_corner<M: EdgeMatcher>(&self, matcher: &M) -> Option<&Candidate> {
        self.candidates.iter().find(|candidate| {
            !self.candidates.iter().any(|other| {
                other.tile_index != candidate.tile_index
                    && (matcher.fits(other.oriented.bottom(), candidate.oriented.top())
                        || matcher.fits(other.oriented.right(), candidate.oriented.left()))
            })
        })
    }

    fn find(
        &self,
        placed: &TileBitset,
        accepts: impl Fn(&OrientedTile) -> bool,
    ) -> Option<&Candidate> {
        self.candidates
            .iter()
            .find(|candidate| !placed.contains(candidate.tile_index) && accepts(&candidate.oriented))
    }
}

/// A strictly rectangular arrangement of oriented tiles
#[derive(Debug, Clone)]
pub struct Placement {
    rows: Vec<Vec<OrientedTile>>,
}

impl Placement {
    /// Wrap rows of oriented tiles
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, the first row is empty, or any
    /// row differs in length from the first
    pub fn from_rows(rows: Vec<Vec<OrientedTile>>) -> Result<Self> {
        let expected = rows.first().map_or(0, Vec::len);
        if expected == 0 {
            return Err(AssemblyError::IncompletePlacement {
                placed: 0,
                total: rows.iter().map(Vec::len).sum(),
            });
        }
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != expected)
        {
            return Err(AssemblyError::RaggedPlacement {
                row,
                expected,
                found: cells.len(),
            });
        }
        Ok(Self { rows })
    }

    /// Number of tile rows
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of tile columns
    pub fn cols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Number of placed tiles
    pub fn tile_count(&self) -> usize {
        self.rows() * self.cols()
    }

    /// Oriented tile at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Option<&OrientedTile> {
        self.rows.get(row).and_then(|cells| cells.get(col))
    }

    /// Rows of oriented tiles, top to bottom
    pub fn tile_rows(&self) -> impl Iterator<Item = &[OrientedTile]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Tile identifiers in placement order
    pub fn id_layout(&self) -> Vec<Vec<TileId>> {
        self.rows
            .iter()
            .map(|cells| cells.iter().map(OrientedTile::id).collect())
            .collect()
    }

    /// Identifiers at the top-left, top-right, bottom-left and bottom-right
    pub fn corner_ids(&self) -> [TileId; 4] {
        let last_row = self.rows() - 1;
        let last_col = self.cols() - 1;
        [(0, 0), (0, last_col), (last_row, 0), (last_row, last_col)]
            .map(|(row, col)| self.get(row, col).map_or(0, OrientedTile::id))
    }

    /// Product of the four corner identifiers
    ///
    /// # Errors
    ///
    /// Returns an error if the product overflows `u64`
    pub fn corner_product(&self) -> Result<u64> {
        self.corner_ids()
            .iter()
            .try_fold(1u64, |product, &id| product.checked_mul(id))
            .ok_or_else(|| {
                computation_error("corner product", &"product of corner ids overflows u64")
            })
    }
}

/// Arrange every tile so that all touching edges fit
///
/// `orientations` is the transform set tried for each tile and `matcher`
/// decides whether two edges fit. Tiles already placed are never reused, so
/// each step of the search places a new tile and the search terminates.
///
/// # Errors
///
/// Returns an error if:
/// - There are no tiles
/// - No candidate qualifies as the top-left corner
/// - A row ends up shorter or longer than the first
/// - Some tiles are left unplaced
pub fn assemble<M: EdgeMatcher>(
    tiles: &[Tile],
    orientations: &[Orientation],
    matcher: &M,
) -> Result<Placement> {
    if tiles.is_empty() {
        return Err(AssemblyError::NoTiles);
    }

    let pool = CandidatePool::new(tiles, orientations);
    let mut placed = TileBitset::new(tiles.len());

    let mut row_start = pool.find_corner(matcher).ok_or(AssemblyError::NoCorner {
        candidates: pool.len(),
    })?;

    let mut rows = Vec::new();
    loop {
        placed.insert(row_start.tile_index);
        let mut row = vec![row_start.oriented.clone()];

        let mut current = row_start;
        loop {
            let right = current.oriented.right();
            let Some(next) = pool.find(&placed, |candidate| matcher.fits(right, candidate.left()))
            else {
                break;
            };
            placed.insert(next.tile_index);
            row.push(next.oriented.clone());
            current = next;
        }
        rows.push(row);

        let bottom = row_start.oriented.bottom();
        let Some(next) = pool.find(&placed, |candidate| matcher.fits(bottom, candidate.top()))
        else {
            break;
        };
        row_start = next;
    }

    let placement = Placement::from_rows(rows)?;
    if !placed.is_full() {
        return Err(AssemblyError::IncompletePlacement {
            placed: placed.count(),
            total: tiles.len(),
        });
    }
    Ok(placement)
}
