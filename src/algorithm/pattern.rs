//! Pattern search and erasure over a composite image
//!
//! A pattern is a set of offsets that must all hold the active cell. Each
//! occurrence found is overwritten with a marker straight away, so a later
//! overlapping candidate can never reuse its cells and the remaining active
//! cells are exactly those outside every occurrence.

use crate::io::configuration::{ACTIVE_CELL, SEA_MONSTER};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::CellGrid;
use crate::spatial::transforms::Orientation;

/// Immutable set of `(row, col)` offsets that must all be active
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPattern {
    offsets: Vec<(usize, usize)>,
    height: usize,
    width: usize,
}

impl SearchPattern {
    /// Build a pattern from text rows; cells equal to `active` become offsets
    ///
    /// Rows may differ in length; the pattern is as wide as its longest row.
    ///
    /// # Errors
    ///
    /// Returns an error if no row contains the active cell
    pub fn from_rows<S: AsRef<str>>(rows: &[S], active: u8) -> Result<Self> {
        let pattern = Self::collect(rows, active);
        if pattern.offsets.is_empty() {
            return Err(invalid_parameter(
                "pattern",
                &rows.iter().map(|row| row.as_ref()).collect::<Vec<_>>().join("\\n"),
                &format!("pattern has no '{}' cells", char::from(active)),
            ));
        }
        Ok(pattern)
    }

    fn collect<S: AsRef<str>>(rows: &[S], active: u8) -> Self {
        let offsets = rows
            .iter()
            .enumerate()
            .flat_map(|(row, text)| {
                text.as_ref()
                    .bytes()
                    .enumerate()
                    .filter(move |&(_, cell)| cell == active)
                    .map(move |(col, _)| (row, col))
            })
            .collect();

        Self {
            offsets,
            height: rows.len(),
            width: rows.iter().map(|row| row.as_ref().len()).max().unwrap_or(0),
        }
    }

    /// Active offsets, row-major
    pub fn offsets(&self) -> &[(usize, usize)] {
        &self.offsets
    }

    /// Number of rows spanned
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of columns spanned
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of cells an occurrence consumes
    pub fn active_cells(&self) -> usize {
        self.offsets.len()
    }

    /// Test whether every offset from `(row, col)` holds `active`
    pub fn matches_at(&self, grid: &CellGrid, row: usize, col: usize, active: u8) -> bool {
        self.offsets
            .iter()
            .all(|&(dr, dc)| grid.get(row + dr, col + dc) == Some(active))
    }

    /// Mark every occurrence in `grid`, returning how many were found
    ///
    /// Positions are scanned row-major and only where the whole pattern fits.
    pub fn mark_occurrences(&self, grid: &mut CellGrid, active: u8, marker: u8) -> usize {
        if self.height > grid.rows() || self.width > grid.cols() {
            return 0;
        }

        let mut hits = 0;
        for row in 0..=grid.rows() - self.height {
            for col in 0..=grid.cols() - self.width {
                if self.matches_at(grid, row, col, active) {
                    for &(dr, dc) in &self.offsets {
                        grid.set(row + dr, col + dc, marker);
                    }
                    hits += 1;
                }
            }
        }
        hits
    }
}

impl Default for SearchPattern {
    /// The three-row sea monster
    fn default() -> Self {
        Self::collect(&SEA_MONSTER, ACTIVE_CELL)
    }
}

/// Outcome of searching a composite across its orientations
#[derive(Debug, Clone)]
pub struct PatternReport {
    orientation: Option<Orientation>,
    hits: usize,
    roughness: usize,
    image: CellGrid,
}

impl PatternReport {
    /// Composite orientation in which occurrences were found
    pub const fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    /// Number of occurrences found
    pub const fn hits(&self) -> usize {
        self.hits
    }

    /// Active cells outside every occurrence
    pub const fn roughness(&self) -> usize {
        self.roughness
    }

    /// The composite after marking, in the matching orientation
    ///
    /// Unchanged and untransformed when nothing was found.
    pub const fn image(&self) -> &CellGrid {
        &self.image
    }
}

/// Search each orientation in turn, stopping at the first with occurrences
///
/// Finding nothing in every orientation is not an error: the report then has
/// no orientation, zero hits and the original active count as roughness.
pub fn find_and_erase(
    composite: &CellGrid,
    pattern: &SearchPattern,
    orientations: &[Orientation],
    active: u8,
    marker: u8,
) -> PatternReport {
    for &orientation in orientations {
        let mut image = orientation.apply(composite);
        let hits = pattern.mark_occurrences(&mut image, active, marker);
        if hits > 0 {
            return PatternReport {
                orientation: Some(orientation),
                hits,
                roughness: image.count(active),
                image,
            };
        }
    }

    PatternReport {
        orientation: None,
        hits: 0,
        roughness: composite.count(active),
        image: composite.clone(),
    }
}
