//! Rectangular character grids with dihedral transforms and edge projections
//!
//! Cells are stored as raw bytes in an `ndarray::Array2`, which keeps rotation
//! and reflection as cheap view manipulations followed by a single copy. Every
//! transform returns a fully independent grid.

use std::fmt;
use std::str::FromStr;

use ndarray::{Array2, ArrayView2, Axis, Slice};

use crate::io::error::{AssemblyError, Result, invalid_parameter};

/// The cells along one side of a grid, read left-to-right or top-to-bottom
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge(Vec<u8>);

impl Edge {
    /// Create an edge from raw cell values
    pub const fn new(cells: Vec<u8>) -> Self {
        Self(cells)
    }

    /// Raw cell values
    pub fn cells(&self) -> &[u8] {
        &self.0
    }

    /// Number of cells along the edge
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Test whether the edge has no cells
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The same edge read in the opposite direction
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self(self.0.iter().rev().copied().collect())
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

/// A non-empty rectangular grid of byte cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    cells: Array2<u8>,
}

impl CellGrid {
    /// Build a grid from text rows of equal length
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, a row is empty, or the rows
    /// differ in length
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let width = rows
            .first()
            .map(|row| row.as_ref().len())
            .ok_or_else(|| invalid_parameter("rows", &0, &"grid needs at least one row"))?;

        let mut data = Vec::with_capacity(width * rows.len());
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(invalid_parameter(
                    "rows",
                    &row,
                    &format!(
                        "row {} has length {}, expected {width}",
                        index + 1,
                        row.len()
                    ),
                ));
            }
            data.extend_from_slice(row.as_bytes());
        }

        Self::from_array(Array2::from_shape_vec((rows.len(), width), data)?)
    }

    /// Wrap an existing array
    ///
    /// # Errors
    ///
    /// Returns an error if the array has no cells
    pub fn from_array(cells: Array2<u8>) -> Result<Self> {
        if cells.is_empty() {
            return Err(invalid_parameter(
                "cells",
                &format!("{:?}", cells.dim()),
                &"grid needs at least one cell",
            ));
        }
        Ok(Self { cells })
    }

    /// A grid of the given size filled with one value
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn filled(rows: usize, cols: usize, value: u8) -> Result<Self> {
        Self::from_array(Array2::from_elem((rows, cols), value))
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Read-only view of the underlying cells
    pub fn view(&self) -> ArrayView2<'_, u8> {
        self.cells.view()
    }

    /// Cell at `(row, col)`, or `None` when out of range
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.cells.get((row, col)).copied()
    }

    /// Overwrite the cell at `(row, col)`; returns `false` when out of range
    pub fn set(&mut self, row: usize, col: usize, value: u8) -> bool {
        self.cells.get_mut((row, col)).map(|cell| *cell = value).is_some()
    }

    /// Count cells holding `value`
    pub fn count(&self, value: u8) -> usize {
        self.cells.iter().filter(|&&cell| cell == value).count()
    }

    /// Rotate a quarter turn clockwise
    ///
    /// Cell `(r, c)` of the result is cell `(rows - 1 - c, r)` of the source.
    #[must_use]
    pub fn rotate_90(&self) -> Self {
        let mut view = self.cells.t();
        view.invert_axis(Axis(1));
        Self {
            cells: view.to_owned(),
        }
    }

    /// Reverse the row order (mirror across the horizontal axis)
    #[must_use]
    pub fn flip(&self) -> Self {
        let mut view = self.cells.view();
        view.invert_axis(Axis(0));
        Self {
            cells: view.to_owned(),
        }
    }

    /// First row, left to right
    pub fn top(&self) -> Edge {
        Edge(self.cells.row(0).to_vec())
    }

    /// Last row, left to right
    pub fn bottom(&self) -> Edge {
        Edge(self.cells.row(self.rows() - 1).to_vec())
    }

    /// First column, top to bottom
    pub fn left(&self) -> Edge {
        Edge(self.cells.column(0).to_vec())
    }

    /// Last column, top to bottom
    pub fn right(&self) -> Edge {
        Edge(self.cells.column(self.cols() - 1).to_vec())
    }

    /// Copy of the grid without its outermost rows and columns
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is smaller than 3x3, which would leave
    /// nothing behind
    pub fn strip_border(&self) -> Result<Self> {
        if self.rows() < 3 || self.cols() < 3 {
            return Err(invalid_parameter(
                "grid",
                &format!("{}x{}", self.rows(), self.cols()),
                &"border stripping needs at least 3x3 cells",
            ));
        }
        Ok(Self {
            cells: self
                .cells
                .slice_each_axis(|axis| Slice::from(1..axis.len - 1))
                .to_owned(),
        })
    }

    /// Rows rendered as text
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|&cell| char::from(cell)).collect())
            .collect()
    }

    /// Consume the grid, returning the underlying array
    pub fn into_array(self) -> Array2<u8> {
        self.cells
    }
}

impl fmt::Display for CellGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_rows().join("\n"))
    }
}

impl FromStr for CellGrid {
    type Err = AssemblyError;

    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<&str> = s
            .lines()
            .filter(|line| !line.is_empty())
            .collect();
        Self::from_rows(&rows)
    }
}
