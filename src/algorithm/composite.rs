//! Composite image construction from a completed placement

use ndarray::{Array2, Axis, concatenate};

use crate::algorithm::placement::Placement;
use crate::io::error::{Result, computation_error};
use crate::spatial::grid::CellGrid;

/// Merge a placement into one image with every tile border removed
///
/// The result measures `rows x (side - 2)` by `cols x (side - 2)` cells.
///
/// # Errors
///
/// Returns an error if a tile is too small to strip or the interiors cannot
/// be joined because their shapes differ
pub fn compose(placement: &Placement) -> Result<CellGrid> {
    let mut bands: Vec<Array2<u8>> = Vec::with_capacity(placement.rows());

    for row in placement.tile_rows() {
        let interiors = row
            .iter()
            .map(|tile| tile.grid().strip_border().map(CellGrid::into_array))
            .collect::<Result<Vec<_>>>()?;
        let views: Vec<_> = interiors.iter().map(|array| array.view()).collect();
        bands.push(concatenate(Axis(1), &views)?);
    }

    let views: Vec<_> = bands.iter().map(|array| array.view()).collect();
    let image = concatenate(Axis(0), &views)?;

    CellGrid::from_array(image)
        .map_err(|e| computation_error("composite merge", &e))
}
