//! PNG export of composite images

use crate::io::configuration::{
    ACTIVE_CELL, ACTIVE_COLOR, BACKGROUND_COLOR, CONSUMED_CELL, CONSUMED_COLOR, PIXEL_SCALE,
};
use crate::io::error::{AssemblyError, Result, invalid_parameter};
use crate::spatial::grid::CellGrid;
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

/// Export colour for a cell value
pub const fn cell_color(cell: u8) -> Rgba<u8> {
    match cell {
        ACTIVE_CELL => Rgba(ACTIVE_COLOR),
        CONSUMED_CELL => Rgba(CONSUMED_COLOR),
        _ => Rgba(BACKGROUND_COLOR),
    }
}

/// Render a grid with `scale` x `scale` pixels per cell
///
/// # Errors
///
/// Returns an error if the scale is zero or the image would exceed `u32`
/// pixel dimensions
pub fn render_grid(grid: &CellGrid, scale: u32) -> Result<RgbaImage> {
    if scale == 0 {
        return Err(invalid_parameter("scale", &scale, &"must be positive"));
    }

    let to_pixels = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|count| count.checked_mul(scale))
            .ok_or_else(|| invalid_parameter("grid", &cells, &"too large to render"))
    };
    let width = to_pixels(grid.cols())?;
    let height = to_pixels(grid.rows())?;

    Ok(ImageBuffer::from_fn(width, height, |x, y| {
        let cell = grid
            .get((y / scale) as usize, (x / scale) as usize)
            .unwrap_or(0);
        cell_color(cell)
    }))
}

/// Export a grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The grid is too large to render
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &CellGrid, output_path: &Path) -> Result<()> {
    let img = render_grid(grid, PIXEL_SCALE)?;

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| AssemblyError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| AssemblyError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
