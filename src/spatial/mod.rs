//! Spatial data structures and grid manipulation
//!
//! This module contains spatial-related functionality including:
//! - Character grids and their edges
//! - Tile parsing
//! - Dihedral orientations
//! - Synthetic puzzle generation

/// Character grids, edges and border stripping
pub mod grid;
/// Synthetic puzzle generation with unique border codes
pub mod scramble;
/// Tile parsing and identifiers
pub mod tiles;
/// The eight rotations and reflections of a square grid
pub mod transforms;

pub use grid::{CellGrid, Edge};
pub use tiles::{Tile, TileId};
