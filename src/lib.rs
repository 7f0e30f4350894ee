//! Edge-matching assembly of square character tiles into one picture
//!
//! Tiles are arranged so that every shared border agrees cell for cell, their
//! borders are stripped and the interiors merged into a composite, and a fixed
//! pattern is searched for in every orientation of that composite.

#![forbid(unsafe_code)]

/// Placement search, composite merge, pattern erasure and stage orchestration
pub mod algorithm;
/// Edge census over the unarranged tile set
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Cell grids, tiles and their orientations
pub mod spatial;

pub use io::error::{AssemblyError, Result};
