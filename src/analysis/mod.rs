//! Analysis of the tile set before arrangement

/// Edge signature census and neighbour counts
pub mod census;
