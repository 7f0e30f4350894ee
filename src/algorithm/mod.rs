/// Bitset of placed tiles
pub mod bitset;
/// Border stripping and merging of placed tiles
pub mod composite;
/// Pattern search and erasure over the composite
pub mod pattern;
/// Row-major placement search with pluggable edge matching
pub mod placement;
/// Stage orchestration from tile text to both answers
pub mod solver;
