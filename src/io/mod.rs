//! Command line, configuration, errors, progress display and image export

/// Command-line parsing and per-file processing
pub mod cli;
/// Cell values, pattern shape and display constants
pub mod configuration;
/// Error types and context management
pub mod error;
/// PNG rendering of cell grids
pub mod image;
/// Progress bars for multi-file runs
pub mod progress;
