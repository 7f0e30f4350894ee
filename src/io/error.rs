//! Error types and context management for assembly operations

use std::fmt;
use std::path::PathBuf;

use crate::spatial::tiles::TileId;

/// Main error type for all assembly operations
#[derive(Debug)]
pub enum AssemblyError {
    /// A tile block could not be parsed
    MalformedTile {
        /// One-based index of the block within the input
        block: usize,
        /// Description of what is wrong with the block
        reason: String,
    },

    /// A tile's side differs from the first tile's side
    InconsistentTileSize {
        /// Identifier of the offending tile
        id: TileId,
        /// Side length established by the first tile
        expected: usize,
        /// Side length of the offending tile
        found: usize,
    },

    /// Two blocks share the same identifier
    DuplicateTile {
        /// The repeated identifier
        id: TileId,
    },

    /// Input contained no tile blocks
    NoTiles,

    /// An edge signature is carried by more than two tiles
    ///
    /// Edge matching assumes each border pairs with at most one neighbour.
    AmbiguousEdge {
        /// Edge cells as text
        edge: String,
        /// Every tile carrying the edge
        tiles: Vec<TileId>,
    },

    /// No orientation qualifies as the top-left corner
    NoCorner {
        /// Size of the orientation pool that was searched
        candidates: usize,
    },

    /// A placement row is shorter or longer than the first row
    RaggedPlacement {
        /// Zero-based row index
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        found: usize,
    },

    /// Placement stopped before every tile was used
    IncompletePlacement {
        /// Number of tiles placed
        placed: usize,
        /// Number of tiles in the input
        total: usize,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Numerical or array computation produced an invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Error raised while processing a specific input file
    Input {
        /// Input file being processed
        path: PathBuf,
        /// The underlying error
        source: Box<AssemblyError>,
    },
}

impl fmt::Display for AssemblyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedTile { block, reason } => {
                write!(f, "Malformed tile in block {block}: {reason}")
            }
            Self::InconsistentTileSize {
                id,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Tile {id} has side {found}, expected {expected} like the first tile"
                )
            }
            Self::DuplicateTile { id } => write!(f, "Tile {id} appears more than once"),
            Self::NoTiles => write!(f, "Input contains no tiles"),
            Self::AmbiguousEdge { edge, tiles } => {
                let ids: Vec<String> = tiles.iter().map(ToString::to_string).collect();
                write!(
                    f,
                    "Edge '{edge}' is shared by {} tiles ({})",
                    tiles.len(),
                    ids.join(", ")
                )
            }
            Self::NoCorner { candidates } => {
                write!(
                    f,
                    "No corner found among {candidates} candidate orientations"
                )
            }
            Self::RaggedPlacement {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Placement row {row} has {found} tiles, expected {expected}"
                )
            }
            Self::IncompletePlacement { placed, total } => {
                write!(f, "Placement used only {placed} of {total} tiles")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::Input { path, source } => {
                write!(f, "{}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for AssemblyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Input { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// Convenience type alias for assembly results
pub type Result<T> = std::result::Result<T, AssemblyError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Input file being processed
    pub path: Option<PathBuf>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches error messages with processing state
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Attach the input file path
    ///
    /// # Errors
    ///
    /// Propagates the original error wrapped with the path
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<AssemblyError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            if let AssemblyError::FileSystem { operation, .. } = &mut error
                && let Some(op) = context.operation
            {
                *operation = op;
            }
            match context.path {
                // Already wrapped errors keep their innermost path
                Some(_) if matches!(error, AssemblyError::Input { .. }) => error,
                Some(path) => AssemblyError::Input {
                    path,
                    source: Box::new(error),
                },
                None => error,
            }
        })
    }

    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.with_context(ErrorContext {
            path: Some(path.into()),
            ..Default::default()
        })
    }
}

impl From<std::io::Error> for AssemblyError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<ndarray::ShapeError> for AssemblyError {
    fn from(err: ndarray::ShapeError) -> Self {
        computation_error("array reshape", &err)
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AssemblyError {
    AssemblyError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> AssemblyError {
    AssemblyError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create a malformed tile error for a one-based block index
pub fn malformed_tile(block: usize, reason: &impl ToString) -> AssemblyError {
    AssemblyError::MalformedTile {
        block,
        reason: reason.to_string(),
    }
}

/// Create an error for an unusable input path
pub fn io_error(msg: &str) -> AssemblyError {
    AssemblyError::InvalidParameter {
        parameter: "path",
        value: String::new(),
        reason: msg.to_string(),
    }
}
