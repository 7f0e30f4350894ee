//! Tests for error display, sources and context wrapping

#[cfg(test)]
mod tests {
    use jigsaw_tiles::AssemblyError;
    use jigsaw_tiles::io::error::{
        ErrorContext, WithContext, computation_error, invalid_parameter, io_error, malformed_tile,
    };
    use std::error::Error;
    use std::path::PathBuf;

    // Tests display messages carry the offending values
    // Verified by omitting the tile ids from the ambiguous edge message
    #[test]
    fn test_display_messages() {
        let ambiguous = AssemblyError::AmbiguousEdge {
            edge: "#..#".to_string(),
            tiles: vec![1, 2, 3],
        };
        assert_eq!(
            ambiguous.to_string(),
            "Edge '#..#' is shared by 3 tiles (1, 2, 3)"
        );

        let incomplete = AssemblyError::IncompletePlacement {
            placed: 3,
            total: 9,
        };
        assert_eq!(incomplete.to_string(), "Placement used only 3 of 9 tiles");

        assert_eq!(
            malformed_tile(2, &"bad header").to_string(),
            "Malformed tile in block 2: bad header"
        );
        assert_eq!(
            AssemblyError::DuplicateTile { id: 7 }.to_string(),
            "Tile 7 appears more than once"
        );
    }

    // Tests helper constructors fill the expected variants
    // Verified by swapping the value and reason arguments
    #[test]
    fn test_helpers() {
        match invalid_parameter("side", &2, &"too small") {
            AssemblyError::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                assert_eq!(parameter, "side");
                assert_eq!(value, "2");
                assert_eq!(reason, "too small");
            }
            other => unreachable!("Expected InvalidParameter, got {other:?}"),
        }
        assert!(matches!(
            computation_error("merge", &"shape"),
            AssemblyError::Computation {
                operation: "merge",
                ..
            }
        ));
        assert!(matches!(
            io_error("missing"),
            AssemblyError::InvalidParameter {
                parameter: "path",
                ..
            }
        ));
    }

    // Tests wrapping with a path keeps the inner error as the source
    // Verified by dropping the boxed source from the Input variant
    #[test]
    fn test_with_path_wraps_once() {
        let result: Result<(), AssemblyError> = Err(AssemblyError::NoTiles);
        let wrapped = result.with_path("a.txt").with_path("b.txt").unwrap_err();

        match &wrapped {
            AssemblyError::Input { path, source } => {
                assert_eq!(path, &PathBuf::from("a.txt"));
                assert!(matches!(**source, AssemblyError::NoTiles));
            }
            other => unreachable!("Expected Input error, got {other:?}"),
        }
        assert_eq!(wrapped.to_string(), "a.txt: Input contains no tiles");
        assert!(wrapped.source().is_some());
    }

    // Tests I/O errors convert and pick up the operation from context
    // Verified by ignoring the context operation
    #[test]
    fn test_io_error_context() {
        let result: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let context = ErrorContext {
            operation: Some("read input"),
            ..Default::default()
        };

        match result.with_context(context) {
            Err(AssemblyError::FileSystem {
                operation, source, ..
            }) => {
                assert_eq!(operation, "read input");
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => unreachable!("Expected FileSystem error, got {other:?}"),
        }
    }

    // Tests shape errors from array operations become computation errors
    // Verified by mapping shape errors to invalid parameters
    #[test]
    fn test_shape_error_conversion() {
        let shape_error = ndarray::Array2::<u8>::from_shape_vec((2, 2), vec![0; 3]).unwrap_err();
        let error = AssemblyError::from(shape_error);
        assert!(matches!(
            error,
            AssemblyError::Computation {
                operation: "array reshape",
                ..
            }
        ));
        assert!(error.source().is_none());
    }
}
