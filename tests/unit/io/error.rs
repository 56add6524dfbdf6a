//! Tests for error message formatting and source chaining

#[cfg(test)]
mod tests {

    use pipewave::GenerationError;
    use pipewave::io::error::invalid_parameter;
    use std::error::Error;
    use std::path::PathBuf;

    #[test]
    fn test_invalid_parameter_formatting() {
        let err = invalid_parameter("cols", &0, &"must be nonzero");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'cols' = '0': must be nonzero"
        );
    }

    #[test]
    fn test_out_of_bounds_formatting() {
        let err = GenerationError::CellIndexOutOfBounds {
            index: 12,
            cell_count: 9,
        };
        assert_eq!(
            err.to_string(),
            "Cell index 12 is out of bounds (board holds 9 cells)"
        );
    }

    #[test]
    fn test_contradiction_formatting() {
        let err = GenerationError::Contradiction { index: 3 };
        assert_eq!(
            err.to_string(),
            "Cell 3 was narrowed to an empty candidate set"
        );
    }

    // File system errors keep their underlying cause reachable
    #[test]
    fn test_file_system_source_chain() {
        let err = GenerationError::FileSystem {
            path: PathBuf::from("/tmp/out"),
            operation: "create directory",
            source: std::io::Error::other("disk on fire"),
        };

        assert!(err.to_string().contains("create directory"));
        assert!(err.to_string().contains("/tmp/out"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let err: GenerationError = std::io::Error::other("nope").into();
        assert!(matches!(err, GenerationError::FileSystem { .. }));
    }

    #[test]
    fn test_contradiction_has_no_source() {
        let err = GenerationError::Contradiction { index: 0 };
        assert!(err.source().is_none());
    }
}
