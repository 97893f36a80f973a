//! Error types for flowtag

use std::path::PathBuf;
use thiserror::Error;

/// Flow log tagging errors
///
/// Every variant is fatal to the run; malformed individual flow-log
/// lines are not errors and are skipped by the parser instead.
#[derive(Error, Debug)]
pub enum FlowTagError {
    /// An input file does not exist
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// The lookup table header is missing a required column
    #[error("Missing expected column in lookup file: {0}")]
    SchemaError(String),

    /// CSV read/write error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for flowtag operations
pub type Result<T> = std::result::Result<T, FlowTagError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = FlowTagError::NotFound(PathBuf::from("logs/flows.txt"));
        assert_eq!(err.to_string(), "File not found: logs/flows.txt");
    }

    #[test]
    fn test_schema_error_display() {
        let err = FlowTagError::SchemaError("dstport".to_string());
        assert_eq!(
            err.to_string(),
            "Missing expected column in lookup file: dstport"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: FlowTagError = io.into();
        assert!(matches!(err, FlowTagError::Io(_)));
    }
}
