/// Error types for the monitoring core
use thiserror::Error;

/// Main error type for dataset, metrics and ingestion operations
#[derive(Error, Debug)]
pub enum TppError {
    /// Document did not decode as UTF-8 JSON or did not match the expected shape
    #[error("Malformed input in {file}: {reason}")]
    MalformedInput { file: String, reason: String },

    /// The bytes of a file could not be obtained
    #[error("Unreadable file {file}: {reason}")]
    UnreadableFile { file: String, reason: String },

    /// Metrics were requested for an empty observation sequence
    #[error("Insufficient data: the observation set is empty")]
    EmptyObservationSet,

    /// The first observed period has zero incidents, so no relative change exists
    #[error("Insufficient data: first-period incident count is zero")]
    DivisionByZero,

    /// A report was submitted without a description
    #[error("Report description must not be empty")]
    EmptyDescription,

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization failed
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem error outside of upload ingestion
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TppError {
    pub fn malformed(file: impl Into<String>, reason: impl ToString) -> Self {
        TppError::MalformedInput {
            file: file.into(),
            reason: reason.to_string(),
        }
    }

    pub fn unreadable(file: impl Into<String>, reason: impl ToString) -> Self {
        TppError::UnreadableFile {
            file: file.into(),
            reason: reason.to_string(),
        }
    }

    /// True for the two batch-level ingestion failures.
    pub fn is_ingestion_failure(&self) -> bool {
        matches!(
            self,
            TppError::MalformedInput { .. } | TppError::UnreadableFile { .. }
        )
    }
}

/// Type alias for Results using TppError
pub type Result<T> = std::result::Result<T, TppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display_names_file() {
        let err = TppError::malformed("2023.json", "missing field `year`");
        assert_eq!(
            err.to_string(),
            "Malformed input in 2023.json: missing field `year`"
        );
        assert!(err.is_ingestion_failure());
    }

    #[test]
    fn test_guards_are_not_ingestion_failures() {
        assert!(!TppError::EmptyObservationSet.is_ingestion_failure());
        assert!(!TppError::DivisionByZero.is_ingestion_failure());
    }
}
