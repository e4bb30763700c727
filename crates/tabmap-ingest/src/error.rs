//! Error types for text ingestion.

use thiserror::Error;

/// A text exceeded the import boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuardRejection {
    /// Too many characters. Never truncated.
    #[error("input has {count} characters; at most {max} can be processed")]
    TooManyChars { count: usize, max: usize },

    /// Too many lines under the reject policy.
    #[error("input has {count} rows; at most {max} can be processed")]
    TooManyRows { count: usize, max: usize },
}

/// Errors from the import pipeline.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("import rejected: {0}")]
    Rejected(#[from] GuardRejection),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_display() {
        let err = GuardRejection::TooManyRows {
            count: 1001,
            max: 1000,
        };
        assert_eq!(
            err.to_string(),
            "input has 1001 rows; at most 1000 can be processed"
        );
        let err: ImportError = err.into();
        assert!(err.to_string().starts_with("import rejected: "));
    }
}
