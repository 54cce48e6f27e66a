use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MindError {
    #[error("structural invariant violated: {field} must have size {expected_size}")]
    StructuralInvariantViolation {
        field: &'static str,
        expected_size: usize,
    },
    #[error("decompression failed: {reason}")]
    DecompressionError { reason: String },
    #[error("declared decompressed size {declared} exceeds ceiling {ceiling}")]
    SizeLimitExceeded { declared: u64, ceiling: u64 },
    #[error("invalid document format: {reason}")]
    FormatError { reason: String },
    #[error("unsupported schema version {found}, expected {expected}")]
    SchemaVersionError { found: i64, expected: i64 },
    #[error("compression failed: {reason}")]
    CompressionError { reason: String },
}

impl MindError {
    pub(crate) fn decompression(reason: impl ToString) -> Self {
        MindError::DecompressionError {
            reason: reason.to_string(),
        }
    }

    pub(crate) fn format(reason: impl ToString) -> Self {
        MindError::FormatError {
            reason: reason.to_string(),
        }
    }

    pub(crate) fn compression(reason: impl ToString) -> Self {
        MindError::CompressionError {
            reason: reason.to_string(),
        }
    }
}
