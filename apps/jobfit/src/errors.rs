use thiserror::Error;

use crate::extraction::ExtractionError;

/// Application-level error type. Each variant maps to a distinct exit code so
/// callers can tell an extraction failure apart from an unknown role or a
/// successful zero-score analysis.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Usage(String),

    #[error("Unknown role '{0}' — run with --list-roles to see the supported roles")]
    UnknownRole(String),

    #[error("Text extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Usage(_) => 2,
            AppError::UnknownRole(_) => 3,
            AppError::Extraction(_) => 4,
            AppError::Internal(_) => 1,
        }
    }
}
