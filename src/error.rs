//! Error types for Drift.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Drift operations.
pub type Result<T> = std::result::Result<T, DriftError>;

/// Errors that can occur in Drift.
#[derive(Debug, Error)]
pub enum DriftError {
    /// Input file does not exist or is not a regular file.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that failed to resolve.
        path: PathBuf,
    },

    /// A row of the input file did not yield exactly two numeric tokens.
    #[error("Parse error in {path} at line {line}: {reason}")]
    Parse {
        /// The file being parsed.
        path: PathBuf,
        /// 1-based line number of the offending row.
        line: usize,
        /// What was wrong with the row.
        reason: String,
    },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DriftError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a Parse error.
    pub fn parse(path: impl Into<PathBuf>, line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }
}
