//! Error types shared across the crate.

use std::path::PathBuf;

use polars::error::PolarsError;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BetaRefError>;

/// All failure modes of the reference-building pipeline.
///
/// Variants carry the offending path so that a batch run over dozens of
/// series matrices points straight at the file that broke it.
#[derive(Debug, Error)]
pub enum BetaRefError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Polars(#[from] PolarsError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The manifest or the probe annotation file is empty or malformed.
    #[error("invalid input {}: {reason}", .path.display())]
    InputFormat { path: PathBuf, reason: String },

    /// A referenced input file does not exist or is empty. Raised before
    /// any cleaning or merging starts.
    #[error("missing or empty input file: {}", .0.display())]
    MissingFile(PathBuf),

    /// A series matrix that never reaches the table header, or a parsed
    /// table that violates the matrix invariants (duplicate probes,
    /// non-numeric sample columns).
    #[error("{} is not a valid series matrix: {reason}", .path.display())]
    MalformedMatrix { path: PathBuf, reason: String },

    /// A sample column requested in the manifest is absent from the table.
    #[error("sample column {column:?} not found in {}", .path.display())]
    MissingColumn { path: PathBuf, column: String },
}

impl BetaRefError {
    pub(crate) fn input_format(
        path: impl Into<PathBuf>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InputFormat {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed(
        path: impl Into<PathBuf>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedMatrix {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
