//! Error types for the Recast library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Recast operations.
///
/// Per-cell conversion failures are not errors: they are recorded in the
/// [`CoercionReport`](crate::CoercionReport) and the cell becomes missing.
#[derive(Debug, Error)]
pub enum RecastError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid delimiter detected or specified.
    #[error("Invalid delimiter: {0}")]
    InvalidDelimiter(String),

    /// Empty file or no data to load.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Two columns share a name.
    #[error("Duplicate column name '{0}'")]
    DuplicateColumn(String),

    /// A column does not have the dataset's row count.
    #[error("Column '{column}' has {found} values, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },

    /// A coercion request names a column the dataset does not have.
    #[error("Column '{column}' not found (available: {})", available.join(", "))]
    InvalidColumnReference {
        column: String,
        available: Vec<String>,
    },

    /// Unrecognized auto-repair mode name.
    #[error("Unknown repair mode '{0}' (expected 'text-all' or 'numeric-detect')")]
    InvalidRepairMode(String),
}

/// Result type alias for Recast operations.
pub type Result<T> = std::result::Result<T, RecastError>;
