//! Error types for the data-loader crate.
//!
//! Everything that can go wrong while reading the two source tables or
//! writing the dataset snapshot ends up in [`DataLoadError`]. Reading a
//! snapshot never produces an error: a snapshot that cannot be used is
//! reported as [`crate::cache::SnapshotStatus::RebuildNeeded`] instead.

use thiserror::Error;

/// Errors that can occur during data loading and parsing
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading or writing a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader rejected a record (bad quoting, invalid UTF-8, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Line in data file couldn't be parsed
    ///
    /// This variant stores context about where the error occurred
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: u64,
        reason: String,
    },

    /// The dataset could not be serialized into a snapshot
    #[error("Failed to encode dataset snapshot: {0}")]
    CacheEncode(#[from] bincode::error::EncodeError),

    /// Data validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
