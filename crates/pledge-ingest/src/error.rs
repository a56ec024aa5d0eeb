//! Error types for pledge export ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a pledge export.
#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open the CSV file.
    #[error("failed to open CSV {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A record could not be decoded.
    #[error("failed to read CSV {path} at record {record}: {source}")]
    Record {
        path: PathBuf,
        record: usize,
        #[source]
        source: csv::Error,
    },

    /// The export has no header or no data rows.
    #[error("CSV file is empty or has no data rows: {path}")]
    EmptyCsv { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
