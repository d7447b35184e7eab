//! Error types for address file ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an address file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file does not exist.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be parsed.
    #[error("failed to parse CSV {source_name} at line {line}: {message}")]
    CsvParse {
        source_name: String,
        line: u64,
        message: String,
    },

    /// The file has no header row.
    #[error("CSV file is empty: {source_name}")]
    EmptyCsv { source_name: String },
}

/// Result type alias for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
