//! Error types for column resolution.

use std::path::PathBuf;

use skiptrace_model::{LogicalField, ModelError};
use thiserror::Error;

/// Errors from resolving address fields.
#[derive(Debug, Error)]
pub enum MappingError {
    /// One or more fields matched no column above the similarity cutoff.
    #[error(
        "could not detect all required address fields (missing: {}); check your column headers",
        join_fields(.missing)
    )]
    IncompleteSchema { missing: Vec<LogicalField> },

    /// An alias override file could not be read.
    #[error("failed to read alias file {path}: {source}")]
    AliasFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An alias override file is not valid TOML.
    #[error("failed to parse alias file {path}: {source}")]
    AliasFileParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Resolved columns did not form a valid field map.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// A field was configured with no aliases at all.
    #[error("alias list for {0} is empty")]
    EmptyAliasList(LogicalField),
}

fn join_fields(fields: &[LogicalField]) -> String {
    fields
        .iter()
        .map(LogicalField::code)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for mapping operations.
pub type Result<T> = std::result::Result<T, MappingError>;
