//! Error types for catalog ingestion.

use std::path::PathBuf;

use lmcat_normalize::NormalizationError;
use thiserror::Error;

/// Errors that can occur while extracting the source table into the forest.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Failed to read the input document.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create a forest directory or write a record.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Table Errors ===
    /// The document contains no data table.
    #[error("no data table found in input")]
    TableNotFound,

    /// The markup could not be tokenized.
    #[error("malformed table markup at byte {position}: {message}")]
    Markup { position: u64, message: String },

    /// The table has no header row.
    #[error("data table has no header row")]
    EmptyTable,

    /// A required column label is missing from the header row.
    #[error("required column for '{field}' not found in header")]
    MissingColumn { field: String },

    // === Record Errors ===
    /// A cell could not be normalized.
    #[error("row {row} ({name}): {source}")]
    Normalization {
        row: usize,
        name: String,
        #[source]
        source: NormalizationError,
    },

    /// A record could not be serialized.
    #[error("failed to serialize record for {name}: {message}")]
    Serialize { name: String, message: String },
}

pub type Result<T> = std::result::Result<T, IngestError>;
