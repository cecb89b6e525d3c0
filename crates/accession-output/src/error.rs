//! Error types for output generation.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV encoder rejected a record.
    #[error("failed to encode CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<accession_ingest::IngestError> for OutputError {
    fn from(err: accession_ingest::IngestError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, OutputError>;
