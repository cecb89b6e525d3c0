//! Error types for accession transforms.

use thiserror::Error;

use accession_ingest::IngestError;
use accession_model::ModelError;

#[derive(Debug, Error)]
pub enum TransformError {
    /// An input frame lacks a column the transform reads.
    #[error("required column '{column}' not found")]
    MissingColumn { column: String },

    /// A mapping or fixed value writes to a column the template does not define.
    #[error("{origin} target '{column}' is not a template column")]
    UnknownTargetColumn { column: String, origin: &'static str },

    /// A boolean column holds something other than `True`/`False`.
    #[error("invalid {column} value '{value}' at row {row}")]
    InvalidFlag {
        column: String,
        value: String,
        row: usize,
    },

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Ingest(IngestError),

    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<IngestError> for TransformError {
    fn from(err: IngestError) -> Self {
        match err {
            IngestError::ColumnNotFound { column } => Self::MissingColumn { column },
            other => Self::Ingest(other),
        }
    }
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;
