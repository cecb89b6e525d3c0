use polars::prelude::{DataFrame, DataType};

use accession_ingest::{parse_flag, string_values};

use crate::error::{Result, TransformError};

/// Text values of a column; a missing column is a schema error.
pub(crate) fn text(df: &DataFrame, column: &str) -> Result<Vec<String>> {
    Ok(string_values(df, column)?)
}

/// Boolean values of a derived flag column.
///
/// Accepts an in-memory boolean column or the `True`/`False` text read back
/// from a written accession list.
pub(crate) fn flags(df: &DataFrame, column: &str) -> Result<Vec<bool>> {
    if accession_ingest::has_column(df, column) {
        let col = df.column(column)?;
        if col.dtype() == &DataType::Boolean {
            return Ok(col.bool()?.iter().map(|v| v.unwrap_or(false)).collect());
        }
    }
    text(df, column)?
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            parse_flag(&value).ok_or_else(|| TransformError::InvalidFlag {
                column: column.to_string(),
                value,
                row,
            })
        })
        .collect()
}
