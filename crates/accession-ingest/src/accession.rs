//! Accession list loading.

use std::path::Path;

use polars::prelude::DataFrame;

use accession_model::columns::{
    BOX_NUMBER, FORMAT, IS_NEGATIVE, LABEL, LOCAL_IDENTIFIER, box_sheet_sources,
};

use crate::csv::{read_csv_table, require_columns};
use crate::error::Result;

/// Columns identifier assignment reads.
pub const ACCESSION_COLUMNS: [&str; 2] = [LABEL, FORMAT];

/// Columns the metadata job selects rows by. Mapped source columns are
/// checked when the mapping runs.
pub const METADATA_COLUMNS: [&str; 2] = [BOX_NUMBER, LOCAL_IDENTIFIER];

/// Loads an accession list before identifier assignment.
pub fn load_accession_list(path: &Path) -> Result<DataFrame> {
    let df = read_csv_table(path)?;
    require_columns(&df, &ACCESSION_COLUMNS, path)?;
    tracing::info!(path = %path.display(), rows = df.height(), "loaded accession list");
    Ok(df)
}

/// Loads an accession list written by identifier assignment.
///
/// Requires the worksheet source columns (which include `Local Identifier`)
/// and the derived `Is negative` flag.
pub fn load_assigned_accession_list(path: &Path) -> Result<DataFrame> {
    let df = read_csv_table(path)?;
    let mut required: Vec<&str> = box_sheet_sources().collect();
    required.push(IS_NEGATIVE);
    require_columns(&df, &required, path)?;
    tracing::info!(
        path = %path.display(),
        rows = df.height(),
        "loaded identifier-assigned accession list"
    );
    Ok(df)
}

/// Loads an identifier-assigned accession list for metadata mapping.
pub fn load_metadata_accession_list(path: &Path) -> Result<DataFrame> {
    let df = read_csv_table(path)?;
    require_columns(&df, &METADATA_COLUMNS, path)?;
    tracing::info!(
        path = %path.display(),
        rows = df.height(),
        "loaded accession list for metadata"
    );
    Ok(df)
}
