//! Named output files for each job.

use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;
use tracing::info;

use accession_model::CollectionConfig;
use accession_transform::{BoxSheet, MetadataSheet};

use crate::common::ensure_output_dir;
use crate::error::Result;
use crate::writer::write_frame_csv;

/// Writes the accession list with its derived identifier columns.
pub fn write_accession_list(df: &DataFrame, path: &Path) -> Result<PathBuf> {
    write_frame_csv(df, path)?;
    info!(path = %path.display(), rows = df.height(), "wrote accession list");
    Ok(path.to_path_buf())
}

/// Writes one digitization worksheet per box into `output_dir`.
pub fn write_box_sheets(
    sheets: &[BoxSheet],
    output_dir: &Path,
    config: &CollectionConfig,
) -> Result<Vec<PathBuf>> {
    let dir = ensure_output_dir(output_dir)?;
    let mut outputs = Vec::with_capacity(sheets.len());
    for sheet in sheets {
        let path = dir.join(config.box_sheet_file_name(sheet.box_number));
        write_frame_csv(&sheet.frame, &path)?;
        outputs.push(path);
    }
    info!(dir = %dir.display(), files = outputs.len(), "wrote box worksheets");
    Ok(outputs)
}

/// Writes one metadata spreadsheet per box into `output_dir`.
pub fn write_metadata_sheets(
    sheets: &[MetadataSheet],
    output_dir: &Path,
    config: &CollectionConfig,
) -> Result<Vec<PathBuf>> {
    let dir = ensure_output_dir(output_dir)?;
    let mut outputs = Vec::with_capacity(sheets.len());
    for sheet in sheets {
        let path = dir.join(config.metadata_file_name(sheet.box_number));
        write_frame_csv(&sheet.frame, &path)?;
        outputs.push(path);
    }
    info!(dir = %dir.display(), files = outputs.len(), "wrote metadata sheets");
    Ok(outputs)
}
