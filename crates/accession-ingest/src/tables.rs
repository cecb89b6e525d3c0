//! Loading of the metadata mapping workbook tabs.
//!
//! The mapping workbook is exported as three CSV files: the field mapping,
//! the fixed values, and a header-only template of the ingest spreadsheet.

use std::path::Path;

use accession_model::columns::{
    FIXED_VALUE, MAPPING_MODIFICATION, MAPPING_SOURCE_FIELD, MAPPING_TARGET_FIELD,
};
use accession_model::{FieldMapping, FixedValue, MetadataTemplate, ModificationRule};

use crate::csv::{read_csv_table, require_columns};
use crate::error::{IngestError, Result};
use crate::frame::{column_names, string_values};

/// Spreadsheet line of a data row (header is line 1).
fn sheet_line(row: usize) -> usize {
    row + 2
}

/// Loads the field mapping table.
///
/// Blank rows are skipped. A row naming only one side of the mapping is an
/// error, as is a modification note that resolves to no known rule.
pub fn load_field_mappings(path: &Path) -> Result<Vec<FieldMapping>> {
    let df = read_csv_table(path)?;
    require_columns(
        &df,
        &[
            MAPPING_SOURCE_FIELD,
            MAPPING_TARGET_FIELD,
            MAPPING_MODIFICATION,
        ],
        path,
    )?;

    let sources = string_values(&df, MAPPING_SOURCE_FIELD)?;
    let targets = string_values(&df, MAPPING_TARGET_FIELD)?;
    let modifications = string_values(&df, MAPPING_MODIFICATION)?;

    let mut mappings = Vec::with_capacity(df.height());
    for (row, ((source, target), modification)) in sources
        .iter()
        .zip(&targets)
        .zip(&modifications)
        .enumerate()
    {
        let source = source.trim();
        let target = target.trim();
        if source.is_empty() && target.is_empty() {
            continue;
        }
        if source.is_empty() || target.is_empty() {
            let (field, value) = if source.is_empty() {
                (MAPPING_SOURCE_FIELD, target)
            } else {
                (MAPPING_TARGET_FIELD, source)
            };
            return Err(IngestError::InvalidValue {
                field: field.to_string(),
                value: format!("<blank> (paired with '{value}')"),
                path: path.to_path_buf(),
            });
        }
        let rule = ModificationRule::resolve(source, modification).map_err(|source| {
            IngestError::Mapping {
                row: sheet_line(row),
                path: path.to_path_buf(),
                source,
            }
        })?;
        mappings.push(FieldMapping::new(source, target, rule));
    }

    tracing::debug!(
        path = %path.display(),
        mappings = mappings.len(),
        "loaded field mappings"
    );

    Ok(mappings)
}

/// Loads the fixed value table. Values are kept verbatim.
pub fn load_fixed_values(path: &Path) -> Result<Vec<FixedValue>> {
    let df = read_csv_table(path)?;
    require_columns(&df, &[MAPPING_TARGET_FIELD, FIXED_VALUE], path)?;

    let targets = string_values(&df, MAPPING_TARGET_FIELD)?;
    let values = string_values(&df, FIXED_VALUE)?;

    let mut fixed = Vec::with_capacity(df.height());
    for (target, value) in targets.iter().zip(values) {
        let target = target.trim();
        if target.is_empty() {
            if value.trim().is_empty() {
                continue;
            }
            return Err(IngestError::InvalidValue {
                field: MAPPING_TARGET_FIELD.to_string(),
                value: format!("<blank> (paired with '{value}')"),
                path: path.to_path_buf(),
            });
        }
        fixed.push(FixedValue::new(target, value));
    }

    tracing::debug!(
        path = %path.display(),
        fixed_values = fixed.len(),
        "loaded fixed values"
    );

    Ok(fixed)
}

/// Loads the column order of the ingest spreadsheet template.
pub fn load_template(path: &Path) -> Result<MetadataTemplate> {
    let df = read_csv_table(path)?;
    let columns = column_names(&df);
    if columns.iter().all(|name| name.trim().is_empty()) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    Ok(MetadataTemplate::new(columns))
}
