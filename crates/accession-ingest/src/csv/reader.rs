//! CSV file reading into text-only DataFrames.

use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

use crate::error::{IngestError, Result};
use crate::frame::{column_strings, has_column, text_column};

/// Check the file exists and holds at least a header row.
fn check_file(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    if metadata.len() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

/// Normalizes a header value: strips a UTF-8 BOM and surrounding whitespace.
///
/// Inner whitespace is kept; some workbook headers contain line breaks.
fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}

/// Reads a CSV file into a DataFrame of text columns.
///
/// Every column is read as text (no type inference) and empty cells become
/// empty strings, so values pass through to outputs unchanged.
pub fn read_csv_table(path: &Path) -> Result<DataFrame> {
    check_file(path)?;

    let raw = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut columns = Vec::with_capacity(raw.width());
    for col in raw.get_columns() {
        let name = normalize_header(col.name().as_str());
        columns.push(text_column(&name, column_strings(col)?));
    }
    let df = DataFrame::new(columns)?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read csv table"
    );

    Ok(df)
}

/// Fails with [`IngestError::MissingColumn`] naming the first absent column.
pub fn require_columns(df: &DataFrame, columns: &[&str], path: &Path) -> Result<()> {
    for column in columns {
        if !has_column(df, column) {
            return Err(IngestError::MissingColumn {
                column: (*column).to_string(),
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    use crate::frame::{column_names, string_values};

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_table_keeps_text() {
        let file = create_temp_csv("Box Number,ID,Label\n1,007,PittCon 60\n2,,\n");
        let df = read_csv_table(file.path()).unwrap();

        assert_eq!(column_names(&df), vec!["Box Number", "ID", "Label"]);
        assert_eq!(df.height(), 2);
        // Leading zeros survive because nothing is parsed as a number.
        assert_eq!(string_values(&df, "ID").unwrap(), vec!["007", ""]);
        assert_eq!(string_values(&df, "Label").unwrap(), vec!["PittCon 60", ""]);
    }

    #[test]
    fn test_read_csv_table_multiline_header() {
        let file = create_temp_csv("Label,\"Format \n(35mm)\"\nA,negatives\n");
        let df = read_csv_table(file.path()).unwrap();

        assert_eq!(column_names(&df), vec!["Label", "Format \n(35mm)"]);
        assert_eq!(
            string_values(&df, "Format \n(35mm)").unwrap(),
            vec!["negatives"]
        );
    }

    #[test]
    fn test_read_csv_table_with_bom() {
        let file = create_temp_csv("\u{feff}A,B,C\n1,2,3\n");
        let df = read_csv_table(file.path()).unwrap();

        assert_eq!(column_names(&df), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_read_csv_table_header_only() {
        let file = create_temp_csv("File,Title,Place 1 Name\n");
        let df = read_csv_table(file.path()).unwrap();

        assert_eq!(column_names(&df), vec!["File", "Title", "Place 1 Name"]);
        assert_eq!(df.height(), 0);
    }

    #[test]
    fn test_read_csv_table_empty_file() {
        let file = create_temp_csv("");
        let result = read_csv_table(file.path());

        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_read_csv_table_missing_file() {
        let result = read_csv_table(Path::new("/nonexistent/accessions.csv"));

        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_require_columns_names_missing_column() {
        let file = create_temp_csv("Label\nA\n");
        let df = read_csv_table(file.path()).unwrap();

        assert!(require_columns(&df, &["Label"], file.path()).is_ok());
        let err = require_columns(&df, &["Label", "Box Number"], file.path()).unwrap_err();
        assert!(matches!(err, IngestError::MissingColumn { column, .. } if column == "Box Number"));
    }
}
