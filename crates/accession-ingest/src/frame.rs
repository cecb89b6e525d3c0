//! Polars helpers for text-only accession frames.
//!
//! Every input column is loaded as text with missing cells filled by the
//! empty string, so downstream code only reads `String` columns plus the
//! boolean and optional columns it derives itself.

use polars::prelude::{AnyValue, Column, DataFrame, DataType};

use crate::error::{IngestError, Result};

/// Converts a Polars `AnyValue` to its CSV text form.
///
/// Null becomes the empty string and booleans render as `True`/`False`, the
/// spelling the accession workbooks already use.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Boolean(b) => if b { "True" } else { "False" }.to_string(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        other => other.to_string(),
    }
}

/// Parses a `True`/`False` cell. Blank cells read as `false`.
pub fn parse_flag(value: &str) -> Option<bool> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("false") {
        Some(false)
    } else if trimmed.eq_ignore_ascii_case("true") {
        Some(true)
    } else {
        None
    }
}

/// Column names in frame order.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect()
}

pub fn has_column(df: &DataFrame, column: &str) -> bool {
    df.get_column_names()
        .iter()
        .any(|name| name.as_str() == column)
}

/// Reads a column as text, one entry per row; nulls become empty strings.
pub fn string_values(df: &DataFrame, column: &str) -> Result<Vec<String>> {
    if !has_column(df, column) {
        return Err(IngestError::ColumnNotFound {
            column: column.to_string(),
        });
    }
    let col = df.column(column)?;
    column_strings(col)
}

/// Text values of a single column, casting non-text columns first.
pub fn column_strings(col: &Column) -> Result<Vec<String>> {
    if col.dtype() == &DataType::String {
        let values = col.str()?;
        return Ok(values
            .iter()
            .map(|value| value.unwrap_or("").to_string())
            .collect());
    }
    let mut out = Vec::with_capacity(col.len());
    for idx in 0..col.len() {
        out.push(any_to_string(col.get(idx)?));
    }
    Ok(out)
}

/// Builds a text column from owned values.
pub fn text_column(name: &str, values: Vec<String>) -> Column {
    Column::new(name.into(), values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> DataFrame {
        DataFrame::new(vec![
            Column::new("Label".into(), [Some("PittCon 60"), None]),
            Column::new("Is negative".into(), [true, false]),
        ])
        .unwrap()
    }

    #[test]
    fn string_values_fill_nulls() {
        let df = frame();
        assert_eq!(
            string_values(&df, "Label").unwrap(),
            vec!["PittCon 60".to_string(), String::new()]
        );
    }

    #[test]
    fn boolean_columns_render_as_words() {
        let df = frame();
        assert_eq!(
            string_values(&df, "Is negative").unwrap(),
            vec!["True".to_string(), "False".to_string()]
        );
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let df = frame();
        let err = string_values(&df, "Box Number").unwrap_err();
        assert!(matches!(err, IngestError::ColumnNotFound { column } if column == "Box Number"));
    }

    #[test]
    fn parse_flag_accepts_workbook_spellings() {
        assert_eq!(parse_flag("True"), Some(true));
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("False"), Some(false));
        assert_eq!(parse_flag(""), Some(false));
        assert_eq!(parse_flag("yes"), None);
    }
}
