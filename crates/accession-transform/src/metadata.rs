//! Metadata spreadsheet mapping.
//!
//! Builds rows for the ingest spreadsheet template from accession rows. The
//! mapping table is interpreted entry by entry; each entry's rule decides how
//! the target column is filled. Fixed values are applied last and win over
//! mapped values. Template columns nobody fills stay empty.

use polars::prelude::{BooleanChunked, DataFrame, NewChunkedArray};
use tracing::{debug, info};

use accession_ingest::frame::text_column;
use accession_model::columns::{BOX_NUMBER, CITY, COUNTRY, LOCAL_IDENTIFIER, STATE};
use accession_model::{BoxRange, FieldMapping, FixedValue, MetadataTemplate, ModificationRule};

use crate::box_sheets::parse_box_number;
use crate::error::{Result, TransformError};
use crate::frame::text;
use crate::place::place_normalize;

/// Metadata rows for one box.
#[derive(Debug, Clone)]
pub struct MetadataSheet {
    pub box_number: u32,
    pub frame: DataFrame,
}

impl MetadataSheet {
    pub fn rows(&self) -> usize {
        self.frame.height()
    }
}

/// Renders a box number as its physical location label.
pub fn box_label(value: &str) -> String {
    format!("Box {value}")
}

/// Rows of one box that received a local identifier.
///
/// Rows without an identifier were digitized in the pilot and are left out.
pub fn select_box_rows(df: &DataFrame, box_number: u32) -> Result<DataFrame> {
    let boxes = text(df, BOX_NUMBER)?;
    let identifiers = text(df, LOCAL_IDENTIFIER)?;
    let keep: Vec<bool> = boxes
        .iter()
        .zip(&identifiers)
        .map(|(number, identifier)| {
            parse_box_number(number) == Some(box_number) && !identifier.trim().is_empty()
        })
        .collect();
    let mask = BooleanChunked::from_slice("box".into(), &keep);
    Ok(df.filter(&mask)?)
}

/// Values one mapping entry produces for every row.
fn apply_mapping(mapping: &FieldMapping, rows: &DataFrame) -> Result<Vec<String>> {
    match mapping.rule {
        ModificationRule::DirectCopy => text(rows, &mapping.source_field),
        ModificationRule::BoxLabel => Ok(text(rows, &mapping.source_field)?
            .iter()
            .map(|value| box_label(value))
            .collect()),
        ModificationRule::Place => {
            let cities = text(rows, CITY)?;
            let states = text(rows, STATE)?;
            let countries = text(rows, COUNTRY)?;
            Ok(cities
                .iter()
                .zip(&states)
                .zip(&countries)
                .map(|((city, state), country)| place_normalize(city, state, country))
                .collect())
        }
    }
}

fn template_position(
    template: &MetadataTemplate,
    column: &str,
    origin: &'static str,
) -> Result<usize> {
    template
        .position(column)
        .ok_or_else(|| TransformError::UnknownTargetColumn {
            column: column.to_string(),
            origin,
        })
}

/// Builds the metadata frame for a set of accession rows.
///
/// The output has exactly the template's columns, in template order, and one
/// row per input row.
pub fn build_metadata_frame(
    rows: &DataFrame,
    mappings: &[FieldMapping],
    fixed_values: &[FixedValue],
    template: &MetadataTemplate,
) -> Result<DataFrame> {
    let height = rows.height();
    let mut values: Vec<Vec<String>> = vec![vec![String::new(); height]; template.len()];

    for mapping in mappings {
        let position = template_position(template, &mapping.target_field, "mapping")?;
        values[position] = apply_mapping(mapping, rows)?;
        debug!(
            source = %mapping.source_field,
            target = %mapping.target_field,
            rule = mapping.rule.as_str(),
            "applied field mapping"
        );
    }

    for fixed in fixed_values {
        let position = template_position(template, &fixed.target_field, "fixed value")?;
        values[position] = vec![fixed.value.clone(); height];
    }

    let columns = template
        .columns
        .iter()
        .zip(values)
        .map(|(name, column)| text_column(name, column))
        .collect();
    Ok(DataFrame::new(columns)?)
}

/// Builds one metadata sheet per box in `boxes`.
pub fn build_metadata_sheets(
    df: &DataFrame,
    mappings: &[FieldMapping],
    fixed_values: &[FixedValue],
    template: &MetadataTemplate,
    boxes: BoxRange,
) -> Result<Vec<MetadataSheet>> {
    let mut sheets = Vec::with_capacity(boxes.len());
    for box_number in boxes.iter() {
        let rows = select_box_rows(df, box_number)?;
        let frame = build_metadata_frame(&rows, mappings, fixed_values, template)?;
        debug!(box_number, rows = frame.height(), "built metadata sheet");
        sheets.push(MetadataSheet { box_number, frame });
    }
    info!(
        boxes = sheets.len(),
        rows = sheets.iter().map(MetadataSheet::rows).sum::<usize>(),
        "built metadata sheets"
    );
    Ok(sheets)
}
