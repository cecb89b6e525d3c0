//! Per-box digitization worksheets.
//!
//! Digitization staff get one sheet per physical box, listing every negative
//! in that box. Negatives scanned in the pilot show a placeholder instead of
//! an identifier so they are not scanned again.

use polars::prelude::DataFrame;
use tracing::{debug, info, warn};

use accession_ingest::frame::text_column;
use accession_model::columns::{BOX_NUMBER, BOX_SHEET_COLUMNS, IS_NEGATIVE, LOCAL_IDENTIFIER};
use accession_model::{BoxRange, CollectionConfig};

use crate::error::Result;
use crate::frame::{flags, text};

/// Worksheet for one box.
#[derive(Debug, Clone)]
pub struct BoxSheet {
    pub box_number: u32,
    pub frame: DataFrame,
}

impl BoxSheet {
    pub fn rows(&self) -> usize {
        self.frame.height()
    }
}

/// Result of splitting an accession list into box worksheets.
#[derive(Debug, Clone)]
pub struct BoxSplit {
    /// One sheet per box in range, in box order, including empty ones.
    pub sheets: Vec<BoxSheet>,
    /// Negatives in the input.
    pub negatives: usize,
    /// Negatives whose box number is not in range.
    pub out_of_range: usize,
}

/// Box number of a row, when it is a plain run of digits.
pub(crate) fn parse_box_number(value: &str) -> Option<u32> {
    let digits = value.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u32>().ok()
}

/// Splits identifier-assigned accession rows into box worksheets.
///
/// Only negatives are listed. Every box in `config.boxes` yields a sheet,
/// header-only when the box holds no negatives.
pub fn split_by_box(df: &DataFrame, config: &CollectionConfig) -> Result<BoxSplit> {
    let negative = flags(df, IS_NEGATIVE)?;
    let boxes: Vec<Option<u32>> = text(df, BOX_NUMBER)?
        .iter()
        .map(|value| parse_box_number(value))
        .collect();

    let mut sources = Vec::with_capacity(BOX_SHEET_COLUMNS.len());
    for (target, source) in BOX_SHEET_COLUMNS {
        let mut values = text(df, source)?;
        if target == LOCAL_IDENTIFIER {
            for value in &mut values {
                if value.trim().is_empty() {
                    value.clone_from(&config.already_digitized_placeholder);
                }
            }
        }
        sources.push((target, values));
    }

    let negatives = negative.iter().filter(|flag| **flag).count();
    let out_of_range = negative
        .iter()
        .zip(&boxes)
        .filter(|(is_negative, number)| {
            **is_negative && !number.is_some_and(|n| config.boxes.contains(n))
        })
        .count();
    if out_of_range > 0 {
        warn!(
            out_of_range,
            first = config.boxes.first,
            last = config.boxes.last,
            "negatives with a box number outside the worksheet range"
        );
    }

    let mut sheets = Vec::with_capacity(config.boxes.len());
    for box_number in config.boxes.iter() {
        let rows: Vec<usize> = (0..df.height())
            .filter(|&row| negative[row] && boxes[row] == Some(box_number))
            .collect();
        let columns = sources
            .iter()
            .map(|(target, values)| {
                let picked = rows.iter().map(|&row| values[row].clone()).collect();
                text_column(target, picked)
            })
            .collect();
        let frame = DataFrame::new(columns)?;
        debug!(box_number, rows = frame.height(), "built box worksheet");
        sheets.push(BoxSheet { box_number, frame });
    }

    info!(
        boxes = sheets.len(),
        negatives,
        out_of_range,
        "split accession list into box worksheets"
    );

    Ok(BoxSplit {
        sheets,
        negatives,
        out_of_range,
    })
}

/// Box range covering a single requested box, or the configured range.
pub fn boxes_to_process(config: &CollectionConfig, only: Option<u32>) -> BoxRange {
    only.map_or(config.boxes, BoxRange::single)
}
