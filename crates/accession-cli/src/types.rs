use std::path::PathBuf;

use accession_transform::AssignmentSummary;

#[derive(Debug)]
pub struct AssignIdsResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub summary: AssignmentSummary,
}

/// One written per-box file.
#[derive(Debug)]
pub struct SheetSummary {
    pub box_number: u32,
    pub rows: usize,
    pub path: PathBuf,
}

#[derive(Debug)]
pub struct BoxSheetsResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub sheets: Vec<SheetSummary>,
    pub negatives: usize,
    pub out_of_range: usize,
}

#[derive(Debug)]
pub struct MetadataResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub mappings: usize,
    pub fixed_values: usize,
    pub template_columns: usize,
    pub sheets: Vec<SheetSummary>,
}

#[derive(Debug)]
pub struct PlaceResult {
    pub city: String,
    pub state: String,
    pub country: String,
    pub heading: String,
}

#[derive(Debug)]
pub enum CommandOutcome {
    AssignIds(AssignIdsResult),
    BoxSheets(BoxSheetsResult),
    Metadata(MetadataResult),
    Place(PlaceResult),
}
