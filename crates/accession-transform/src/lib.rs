//! Batch transforms over accession lists.
//!
//! - [`identifiers`]: local identifier assignment for newly eligible negatives
//! - [`box_sheets`]: per-box digitization worksheets
//! - [`place`]: place heading normalization
//! - [`metadata`]: mapping accession columns into the ingest spreadsheet template

pub mod box_sheets;
pub mod error;
mod frame;
pub mod identifiers;
pub mod metadata;
pub mod place;

pub use box_sheets::{BoxSheet, BoxSplit, boxes_to_process, split_by_box};
pub use error::{Result, TransformError};
pub use identifiers::{
    AssignedAccessions, AssignmentSummary, RowFlags, assign_identifiers, assign_local_identifiers,
    classify_row,
};
pub use metadata::{
    MetadataSheet, box_label, build_metadata_frame, build_metadata_sheets, select_box_rows,
};
pub use place::{place_normalize, state_heading};
