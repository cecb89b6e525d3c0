//! CSV output for accession batch jobs.
//!
//! - Updated accession lists with derived identifier columns
//! - Per-box digitization worksheets
//! - Per-box metadata spreadsheets for ingest

mod common;
mod error;
mod sheets;
mod writer;

pub use common::{ensure_output_dir, ensure_parent_dir};
pub use error::{OutputError, Result};
pub use sheets::{write_accession_list, write_box_sheets, write_metadata_sheets};
pub use writer::{render_frame_csv, write_frame_csv};
