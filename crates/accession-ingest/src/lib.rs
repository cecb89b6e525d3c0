//! Accession list ingestion.
//!
//! Loads the CSV exports of the accession workbook and the metadata mapping
//! workbook into Polars DataFrames and typed mapping tables.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use accession_ingest::{load_accession_list, load_field_mappings};
//!
//! let accessions = load_accession_list(Path::new("accessions.csv"))?;
//! let mappings = load_field_mappings(Path::new("mapping.csv"))?;
//! ```

mod accession;
mod csv;
mod error;
pub mod frame;
mod tables;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{read_csv_table, require_columns};

// === Accession Lists ===
pub use accession::{
    ACCESSION_COLUMNS, METADATA_COLUMNS, load_accession_list, load_assigned_accession_list,
    load_metadata_accession_list,
};

// === Mapping Workbook ===
pub use tables::{load_field_mappings, load_fixed_values, load_template};

// === Frame Helpers ===
pub use frame::{any_to_string, column_names, has_column, parse_flag, string_values};
