//! Data model for archival accession list processing.
//!
//! Shared by the ingest, transform, and output crates: column names, local
//! identifiers, metadata mapping tables, and per-collection settings.

pub mod columns;
pub mod config;
pub mod error;
pub mod identifier;
pub mod mapping;

pub use config::{ALREADY_DIGITIZED, BoxRange, CollectionConfig, KLEIN_PILOT_LABELS};
pub use error::{ModelError, Result};
pub use identifier::LocalIdentifier;
pub use mapping::{FieldMapping, FixedValue, MetadataTemplate, ModificationRule};
