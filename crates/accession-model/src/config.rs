//! Collection settings for the accession batch jobs.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::identifier::LocalIdentifier;

/// Labels of the series scanned during the 2017 pilot.
pub const KLEIN_PILOT_LABELS: [&str; 8] = [
    "PittCon 60",
    "ChiCon 62",
    "DisCon 63",
    "Tricon 66",
    "Nycon III",
    "BayCon 68",
    "St Louis Con 69",
    "Noreascon 71",
];

/// Placeholder shown to digitization staff for rows that must not be rescanned.
pub const ALREADY_DIGITIZED: &str = "ALREADY DIGITIZED";

/// Inclusive range of physical box numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxRange {
    pub first: u32,
    pub last: u32,
}

impl BoxRange {
    pub fn new(first: u32, last: u32) -> Self {
        Self { first, last }
    }

    pub fn single(number: u32) -> Self {
        Self::new(number, number)
    }

    pub fn contains(&self, number: u32) -> bool {
        self.first <= number && number <= self.last
    }

    pub fn iter(&self) -> RangeInclusive<u32> {
        self.first..=self.last
    }

    pub fn len(&self) -> usize {
        if self.last < self.first {
            0
        } else {
            (self.last - self.first) as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for BoxRange {
    fn default() -> Self {
        Self::new(1, 11)
    }
}

/// Settings that vary per collection.
///
/// Defaults describe the Jay Kay Klein photographs (MS381).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    /// Institution prefix of every local identifier.
    pub institution_prefix: String,
    /// Collection number, lowercase as it appears in identifiers and file names.
    pub collection_id: String,
    /// Component number; every object in this collection is single-component.
    pub component_number: u16,
    /// Labels whose items were already digitized.
    pub pilot_labels: BTreeSet<String>,
    /// Literal prefix of the format field marking a negative.
    pub negative_format_prefix: String,
    /// Physical boxes that receive worksheets.
    pub boxes: BoxRange,
    /// Worksheet text for negatives without a new identifier.
    pub already_digitized_placeholder: String,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            institution_prefix: "curivsc".to_string(),
            collection_id: "ms381".to_string(),
            component_number: 1,
            pilot_labels: KLEIN_PILOT_LABELS.iter().map(|s| s.to_string()).collect(),
            negative_format_prefix: "negatives".to_string(),
            boxes: BoxRange::default(),
            already_digitized_placeholder: ALREADY_DIGITIZED.to_string(),
        }
    }
}

impl CollectionConfig {
    pub fn with_boxes(mut self, boxes: BoxRange) -> Self {
        self.boxes = boxes;
        self
    }

    pub fn with_pilot_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pilot_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Build the identifier for the given object number.
    pub fn identifier(&self, object_number: u32) -> LocalIdentifier {
        LocalIdentifier::new(
            self.institution_prefix.clone(),
            self.collection_id.clone(),
            object_number,
            self.component_number,
        )
    }

    pub fn is_pilot_label(&self, label: &str) -> bool {
        self.pilot_labels.contains(label)
    }

    pub fn is_negative_format(&self, format: &str) -> bool {
        !self.negative_format_prefix.is_empty() && format.starts_with(&self.negative_format_prefix)
    }

    /// Worksheet file name for a box, e.g. `ms381_box_001_digi_list.csv`.
    pub fn box_sheet_file_name(&self, box_number: u32) -> String {
        format!("{}_box_{box_number:03}_digi_list.csv", self.collection_id)
    }

    /// Metadata spreadsheet file name for a box, e.g. `ms381_box_001_metadata.csv`.
    pub fn metadata_file_name(&self, box_number: u32) -> String {
        format!("{}_box_{box_number:03}_metadata.csv", self.collection_id)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("institution_prefix", &self.institution_prefix),
            ("collection_id", &self.collection_id),
        ] {
            if value.trim().is_empty() {
                return Err(ModelError::InvalidConfig(format!("{name} is empty")));
            }
            if value.contains('_') {
                return Err(ModelError::InvalidConfig(format!(
                    "{name} '{value}' contains '_'"
                )));
            }
        }
        if self.negative_format_prefix.is_empty() {
            return Err(ModelError::InvalidConfig(
                "negative_format_prefix is empty".to_string(),
            ));
        }
        if self.boxes.is_empty() {
            return Err(ModelError::InvalidConfig(format!(
                "box range {}..={} is empty",
                self.boxes.first, self.boxes.last
            )));
        }
        if self.already_digitized_placeholder.trim().is_empty() {
            return Err(ModelError::InvalidConfig(
                "already_digitized_placeholder is empty".to_string(),
            ));
        }
        Ok(())
    }
}
