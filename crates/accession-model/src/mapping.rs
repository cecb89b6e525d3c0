use serde::{Deserialize, Serialize};

use crate::columns::{BOX_NUMBER, PLACE_SOURCE};
use crate::error::{ModelError, Result};

/// Named transform applied while copying a source field into the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModificationRule {
    /// Copy the source value verbatim.
    #[default]
    DirectCopy,
    /// Render the box number as `Box {n}`.
    BoxLabel,
    /// Normalize city, state, and country into a place heading.
    Place,
}

impl ModificationRule {
    /// Resolve the rule for one mapping table row.
    ///
    /// An empty modification cell means a direct copy. A cell naming a rule
    /// selects it; any other note falls back to the source field convention
    /// used by the mapping workbook.
    pub fn resolve(source_field: &str, modification: &str) -> Result<Self> {
        let modification = modification.trim();
        if modification.is_empty() {
            return Ok(Self::DirectCopy);
        }
        match modification.to_ascii_lowercase().as_str() {
            "box label" | "box_label" => return Ok(Self::BoxLabel),
            "place" => return Ok(Self::Place),
            _ => {}
        }
        match source_field.trim() {
            BOX_NUMBER => Ok(Self::BoxLabel),
            PLACE_SOURCE => Ok(Self::Place),
            _ => Err(ModelError::UnknownModification {
                source_field: source_field.to_string(),
                modification: modification.to_string(),
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::DirectCopy => "direct copy",
            Self::BoxLabel => "box label",
            Self::Place => "place",
        }
    }
}

/// One row of the mapping table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    pub source_field: String,
    pub target_field: String,
    pub rule: ModificationRule,
}

impl FieldMapping {
    pub fn new(
        source_field: impl Into<String>,
        target_field: impl Into<String>,
        rule: ModificationRule,
    ) -> Self {
        Self {
            source_field: source_field.into(),
            target_field: target_field.into(),
            rule,
        }
    }

    pub fn direct(source_field: impl Into<String>, target_field: impl Into<String>) -> Self {
        Self::new(source_field, target_field, ModificationRule::DirectCopy)
    }
}

/// Constant written to a template column in every output row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedValue {
    pub target_field: String,
    pub value: String,
}

impl FixedValue {
    pub fn new(target_field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            target_field: target_field.into(),
            value: value.into(),
        }
    }
}

/// Ordered column schema of the ingest spreadsheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataTemplate {
    pub columns: Vec<String>,
}

impl MetadataTemplate {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|name| name == column)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_modification_is_direct_copy() {
        assert_eq!(
            ModificationRule::resolve("Label", "").unwrap(),
            ModificationRule::DirectCopy
        );
        assert_eq!(
            ModificationRule::resolve("Label", "   ").unwrap(),
            ModificationRule::DirectCopy
        );
    }

    #[test]
    fn named_rules_resolve_regardless_of_source() {
        assert_eq!(
            ModificationRule::resolve("Anything", "Place").unwrap(),
            ModificationRule::Place
        );
        assert_eq!(
            ModificationRule::resolve("Anything", "BOX LABEL").unwrap(),
            ModificationRule::BoxLabel
        );
    }

    #[test]
    fn free_text_notes_fall_back_to_source_field() {
        assert_eq!(
            ModificationRule::resolve("Box Number", "prefix with 'Box '").unwrap(),
            ModificationRule::BoxLabel
        );
        assert_eq!(
            ModificationRule::resolve("City; State; Country", "LC heading style").unwrap(),
            ModificationRule::Place
        );
    }

    #[test]
    fn unknown_modification_is_an_error() {
        let err = ModificationRule::resolve("Year", "reformat").unwrap_err();
        assert!(matches!(err, ModelError::UnknownModification { .. }));
        assert_eq!(
            err.to_string(),
            "unknown modification 'reformat' for source field 'Year'"
        );
    }

    #[test]
    fn template_position_lookup() {
        let template = MetadataTemplate::new(["File", "Title", "Place 1 Name"]);
        assert_eq!(template.position("Title"), Some(1));
        assert_eq!(template.position("Missing"), None);
        assert_eq!(template.len(), 3);
    }
}
