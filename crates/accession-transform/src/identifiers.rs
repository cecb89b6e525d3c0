//! Local identifier assignment.
//!
//! Rows are scanned in input order. A row is eligible when it is a negative
//! that was not scanned in the pilot; each eligible row takes the next
//! object number, starting at 1. Ineligible rows get no identifier and do
//! not consume a number.

use polars::prelude::{Column, DataFrame};
use tracing::{info, warn};

use accession_model::columns::{
    DIGITIZED_IN_PILOT, FORMAT, IS_NEGATIVE, LABEL, LEGACY_UNIQUE_ID, LOCAL_IDENTIFIER, UNIQUE_ID,
};
use accession_model::{CollectionConfig, LocalIdentifier};

use crate::error::Result;
use crate::frame::text;

/// Derived classification of one accession row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowFlags {
    pub digitized_in_pilot: bool,
    pub is_negative: bool,
}

impl RowFlags {
    pub fn new(digitized_in_pilot: bool, is_negative: bool) -> Self {
        Self {
            digitized_in_pilot,
            is_negative,
        }
    }

    pub fn is_eligible(self) -> bool {
        !self.digitized_in_pilot && self.is_negative
    }
}

/// Classifies a row by exact label membership and literal format prefix.
pub fn classify_row(label: &str, format: &str, config: &CollectionConfig) -> RowFlags {
    RowFlags::new(config.is_pilot_label(label), config.is_negative_format(format))
}

/// Assigns identifiers to eligible rows, in order.
///
/// The object counter is the accumulator of a left fold, so the output
/// depends only on the sequence of flags.
pub fn assign_identifiers<I>(flags: I, config: &CollectionConfig) -> Vec<Option<LocalIdentifier>>
where
    I: IntoIterator<Item = RowFlags>,
{
    let (_, identifiers) = flags.into_iter().fold(
        (1u32, Vec::new()),
        |(next, mut identifiers), flags| {
            if flags.is_eligible() {
                identifiers.push(Some(config.identifier(next)));
                (next + 1, identifiers)
            } else {
                identifiers.push(None);
                (next, identifiers)
            }
        },
    );
    identifiers
}

/// Counts reported after an assignment run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentSummary {
    pub rows: usize,
    pub digitized_in_pilot: usize,
    pub negatives: usize,
    pub assigned: usize,
    pub first: Option<String>,
    pub last: Option<String>,
}

/// Accession frame with derived columns, plus its summary.
#[derive(Debug, Clone)]
pub struct AssignedAccessions {
    pub frame: DataFrame,
    pub summary: AssignmentSummary,
}

const DERIVED_COLUMNS: [&str; 3] = [LOCAL_IDENTIFIER, DIGITIZED_IN_PILOT, IS_NEGATIVE];

/// Adds `Local Identifier`, `Digitized in 2017 pilot` and `Is negative` to an
/// accession frame.
///
/// `Unique ID` is renamed to `Legacy Unique ID`. The identifier column goes
/// immediately left of the legacy id and the two flags immediately right of
/// it; without a legacy id the three columns are appended. Derived columns
/// already present in the input are replaced.
pub fn assign_local_identifiers(
    df: &DataFrame,
    config: &CollectionConfig,
) -> Result<AssignedAccessions> {
    let labels = text(df, LABEL)?;
    let formats = text(df, FORMAT)?;

    let flags: Vec<RowFlags> = labels
        .iter()
        .zip(&formats)
        .map(|(label, format)| classify_row(label, format, config))
        .collect();
    let identifiers = assign_identifiers(flags.iter().copied(), config);

    let rendered: Vec<Option<String>> = identifiers
        .iter()
        .map(|id| id.as_ref().map(ToString::to_string))
        .collect();
    let summary = AssignmentSummary {
        rows: flags.len(),
        digitized_in_pilot: flags.iter().filter(|f| f.digitized_in_pilot).count(),
        negatives: flags.iter().filter(|f| f.is_negative).count(),
        assigned: rendered.iter().flatten().count(),
        first: rendered.iter().flatten().next().cloned(),
        last: rendered.iter().flatten().last().cloned(),
    };

    let identifier_col = Column::new(LOCAL_IDENTIFIER.into(), rendered);
    let digitized_col = Column::new(
        DIGITIZED_IN_PILOT.into(),
        flags.iter().map(|f| f.digitized_in_pilot).collect::<Vec<_>>(),
    );
    let negative_col = Column::new(
        IS_NEGATIVE.into(),
        flags.iter().map(|f| f.is_negative).collect::<Vec<_>>(),
    );

    let has_legacy = accession_ingest::has_column(df, LEGACY_UNIQUE_ID);
    let mut derived = Some((identifier_col, digitized_col, negative_col));
    let mut columns: Vec<Column> = Vec::with_capacity(df.width() + DERIVED_COLUMNS.len());
    for col in df.get_columns() {
        let name = col.name().as_str();
        if DERIVED_COLUMNS.contains(&name) {
            warn!(column = name, "replacing existing derived column");
            continue;
        }
        let anchor = if name == UNIQUE_ID && !has_legacy {
            Some(col.clone().with_name(LEGACY_UNIQUE_ID.into()))
        } else if name == LEGACY_UNIQUE_ID {
            Some(col.clone())
        } else {
            None
        };
        match (anchor, derived.take()) {
            (Some(legacy), Some((identifier, digitized, negative))) => {
                columns.extend([identifier, legacy, digitized, negative]);
            }
            (Some(legacy), None) => columns.push(legacy),
            (None, pending) => {
                derived = pending;
                columns.push(col.clone());
            }
        }
    }
    if let Some((identifier, digitized, negative)) = derived {
        columns.extend([identifier, digitized, negative]);
    }
    let frame = DataFrame::new(columns)?;

    info!(
        rows = summary.rows,
        pilot = summary.digitized_in_pilot,
        negatives = summary.negatives,
        assigned = summary.assigned,
        "assigned local identifiers"
    );

    Ok(AssignedAccessions { frame, summary })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CollectionConfig {
        CollectionConfig::default()
    }

    #[test]
    fn eligibility_requires_negative_outside_pilot() {
        assert!(RowFlags::new(false, true).is_eligible());
        assert!(!RowFlags::new(true, true).is_eligible());
        assert!(!RowFlags::new(false, false).is_eligible());
        assert!(!RowFlags::new(true, false).is_eligible());
    }

    #[test]
    fn classify_uses_exact_matches() {
        let config = config();
        assert_eq!(
            classify_row("PittCon 60", "negatives", &config),
            RowFlags::new(true, true)
        );
        assert_eq!(
            classify_row("PittCon 60 ", "Negatives", &config),
            RowFlags::new(false, false)
        );
        assert_eq!(classify_row("", "", &config), RowFlags::default());
    }

    #[test]
    fn counter_skips_ineligible_rows() {
        let flags = [
            RowFlags::new(false, true),
            RowFlags::new(true, true),
            RowFlags::new(false, false),
            RowFlags::new(false, true),
        ];
        let ids: Vec<Option<String>> = assign_identifiers(flags, &config())
            .into_iter()
            .map(|id| id.map(|id| id.to_string()))
            .collect();
        assert_eq!(
            ids,
            vec![
                Some("curivsc_ms381_000001_0001".to_string()),
                None,
                None,
                Some("curivsc_ms381_000002_0001".to_string()),
            ]
        );
    }

    #[test]
    fn empty_input_assigns_nothing() {
        assert!(assign_identifiers(Vec::new(), &config()).is_empty());
    }
}
