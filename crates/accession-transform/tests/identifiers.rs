//! Identifier assignment over accession frames.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use proptest::prelude::*;

use accession_ingest::{column_names, string_values};
use accession_model::{CollectionConfig, LocalIdentifier};
use accession_transform::{RowFlags, assign_identifiers, assign_local_identifiers};

fn test_df(columns: Vec<(&str, Vec<&str>)>) -> DataFrame {
    let cols: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| {
            Series::new(
                name.into(),
                values.iter().copied().map(String::from).collect::<Vec<_>>(),
            )
            .into_column()
        })
        .collect();
    DataFrame::new(cols).unwrap()
}

fn accession_df() -> DataFrame {
    test_df(vec![
        ("Box Number", vec!["1", "1", "1", "2", "2"]),
        ("Label", vec!["Worldcon 58", "PittCon 60", "Worldcon 58", "", "LonCon 65"]),
        ("ID", vec!["R1", "R2", "R3", "R4", "R5"]),
        ("Unique ID", vec!["u1", "u2", "u3", "u4", "u5"]),
        (
            "Format \n(35mm)",
            vec!["negatives", "negatives", "prints", "negatives, color", ""],
        ),
        ("City", vec!["Pittsburgh", "", "", "", ""]),
    ])
}

#[test]
fn assigns_identifiers_to_eligible_rows_only() {
    let assigned = assign_local_identifiers(&accession_df(), &CollectionConfig::default()).unwrap();

    let ids = assigned.frame.column("Local Identifier").unwrap().str().unwrap();
    let ids: Vec<Option<&str>> = ids.iter().collect();
    assert_eq!(
        ids,
        vec![
            Some("curivsc_ms381_000001_0001"),
            None,
            None,
            Some("curivsc_ms381_000002_0001"),
            None,
        ]
    );
    assert_eq!(assigned.summary.rows, 5);
    assert_eq!(assigned.summary.assigned, 2);
    assert_eq!(assigned.summary.negatives, 3);
    assert_eq!(assigned.summary.digitized_in_pilot, 1);
    assert_eq!(
        assigned.summary.last.as_deref(),
        Some("curivsc_ms381_000002_0001")
    );
}

#[test]
fn derived_columns_surround_legacy_id() {
    let assigned = assign_local_identifiers(&accession_df(), &CollectionConfig::default()).unwrap();

    assert_eq!(
        column_names(&assigned.frame),
        vec![
            "Box Number",
            "Label",
            "ID",
            "Local Identifier",
            "Legacy Unique ID",
            "Digitized in 2017 pilot",
            "Is negative",
            "Format \n(35mm)",
            "City",
        ]
    );
    assert_eq!(
        string_values(&assigned.frame, "Legacy Unique ID").unwrap(),
        vec!["u1", "u2", "u3", "u4", "u5"]
    );
    assert_eq!(
        string_values(&assigned.frame, "Digitized in 2017 pilot").unwrap(),
        vec!["False", "True", "False", "False", "False"]
    );
    assert_eq!(
        string_values(&assigned.frame, "Is negative").unwrap(),
        vec!["True", "True", "False", "True", "False"]
    );
}

#[test]
fn derived_columns_append_without_legacy_id() {
    let df = test_df(vec![
        ("Label", vec!["A"]),
        ("Format \n(35mm)", vec!["negatives"]),
    ]);

    let assigned = assign_local_identifiers(&df, &CollectionConfig::default()).unwrap();

    assert_eq!(
        column_names(&assigned.frame),
        vec![
            "Label",
            "Format \n(35mm)",
            "Local Identifier",
            "Digitized in 2017 pilot",
            "Is negative",
        ]
    );
}

#[test]
fn reassigning_an_assigned_frame_is_stable() {
    let config = CollectionConfig::default();
    let once = assign_local_identifiers(&accession_df(), &config).unwrap();
    let twice = assign_local_identifiers(&once.frame, &config).unwrap();

    assert_eq!(column_names(&once.frame), column_names(&twice.frame));
    assert!(once.frame.equals_missing(&twice.frame));
}

#[test]
fn missing_format_column_is_a_schema_error() {
    let df = test_df(vec![("Label", vec!["A"])]);

    let err = assign_local_identifiers(&df, &CollectionConfig::default()).unwrap_err();

    assert_eq!(err.to_string(), "required column 'Format \n(35mm)' not found");
}

proptest! {
    #[test]
    fn identifiers_follow_eligibility(raw in proptest::collection::vec((any::<bool>(), any::<bool>()), 0..200)) {
        let config = CollectionConfig::default();
        let flags: Vec<RowFlags> = raw
            .iter()
            .map(|&(digitized, negative)| RowFlags::new(digitized, negative))
            .collect();

        let ids = assign_identifiers(flags.iter().copied(), &config);

        prop_assert_eq!(ids.len(), flags.len());
        let eligible = flags.iter().filter(|f| f.is_eligible()).count();
        prop_assert_eq!(ids.iter().flatten().count(), eligible);
        for (flag, id) in flags.iter().zip(&ids) {
            prop_assert_eq!(flag.is_eligible(), id.is_some());
        }

        // Object numbers run 1, 2, 3, ... over the eligible rows.
        let numbers: Vec<u32> = ids
            .iter()
            .flatten()
            .map(|id| id.to_string().parse::<LocalIdentifier>().unwrap().object_number)
            .collect();
        let expected: Vec<u32> = (1..=numbers.len() as u32).collect();
        prop_assert_eq!(&numbers, &expected);
        prop_assert!(ids.iter().flatten().all(|id| id.component_number == 1));
    }

    #[test]
    fn assignment_is_deterministic(raw in proptest::collection::vec((any::<bool>(), any::<bool>()), 0..50)) {
        let config = CollectionConfig::default();
        let flags: Vec<RowFlags> = raw
            .iter()
            .map(|&(digitized, negative)| RowFlags::new(digitized, negative))
            .collect();

        prop_assert_eq!(
            assign_identifiers(flags.iter().copied(), &config),
            assign_identifiers(flags.iter().copied(), &config)
        );
    }
}
