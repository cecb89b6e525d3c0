//! Metadata spreadsheet mapping.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use accession_ingest::{column_names, string_values};
use accession_model::{
    BoxRange, FieldMapping, FixedValue, MetadataTemplate, ModificationRule,
};
use accession_transform::{
    TransformError, build_metadata_frame, build_metadata_sheets, select_box_rows,
};

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

fn accessions() -> DataFrame {
    test_df(vec![
        ("Box Number", vec!["1", "1", "1", "2"]),
        ("Label", vec!["Worldcon 58", "PittCon 60", "LonCon 65", "Tricon 66"]),
        (
            "Local Identifier",
            vec![
                "curivsc_ms381_000001_0001",
                "",
                "curivsc_ms381_000002_0001",
                "curivsc_ms381_000003_0001",
            ],
        ),
        ("Description", vec!["Masquerade", "Banquet", "Hall", "Panel"]),
        ("City", vec!["Los Angeles", "Pittsburgh", "Paris", ""]),
        ("State", vec!["CA", "PA", "", ""]),
        ("Country", vec!["USA", "USA", "France", "USA"]),
    ])
}

fn mappings() -> Vec<FieldMapping> {
    vec![
        FieldMapping::direct("Local Identifier", "Identifier"),
        FieldMapping::direct("Description", "Title"),
        FieldMapping::new("Box Number", "Physical Location", ModificationRule::BoxLabel),
        FieldMapping::new("City; State; Country", "Place 1 Name", ModificationRule::Place),
        FieldMapping::direct("Label", "Type"),
    ]
}

fn fixed_values() -> Vec<FixedValue> {
    vec![
        FixedValue::new("Type", "image"),
        FixedValue::new("Rights Holder", "UC Riverside"),
    ]
}

fn template() -> MetadataTemplate {
    MetadataTemplate::new([
        "File",
        "Identifier",
        "Title",
        "Type",
        "Physical Location",
        "Place 1 Name",
        "Rights Holder",
        "Notes",
    ])
}

#[test]
fn selects_box_rows_with_identifiers() {
    let rows = select_box_rows(&accessions(), 1).unwrap();

    assert_eq!(
        string_values(&rows, "Label").unwrap(),
        vec!["Worldcon 58", "LonCon 65"]
    );
}

#[test]
fn builds_template_shaped_rows() {
    let rows = select_box_rows(&accessions(), 1).unwrap();

    let frame = build_metadata_frame(&rows, &mappings(), &fixed_values(), &template()).unwrap();

    assert_eq!(column_names(&frame), template().columns);
    assert_eq!(frame.height(), 2);
    assert_eq!(
        string_values(&frame, "Identifier").unwrap(),
        vec!["curivsc_ms381_000001_0001", "curivsc_ms381_000002_0001"]
    );
    assert_eq!(
        string_values(&frame, "Physical Location").unwrap(),
        vec!["Box 1", "Box 1"]
    );
    assert_eq!(
        string_values(&frame, "Place 1 Name").unwrap(),
        vec!["Los Angeles (Calif.)", "Paris, France"]
    );
    // Untouched columns exist and stay empty.
    assert_eq!(string_values(&frame, "File").unwrap(), vec!["", ""]);
    assert_eq!(string_values(&frame, "Notes").unwrap(), vec!["", ""]);
}

#[test]
fn fixed_values_win_and_repeat_on_every_row() {
    let rows = select_box_rows(&accessions(), 1).unwrap();

    let frame = build_metadata_frame(&rows, &mappings(), &fixed_values(), &template()).unwrap();

    assert_eq!(string_values(&frame, "Type").unwrap(), vec!["image", "image"]);
    assert_eq!(
        string_values(&frame, "Rights Holder").unwrap(),
        vec!["UC Riverside", "UC Riverside"]
    );
}

#[test]
fn country_only_place_becomes_united_states() {
    let rows = select_box_rows(&accessions(), 2).unwrap();

    let frame = build_metadata_frame(&rows, &mappings(), &[], &template()).unwrap();

    assert_eq!(
        string_values(&frame, "Place 1 Name").unwrap(),
        vec!["United States"]
    );
}

#[test]
fn one_sheet_per_box_including_empty_boxes() {
    let sheets = build_metadata_sheets(
        &accessions(),
        &mappings(),
        &fixed_values(),
        &template(),
        BoxRange::new(1, 3),
    )
    .unwrap();

    let counts: Vec<(u32, usize)> = sheets.iter().map(|s| (s.box_number, s.rows())).collect();
    assert_eq!(counts, vec![(1, 2), (2, 1), (3, 0)]);
    assert_eq!(column_names(&sheets[2].frame), template().columns);
}

#[test]
fn unknown_target_column_is_rejected() {
    let rows = select_box_rows(&accessions(), 1).unwrap();
    let mappings = vec![FieldMapping::direct("Label", "Series")];

    let err = build_metadata_frame(&rows, &mappings, &[], &template()).unwrap_err();

    assert!(matches!(
        err,
        TransformError::UnknownTargetColumn { ref column, origin: "mapping" } if column == "Series"
    ));
}

#[test]
fn missing_source_column_is_a_schema_error() {
    let rows = select_box_rows(&accessions(), 1).unwrap();
    let mappings = vec![FieldMapping::direct("Year", "Title")];

    let err = build_metadata_frame(&rows, &mappings, &[], &template()).unwrap_err();

    assert!(matches!(err, TransformError::MissingColumn { column } if column == "Year"));
}
