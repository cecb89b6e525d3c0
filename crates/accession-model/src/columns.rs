//! Column names shared by the accession list, worksheets, and mapping tables.

/// Accession list columns read by the batch jobs.
pub const BOX_NUMBER: &str = "Box Number";
pub const LABEL: &str = "Label";
/// The format header carries an embedded line break in the source workbook.
pub const FORMAT: &str = "Format \n(35mm)";
pub const ID: &str = "ID";
pub const STRIP_ROW_NUMBER: &str = "Strip/Row Number";
pub const IMAGE_NUMBER: &str = "Image Number";
pub const UNIQUE_ID: &str = "Unique ID";
pub const CITY: &str = "City";
pub const STATE: &str = "State";
pub const COUNTRY: &str = "Country";

/// Columns derived by identifier assignment.
pub const LEGACY_UNIQUE_ID: &str = "Legacy Unique ID";
pub const LOCAL_IDENTIFIER: &str = "Local Identifier";
pub const DIGITIZED_IN_PILOT: &str = "Digitized in 2017 pilot";
pub const IS_NEGATIVE: &str = "Is negative";

/// Worksheet name for the renamed `ID` column.
pub const FILM_ROLL_ID: &str = "Film Roll ID";

/// Composite source name used by the place rule in mapping tables.
pub const PLACE_SOURCE: &str = "City; State; Country";

/// Mapping table headers.
pub const MAPPING_SOURCE_FIELD: &str = "Accession List Field";
pub const MAPPING_TARGET_FIELD: &str = "Nuxeo Spreadsheet Field";
pub const MAPPING_MODIFICATION: &str = "Modification";
pub const FIXED_VALUE: &str = "Value";

/// Columns of a per-box digitization worksheet, in output order, paired with
/// the accession column each one is read from.
pub const BOX_SHEET_COLUMNS: [(&str, &str); 7] = [
    (BOX_NUMBER, BOX_NUMBER),
    (LOCAL_IDENTIFIER, LOCAL_IDENTIFIER),
    (LABEL, LABEL),
    (FILM_ROLL_ID, ID),
    (STRIP_ROW_NUMBER, STRIP_ROW_NUMBER),
    (IMAGE_NUMBER, IMAGE_NUMBER),
    (DIGITIZED_IN_PILOT, DIGITIZED_IN_PILOT),
];

/// Accession columns read by the worksheet projection.
pub fn box_sheet_sources() -> impl Iterator<Item = &'static str> {
    BOX_SHEET_COLUMNS.iter().map(|(_, source)| *source)
}
