use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use accession_cli::types::{
    AssignIdsResult, BoxSheetsResult, CommandOutcome, MetadataResult, PlaceResult, SheetSummary,
};

pub fn print_summary(outcome: &CommandOutcome) {
    match outcome {
        CommandOutcome::AssignIds(result) => print_assign_summary(result),
        CommandOutcome::BoxSheets(result) => print_box_sheet_summary(result),
        CommandOutcome::Metadata(result) => print_metadata_summary(result),
        CommandOutcome::Place(result) => print_place(result),
    }
}

fn print_assign_summary(result: &AssignIdsResult) {
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output.display());
    let summary = &result.summary;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Rows"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Accession rows"), Cell::new(summary.rows)]);
    table.add_row(vec![Cell::new("Negatives"), Cell::new(summary.negatives)]);
    table.add_row(vec![
        Cell::new("Digitized in pilot"),
        Cell::new(summary.digitized_in_pilot),
    ]);
    table.add_row(vec![
        Cell::new("Identifiers assigned")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.assigned).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    if let (Some(first), Some(last)) = (&summary.first, &summary.last) {
        println!("Identifiers: {first} .. {last}");
    }
}

fn print_box_sheet_summary(result: &BoxSheetsResult) {
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output_dir.display());
    println!("{}", sheet_table(&result.sheets));
    if result.out_of_range > 0 {
        eprintln!(
            "warning: {} of {} negatives have a box number outside the worksheet range",
            result.out_of_range, result.negatives
        );
    }
}

fn print_metadata_summary(result: &MetadataResult) {
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output_dir.display());
    println!(
        "Mappings: {}  Fixed values: {}  Template columns: {}",
        result.mappings, result.fixed_values, result.template_columns
    );
    println!("{}", sheet_table(&result.sheets));
}

fn print_place(result: &PlaceResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("City"),
        header_cell("State"),
        header_cell("Country"),
        header_cell("Heading"),
    ]);
    apply_table_style(&mut table);
    table.add_row(vec![
        text_cell(&result.city),
        text_cell(&result.state),
        text_cell(&result.country),
        Cell::new(&result.heading).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn sheet_table(sheets: &[SheetSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Box"),
        header_cell("Rows"),
        header_cell("File"),
    ]);
    apply_sheet_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    let mut total_rows = 0usize;
    for sheet in sheets {
        total_rows += sheet.rows;
        table.add_row(vec![
            Cell::new(sheet.box_number)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            count_cell(sheet.rows),
            file_cell(&sheet.path),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        dim_cell(format!("{} files", sheets.len())),
    ]);
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_sheet_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Empty boxes are dimmed so gaps in the range stand out.
fn count_cell(rows: usize) -> Cell {
    if rows > 0 {
        Cell::new(rows)
    } else {
        dim_cell(rows)
    }
}

fn file_cell(path: &Path) -> Cell {
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    Cell::new(name)
}

fn text_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
